use crate::error::{Result, SalesError};
use crate::ledger::{checked_total, Ledger};
use regex::Regex;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

const RECORD_NAME_PATTERN: &str = r"^[0-9]{8}\.rcd$";
const AMOUNT_PATTERN: &str = "^[0-9]+$";

/// One day's sale, named by an eight digit sequence number.
#[derive(Debug)]
pub struct RecordFile {
    pub name: String,
    pub sequence: u32,
    pub path: PathBuf,
}

/// Collects the record files in `dir`, sorted by name. Anything that is not
/// a regular file with a matching name is ignored.
pub fn collect(dir: &Path) -> Result<Vec<RecordFile>> {
    let name_re = Regex::new(RECORD_NAME_PATTERN)?;
    let mut files = Vec::new();

    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let file_name = entry.file_name();
        let Some(name) = file_name.to_str() else {
            continue;
        };
        if !name_re.is_match(name) || !entry.path().is_file() {
            continue;
        }
        let sequence = name[..8]
            .parse()
            .map_err(|err| io::Error::new(io::ErrorKind::InvalidData, err))?;
        files.push(RecordFile {
            name: name.to_string(),
            sequence,
            path: entry.path(),
        });
    }

    files.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(files)
}

/// Sequence numbers must form an unbroken run with step one.
pub fn verify_consecutive(files: &[RecordFile]) -> Result<()> {
    for pair in files.windows(2) {
        if pair[1].sequence != pair[0].sequence + 1 {
            return Err(SalesError::NonConsecutiveSequence);
        }
    }
    Ok(())
}

/// Applies every record file in order, stopping at the first bad one.
pub fn apply(files: &[RecordFile], branches: &mut Ledger, commodities: &mut Ledger) -> Result<()> {
    let amount_re = Regex::new(AMOUNT_PATTERN)?;
    for file in files {
        apply_record(file, &amount_re, branches, commodities)?;
    }
    Ok(())
}

fn apply_record(
    file: &RecordFile,
    amount_re: &Regex,
    branches: &mut Ledger,
    commodities: &mut Ledger,
) -> Result<()> {
    let content = fs::read_to_string(&file.path)?;
    let lines: Vec<&str> = content.lines().collect();
    if lines.len() != 3 {
        return Err(SalesError::InvalidFormat(file.name.clone()));
    }
    let (branch_code, commodity_code, amount) = (lines[0], lines[1], lines[2]);

    let Some(branch_total) = branches.total(branch_code) else {
        return Err(SalesError::InvalidBranchCode(file.name.clone()));
    };
    let Some(commodity_total) = commodities.total(commodity_code) else {
        return Err(SalesError::InvalidCommodityCode(file.name.clone()));
    };

    if !amount_re.is_match(amount) {
        return Err(io::Error::new(
            io::ErrorKind::InvalidData,
            format!("{} has a non-numeric amount", file.name),
        )
        .into());
    }
    let amount: i64 = amount
        .parse()
        .map_err(|err| io::Error::new(io::ErrorKind::InvalidData, err))?;

    // Neither ledger is touched until both new totals are known to fit.
    let branch_next = checked_total(branch_total, amount)?;
    let commodity_next = checked_total(commodity_total, amount)?;
    branches.set_total(branch_code, branch_next);
    commodities.set_total(commodity_code, commodity_next);
    Ok(())
}
