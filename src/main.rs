mod error;
mod ledger;
mod records;

use error::Result;
use ledger::Ledger;
use std::env;
use std::io;
use std::path::PathBuf;
use std::process;

const BRANCH_DEFINITIONS: &str = "branch.lst";
const BRANCH_SUMMARY: &str = "branch.out";
const BRANCH_CODE_PATTERN: &str = "^[0-9]{3}$";
const BRANCH_LABEL: &str = "branch definition file";

const COMMODITY_DEFINITIONS: &str = "commodity.lst";
const COMMODITY_SUMMARY: &str = "commodity.out";
const COMMODITY_CODE_PATTERN: &str = "^[a-zA-Z0-9]{8}$";
const COMMODITY_LABEL: &str = "commodity definition file";

fn main() {
    if let Err(err) = run() {
        println!("{err}");
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let dir = target_dir()?;

    let mut branches = Ledger::load(&dir, BRANCH_DEFINITIONS, BRANCH_CODE_PATTERN, BRANCH_LABEL)?;
    let mut commodities = Ledger::load(
        &dir,
        COMMODITY_DEFINITIONS,
        COMMODITY_CODE_PATTERN,
        COMMODITY_LABEL,
    )?;

    let files = records::collect(&dir)?;
    records::verify_consecutive(&files)?;
    records::apply(&files, &mut branches, &mut commodities)?;

    branches.write_summary(&dir, BRANCH_SUMMARY)?;
    commodities.write_summary(&dir, COMMODITY_SUMMARY)?;

    Ok(())
}

fn target_dir() -> Result<PathBuf> {
    let mut args = env::args_os().skip(1);
    match (args.next(), args.next()) {
        (Some(dir), None) => Ok(PathBuf::from(dir)),
        _ => Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            "expected exactly one directory argument",
        )
        .into()),
    }
}
