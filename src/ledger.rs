use crate::error::{Result, SalesError};
use regex::Regex;
use serde::Serialize;
use std::collections::HashMap;
use std::fs::File;
use std::path::Path;

/// Totals must stay below ten digits.
pub const TOTAL_LIMIT: i64 = 10_000_000_000;

#[derive(Debug, PartialEq, Eq)]
pub struct CodeEntry {
    pub code: String,
    pub name: String,
    pub total: i64,
}

/// Code-keyed names and running totals, iterated in definition order.
#[derive(Debug, Default)]
pub struct Ledger {
    entries: Vec<CodeEntry>,
    index: HashMap<String, usize>,
}

#[derive(Serialize)]
struct SummaryRow<'a> {
    code: &'a str,
    name: &'a str,
    total: i64,
}

impl Ledger {
    /// Reads a `<code>,<name>` definition file, starting every total at zero.
    pub fn load(dir: &Path, file_name: &str, code_pattern: &str, label: &str) -> Result<Self> {
        let code_re = Regex::new(code_pattern)?;
        let path = dir.join(file_name);
        if !path.exists() {
            return Err(SalesError::FileNotFound(label.to_string()));
        }

        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(File::open(path)?);

        let mut ledger = Self::default();
        for record in reader.records() {
            let record = record?;
            if record.len() != 2 || !code_re.is_match(&record[0]) {
                return Err(SalesError::InvalidFormat(label.to_string()));
            }
            ledger.insert(record[0].to_string(), record[1].to_string());
        }

        Ok(ledger)
    }

    fn insert(&mut self, code: String, name: String) {
        match self.index.get(&code) {
            Some(&at) => self.entries[at].name = name,
            None => {
                self.index.insert(code.clone(), self.entries.len());
                self.entries.push(CodeEntry {
                    code,
                    name,
                    total: 0,
                });
            }
        }
    }

    /// Current total for a code, or `None` if the code was never defined.
    pub fn total(&self, code: &str) -> Option<i64> {
        self.index.get(code).map(|&at| self.entries[at].total)
    }

    pub fn set_total(&mut self, code: &str, total: i64) {
        if let Some(&at) = self.index.get(code) {
            self.entries[at].total = total;
        }
    }

    /// Writes `code,name,total` lines in definition order, replacing any
    /// existing file.
    pub fn write_summary(&self, dir: &Path, file_name: &str) -> Result<()> {
        let file = File::create(dir.join(file_name))?;
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .terminator(if cfg!(windows) {
                csv::Terminator::CRLF
            } else {
                csv::Terminator::Any(b'\n')
            })
            .from_writer(file);

        for entry in &self.entries {
            writer.serialize(SummaryRow {
                code: &entry.code,
                name: &entry.name,
                total: entry.total,
            })?;
        }

        writer.flush()?;
        Ok(())
    }
}

/// Total a sale would bring `current` to, refusing anything past the cap.
pub fn checked_total(current: i64, amount: i64) -> Result<i64> {
    current
        .checked_add(amount)
        .filter(|total| *total < TOTAL_LIMIT)
        .ok_or(SalesError::AmountOverflow)
}
