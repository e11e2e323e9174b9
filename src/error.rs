//! Failure taxonomy for the aggregation run.

use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SalesError {
    #[error("{0} does not exist")]
    FileNotFound(String),

    #[error("{0} has an invalid format")]
    InvalidFormat(String),

    #[error("sales file names are not consecutive")]
    NonConsecutiveSequence,

    #[error("{0} has an invalid branch code")]
    InvalidBranchCode(String),

    #[error("{0} has an invalid commodity code")]
    InvalidCommodityCode(String),

    #[error("total amount exceeded 10 digits")]
    AmountOverflow,

    // Display stays generic; the cause is only reachable through source().
    #[error("an unexpected error occurred")]
    Unexpected(#[from] io::Error),
}

impl From<csv::Error> for SalesError {
    fn from(err: csv::Error) -> Self {
        match err.into_kind() {
            csv::ErrorKind::Io(err) => Self::Unexpected(err),
            other => Self::Unexpected(io::Error::new(
                io::ErrorKind::InvalidData,
                format!("{other:?}"),
            )),
        }
    }
}

impl From<regex::Error> for SalesError {
    fn from(err: regex::Error) -> Self {
        Self::Unexpected(io::Error::new(io::ErrorKind::InvalidData, err))
    }
}

pub type Result<T> = std::result::Result<T, SalesError>;
