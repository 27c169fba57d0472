//! Error types for statement import

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ImportError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV parsing error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Regex error: {0}")]
    Regex(#[from] regex::Error),

    #[error("Unrecognized statement format: missing {0} column(s)")]
    UnrecognizedFormat(String),

    #[error("Statement is empty")]
    Empty,
}

pub type Result<T> = std::result::Result<T, ImportError>;
