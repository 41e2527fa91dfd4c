//! CSV error types

use sheet_charter_core::ParseError;
use thiserror::Error;

/// Result type for CSV operations
pub type CsvResult<T> = std::result::Result<T, CsvError>;

/// Errors that can occur during CSV operations
#[derive(Debug, Error)]
pub enum CsvError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV library error, including invalid UTF-8 in a record
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

impl From<CsvError> for ParseError {
    fn from(err: CsvError) -> Self {
        ParseError::UnreadableSource(err.to_string())
    }
}
