//! Error types for sheet-charter-core

use thiserror::Error;

/// Result type alias using [`ParseError`]
pub type Result<T> = std::result::Result<T, ParseError>;

/// Errors that end an import
///
/// Every file format reports failures through this type, so callers can react
/// to a failed import without knowing which reader produced it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The byte stream could not be decoded as text or as an archive
    #[error("Unreadable source: {0}")]
    UnreadableSource(String),

    /// The archive opened but none of its worksheets could be read
    #[error("No readable worksheet found in the workbook")]
    NoWorksheet,

    /// The file extension is not one of the accepted formats
    #[error("Unsupported file format: {0}")]
    UnsupportedFormat(String),
}

/// Discriminant of a [`ParseError`], without its payload
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParseErrorKind {
    UnreadableSource,
    NoWorksheet,
    UnsupportedFormat,
}

impl ParseError {
    /// Create an unreadable-source error with a message
    pub fn unreadable<S: Into<String>>(msg: S) -> Self {
        ParseError::UnreadableSource(msg.into())
    }

    /// Get the kind of this error
    pub fn kind(&self) -> ParseErrorKind {
        match self {
            ParseError::UnreadableSource(_) => ParseErrorKind::UnreadableSource,
            ParseError::NoWorksheet => ParseErrorKind::NoWorksheet,
            ParseError::UnsupportedFormat(_) => ParseErrorKind::UnsupportedFormat,
        }
    }
}

impl From<std::io::Error> for ParseError {
    fn from(err: std::io::Error) -> Self {
        ParseError::UnreadableSource(err.to_string())
    }
}
