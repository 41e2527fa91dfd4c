//! Accepted source formats

use std::path::Path;

use sheet_charter_core::ParseError;

/// Which reader a source goes to
///
/// The file extension alone decides; contents are never sniffed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormatHint {
    /// Comma-separated text (`.csv`)
    Csv,
    /// Spreadsheet archive (`.xlsx`, `.xls`)
    Xlsx,
}

impl FormatHint {
    /// Map a file extension (without the dot) to a format
    ///
    /// # Examples
    /// ```
    /// use sheet_charter::FormatHint;
    ///
    /// assert_eq!(FormatHint::from_extension("CSV").unwrap(), FormatHint::Csv);
    /// assert_eq!(FormatHint::from_extension("xls").unwrap(), FormatHint::Xlsx);
    /// assert!(FormatHint::from_extension("pdf").is_err());
    /// ```
    pub fn from_extension(extension: &str) -> Result<Self, ParseError> {
        match extension.to_ascii_lowercase().as_str() {
            "csv" => Ok(FormatHint::Csv),
            "xlsx" | "xls" => Ok(FormatHint::Xlsx),
            _ => Err(ParseError::UnsupportedFormat(extension.to_string())),
        }
    }

    /// Map a path's extension to a format
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, ParseError> {
        let path = path.as_ref();
        match path.extension().and_then(|e| e.to_str()) {
            Some(extension) => Self::from_extension(extension),
            None => Err(ParseError::UnsupportedFormat(path.display().to_string())),
        }
    }

    /// Extension used for staged copies
    pub(crate) fn extension(&self) -> &'static str {
        match self {
            FormatHint::Csv => "csv",
            FormatHint::Xlsx => "xlsx",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sheet_charter_core::ParseErrorKind;

    #[test]
    fn test_from_path() {
        assert_eq!(FormatHint::from_path("data/Sales.xlsx").unwrap(), FormatHint::Xlsx);
        assert_eq!(FormatHint::from_path("report.Csv").unwrap(), FormatHint::Csv);
    }

    #[test]
    fn test_rejected_extensions() {
        for path in ["notes.txt", "table.tsv", "book.ods", "README"] {
            assert_eq!(
                FormatHint::from_path(path).unwrap_err().kind(),
                ParseErrorKind::UnsupportedFormat
            );
        }
    }
}
