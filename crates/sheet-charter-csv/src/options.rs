//! CSV options

/// Field delimiter. Comma-separated input is the only text format accepted.
pub const DELIMITER: u8 = b',';

/// Options for reading CSV files
#[derive(Debug, Clone)]
pub struct CsvReadOptions {
    /// Quote character (default: double quote)
    pub quote: u8,
}

impl Default for CsvReadOptions {
    fn default() -> Self {
        Self { quote: b'"' }
    }
}

impl CsvReadOptions {
    /// Set the quote character
    pub fn with_quote(mut self, quote: u8) -> Self {
        self.quote = quote;
        self
    }
}
