//! # sheet-charter-csv
//!
//! Comma-separated text reader for sheet-charter.
//!
//! The first non-blank line becomes the grid header and every later line a
//! data row. Lines may end in `\n`, `\r\n` or a lone `\r`.

mod error;
mod options;
mod reader;

pub use error::{CsvError, CsvResult};
pub use options::{CsvReadOptions, DELIMITER};
pub use reader::CsvReader;
