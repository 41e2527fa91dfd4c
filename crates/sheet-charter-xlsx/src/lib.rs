//! # sheet-charter-xlsx
//!
//! XLSX (Office Open XML) reader for sheet-charter.
//!
//! Only the first worksheet that can be read is turned into a grid; cell
//! values are resolved to strings through the shared-string table.

pub mod error;
pub mod reader;

pub use error::{XlsxError, XlsxResult};
pub use reader::XlsxReader;
