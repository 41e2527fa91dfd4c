//! # sheet-charter-core
//!
//! Core data structures for the sheet-charter import pipeline.
//!
//! This crate provides the fundamental types used throughout sheet-charter:
//! - [`Grid`] - A parsed table: one header row plus data rows of raw cell strings
//! - [`SheetFile`] and [`SheetData`] - An imported file and its load state
//! - [`ColumnType`] and the [`column`] analysis functions
//! - [`ParseError`] - The error taxonomy shared by every file format
//!
//! ## Example
//!
//! ```rust
//! use sheet_charter_core::{column, ColumnType, Grid};
//!
//! let grid = Grid::new(
//!     vec!["Month".into(), "Sales".into()],
//!     vec![
//!         vec!["January".into(), "1000".into()],
//!         vec!["February".into(), "1500".into()],
//!     ],
//! );
//!
//! assert_eq!(column::column_type(&grid, 0), ColumnType::Text);
//! assert_eq!(column::column_type(&grid, 1), ColumnType::Numeric);
//! assert_eq!(column::preview(&grid, 0, 1), vec!["January"]);
//! ```

pub mod column;
pub mod error;
pub mod grid;
pub mod number;
pub mod sheet;

// Re-exports for convenience
pub use column::{ColumnSummary, ColumnType, DEFAULT_PREVIEW_LIMIT};
pub use error::{ParseError, ParseErrorKind, Result};
pub use grid::Grid;
pub use number::parse_number;
pub use sheet::{title_from_filename, SheetData, SheetFile, SheetId};
