//! # sheet-charter
//!
//! Import CSV and XLSX tables and turn two of their columns into chart data.
//!
//! ## Features
//!
//! - Read comma-separated text and the first worksheet of an XLSX archive
//!   into a [`Grid`] of raw strings
//! - Classify columns as numeric or text, with previews for column pickers
//! - Validate an [`AxisSelection`], exclude rows, and build [`PlotPoint`]s
//! - Track imports per sheet so a slow, outdated import never overwrites a
//!   newer one
//!
//! ## Example
//!
//! ```rust
//! use sheet_charter::prelude::*;
//!
//! let mut registry = SheetRegistry::new();
//! let id = registry.add_for_file("Sales.csv");
//! registry.import_bytes(
//!     id,
//!     b"Month,Sales\nJanuary,1000\nFebruary,1500\nMarch,1200",
//!     FormatHint::Csv,
//! );
//!
//! let grid = registry.get(id).and_then(|s| s.grid()).unwrap();
//! let mut exclusions = ExclusionSet::new();
//! exclusions.exclude(1);
//!
//! let chart = prepare_chart(grid, &AxisSelection::new(0, 1, ChartKind::Bar), &exclusions).unwrap();
//! assert_eq!(
//!     chart.points,
//!     vec![
//!         PlotPoint::new("January", 1000.0),
//!         PlotPoint::new("March", 1200.0),
//!     ]
//! );
//! ```

mod format;
mod import;
pub mod prelude;
mod prepare;
pub mod registry;
mod staging;

pub use format::FormatHint;
pub use import::{import_file, parse, ImportOptions};
pub use prepare::{prepare_chart, prepare_from_config, ChartData};
pub use registry::{ImportOutcome, ImportToken, PendingImport, SheetRegistry};

// Re-export core types
pub use sheet_charter_core::{
    column, title_from_filename, ColumnSummary, ColumnType, Grid, ParseError, ParseErrorKind,
    SheetData, SheetFile, SheetId, DEFAULT_PREVIEW_LIMIT,
};

// Re-export chart types
pub use sheet_charter_chart::{
    build, filter, validate, AxisSelection, ChartConfiguration, ChartKind, ExclusionSet,
    FilterSummary, IndexedRow, PlotPoint, UnknownChartKind, ValidationError, ValidationResult,
    ValidationWarning, XValue, DEFAULT_CHART_COLOR,
};

// Re-export I/O types
pub use sheet_charter_csv::{CsvError, CsvReadOptions, CsvReader};
pub use sheet_charter_xlsx::{XlsxError, XlsxReader};
