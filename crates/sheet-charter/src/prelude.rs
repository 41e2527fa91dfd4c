//! Prelude module - common imports for sheet-charter users
//!
//! ```rust
//! use sheet_charter::prelude::*;
//! ```

pub use crate::{
    // Import
    import_file,
    parse,
    // Chart preparation
    prepare_chart,
    prepare_from_config,
    AxisSelection,
    ChartConfiguration,
    ChartData,
    ChartKind,
    // Column analysis
    ColumnSummary,
    ColumnType,
    ExclusionSet,
    FormatHint,
    // Main types
    Grid,
    ImportOptions,
    ImportOutcome,

    // Error types
    ParseError,
    PlotPoint,
    // Sheets
    SheetData,
    SheetFile,
    SheetId,
    SheetRegistry,
    ValidationError,
    ValidationWarning,
    XValue,
};
