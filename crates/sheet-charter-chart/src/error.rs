//! Chart error types

use thiserror::Error;

/// Why an axis selection cannot be charted
///
/// None of these are fatal: the selection stays editable and can be
/// validated again after the user corrects it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A selected column does not exist in the grid
    #[error("Column {column} does not exist; the sheet has {column_count} columns")]
    ColumnOutOfRange { column: usize, column_count: usize },

    /// Every data row is excluded, or the sheet has none
    #[error("No data rows selected; include at least one row to build a chart")]
    NoData,

    /// The y-axis column holds values that are not numbers
    #[error("Y-axis column '{name}' must contain numeric values")]
    YAxisNotNumeric { column: usize, name: String },
}

/// A chart kind name that is not recognized
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown chart kind: {0}")]
pub struct UnknownChartKind(pub String);
