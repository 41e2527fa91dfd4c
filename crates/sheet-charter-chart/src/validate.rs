//! Axis selection validation

use std::fmt;

use sheet_charter_core::{column, Grid};

use crate::error::ValidationError;
use crate::filter::ExclusionSet;
use crate::selection::AxisSelection;

/// Usability concerns that do not block charting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationWarning {
    /// The same column was picked for both axes
    SameColumnForBothAxes { column: usize },
}

impl fmt::Display for ValidationWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationWarning::SameColumnForBothAxes { .. } => {
                f.write_str("The same column is used for both axes")
            }
        }
    }
}

/// Outcome of validating a selection
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationResult {
    /// The first rule the selection breaks, if any
    pub error: Option<ValidationError>,
    /// Non-blocking concerns
    pub warnings: Vec<ValidationWarning>,
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        self.error.is_none()
    }

    /// Convert into a `Result`, keeping the warnings on success
    pub fn into_result(self) -> Result<Vec<ValidationWarning>, ValidationError> {
        match self.error {
            Some(err) => Err(err),
            None => Ok(self.warnings),
        }
    }

    fn failed(error: ValidationError) -> Self {
        Self {
            error: Some(error),
            warnings: Vec::new(),
        }
    }
}

/// Check whether a selection can be charted from a grid
///
/// Rules are checked in order and the first failure wins:
/// 1. both columns exist ([`ValidationError::ColumnOutOfRange`])
/// 2. at least one data row survives the exclusions ([`ValidationError::NoData`])
/// 3. the y column is numeric ([`ValidationError::YAxisNotNumeric`])
///
/// The x column has no type constraint. Picking the same column twice is
/// allowed and only reported as a warning.
pub fn validate(
    grid: &Grid,
    selection: &AxisSelection,
    exclusions: &ExclusionSet,
) -> ValidationResult {
    let column_count = grid.column_count();
    for column in [selection.x_column, selection.y_column] {
        if column >= column_count {
            return ValidationResult::failed(ValidationError::ColumnOutOfRange {
                column,
                column_count,
            });
        }
    }

    if exclusions.summary(grid).selected == 0 {
        return ValidationResult::failed(ValidationError::NoData);
    }

    if !column::is_valid_for_y_axis(grid, selection.y_column) {
        return ValidationResult::failed(ValidationError::YAxisNotNumeric {
            column: selection.y_column,
            name: grid
                .column_name(selection.y_column)
                .unwrap_or_default()
                .to_string(),
        });
    }

    let mut warnings = Vec::new();
    if selection.x_column == selection.y_column {
        warnings.push(ValidationWarning::SameColumnForBothAxes {
            column: selection.x_column,
        });
    }

    ValidationResult {
        error: None,
        warnings,
    }
}
