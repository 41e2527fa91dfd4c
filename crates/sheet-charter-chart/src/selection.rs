//! Axis selection

use sheet_charter_core::{column, Grid};

use crate::kind::ChartKind;

/// The two columns to plot, plus the chart kind
///
/// A selection is only meaningful for the grid it was validated against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AxisSelection {
    /// Column supplying categories or ordinates (x axis)
    pub x_column: usize,
    /// Column supplying values (y axis)
    pub y_column: usize,
    /// Chart kind
    pub kind: ChartKind,
}

impl Default for AxisSelection {
    fn default() -> Self {
        Self {
            x_column: 0,
            y_column: 1,
            kind: ChartKind::Bar,
        }
    }
}

impl AxisSelection {
    /// Create a new selection
    pub fn new(x_column: usize, y_column: usize, kind: ChartKind) -> Self {
        Self {
            x_column,
            y_column,
            kind,
        }
    }

    /// Set the chart kind
    pub fn with_kind(mut self, kind: ChartKind) -> Self {
        self.kind = kind;
        self
    }

    /// A starting selection for a freshly imported grid
    ///
    /// The first column goes on the x axis. The y axis gets the first numeric
    /// column after it, or any numeric column, or simply the second column.
    pub fn suggested(grid: &Grid, kind: ChartKind) -> Self {
        let numeric: Vec<usize> = (0..grid.column_count())
            .filter(|&col| column::is_valid_for_y_axis(grid, col))
            .collect();

        let y_column = numeric
            .iter()
            .copied()
            .find(|&col| col != 0)
            .or_else(|| numeric.first().copied())
            .unwrap_or(if grid.column_count() > 1 { 1 } else { 0 });

        Self::new(0, y_column, kind)
    }

    /// Axis titles: the selected column names, or `"X"` and `"Y"`
    pub fn axis_labels(&self, grid: &Grid) -> (String, String) {
        (
            grid.column_name(self.x_column).unwrap_or("X").to_string(),
            grid.column_name(self.y_column).unwrap_or("Y").to_string(),
        )
    }
}
