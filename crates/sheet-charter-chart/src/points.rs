//! Plot points

use std::fmt;

use sheet_charter_core::grid::cell_at;
use sheet_charter_core::{column, parse_number, Grid};

use crate::filter::IndexedRow;
use crate::selection::AxisSelection;

/// The x value of a point
///
/// A numeric x column yields ordinates that sort and scale as numbers;
/// anything else yields categories kept verbatim.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum XValue {
    Number(f64),
    Category(String),
}

impl XValue {
    pub fn as_number(&self) -> Option<f64> {
        match self {
            XValue::Number(n) => Some(*n),
            XValue::Category(_) => None,
        }
    }

    pub fn as_category(&self) -> Option<&str> {
        match self {
            XValue::Category(s) => Some(s),
            XValue::Number(_) => None,
        }
    }
}

impl fmt::Display for XValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            XValue::Number(n) => write!(f, "{}", n),
            XValue::Category(s) => f.write_str(s),
        }
    }
}

impl From<&str> for XValue {
    fn from(s: &str) -> Self {
        XValue::Category(s.to_string())
    }
}

impl From<f64> for XValue {
    fn from(n: f64) -> Self {
        XValue::Number(n)
    }
}

/// One (x, y) pair to draw
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlotPoint {
    pub x: XValue,
    pub y: f64,
}

impl PlotPoint {
    pub fn new<X: Into<XValue>>(x: X, y: f64) -> Self {
        Self { x: x.into(), y }
    }
}

/// Turn filtered rows into plot points
///
/// Rows whose y cell is not a number are dropped; partial output is the
/// normal case for sparse columns. When the x column is numeric, rows
/// whose x cell is not a number are dropped as well, including rows whose
/// x cell is blank and whose y value is valid, since they have no
/// ordinate. In a text x column a blank x cell is an empty category and
/// the row is kept. Output follows input order, with no sorting or
/// de-duplication.
pub fn build(grid: &Grid, rows: &[IndexedRow<'_>], selection: &AxisSelection) -> Vec<PlotPoint> {
    let numeric_x = column::column_type(grid, selection.x_column).is_numeric();

    let points: Vec<PlotPoint> = rows
        .iter()
        .filter_map(|r| {
            let y = parse_number(cell_at(r.row, selection.y_column))?;
            let raw_x = cell_at(r.row, selection.x_column);
            let x = if numeric_x {
                XValue::Number(parse_number(raw_x)?)
            } else {
                XValue::Category(raw_x.to_string())
            };
            Some(PlotPoint { x, y })
        })
        .collect();

    if points.len() < rows.len() {
        log::debug!(
            "Dropped {} of {} rows without plottable values",
            rows.len() - points.len(),
            rows.len()
        );
    }

    points
}
