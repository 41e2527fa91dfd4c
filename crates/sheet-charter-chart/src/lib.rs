//! # sheet-charter-chart
//!
//! Chart data preparation for sheet-charter.
//!
//! Turning a [`Grid`](sheet_charter_core::Grid) into plot points takes three
//! pure steps, re-run by the caller whenever the selection or the exclusions
//! change:
//!
//! 1. [`validate`] the [`AxisSelection`] against the grid
//! 2. [`filter`] out the rows in the [`ExclusionSet`]
//! 3. [`build`] the [`PlotPoint`]s from the surviving rows

mod config;
mod error;
mod filter;
mod kind;
mod points;
mod selection;
mod validate;

pub use config::{ChartConfiguration, DEFAULT_CHART_COLOR};
pub use error::{UnknownChartKind, ValidationError};
pub use filter::{filter, ExclusionSet, FilterSummary, IndexedRow};
pub use kind::ChartKind;
pub use points::{build, PlotPoint, XValue};
pub use selection::AxisSelection;
pub use validate::{validate, ValidationResult, ValidationWarning};
