//! Validated chart data

use sheet_charter_chart::{
    build, filter, validate, AxisSelection, ChartConfiguration, ChartKind, ExclusionSet,
    PlotPoint, ValidationError, ValidationWarning,
};
use sheet_charter_core::Grid;

/// Everything a renderer needs to draw one chart
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ChartData {
    pub kind: ChartKind,
    pub x_label: String,
    pub y_label: String,
    /// Points in row order
    pub points: Vec<PlotPoint>,
    /// Concerns that did not block the chart
    #[cfg_attr(feature = "serde", serde(skip))]
    pub warnings: Vec<ValidationWarning>,
}

impl ChartData {
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Validate a selection, then filter and build its points
///
/// # Examples
/// ```
/// use sheet_charter::prelude::*;
///
/// let grid = parse(
///     b"Month,Sales\nJanuary,1000\nFebruary,1500\n",
///     FormatHint::Csv,
///     &ImportOptions::default(),
/// )
/// .unwrap();
///
/// let chart = prepare_chart(&grid, &AxisSelection::default(), &ExclusionSet::new()).unwrap();
/// assert_eq!(chart.y_label, "Sales");
/// assert_eq!(chart.points[1], PlotPoint::new("February", 1500.0));
/// ```
pub fn prepare_chart(
    grid: &Grid,
    selection: &AxisSelection,
    exclusions: &ExclusionSet,
) -> Result<ChartData, ValidationError> {
    let warnings = validate(grid, selection, exclusions).into_result()?;
    for warning in &warnings {
        log::debug!("Chart selection warning: {}", warning);
    }

    let rows = filter(grid, exclusions);
    let points = build(grid, &rows, selection);
    let (x_label, y_label) = selection.axis_labels(grid);

    Ok(ChartData {
        kind: selection.kind,
        x_label,
        y_label,
        points,
        warnings,
    })
}

/// Prepare a stored chart against the current grid
///
/// Custom axis titles in the configuration replace the column names.
pub fn prepare_from_config(
    grid: &Grid,
    config: &ChartConfiguration,
) -> Result<ChartData, ValidationError> {
    let mut data = prepare_chart(grid, &config.selection(), &config.exclusions())?;
    if let Some(label) = &config.x_axis_label {
        data.x_label = label.clone();
    }
    if let Some(label) = &config.y_axis_label {
        data.y_label = label.clone();
    }
    Ok(data)
}
