//! Chart configuration records

use chrono::{DateTime, Utc};
use sheet_charter_core::SheetId;
use uuid::Uuid;

use crate::filter::ExclusionSet;
use crate::kind::ChartKind;
use crate::selection::AxisSelection;

/// Default series color (hex)
pub const DEFAULT_CHART_COLOR: &str = "#007AFF";

/// The durable shape of a configured chart
///
/// Storage is up to the caller. This type only fixes what a stored chart
/// holds and how it maps back to an [`AxisSelection`] and an
/// [`ExclusionSet`]. The chart kind is kept as its name so records written by
/// newer versions still load.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ChartConfiguration {
    pub id: Uuid,
    pub name: String,
    /// Stored chart kind name, see [`ChartKind::from_stored`]
    pub chart_kind: String,
    pub x_axis_column: usize,
    pub y_axis_column: usize,
    pub date_created: DateTime<Utc>,

    /// Series color as a hex string
    pub chart_color: String,
    pub show_legend: bool,
    pub show_grid_lines: bool,
    pub x_axis_label: Option<String>,
    pub y_axis_label: Option<String>,

    /// Excluded data rows (0-based, header not counted), ascending
    pub excluded_row_indices: Option<Vec<usize>>,
    /// Columns to include; `None` means all
    pub included_columns: Option<Vec<usize>>,

    /// Sheet this chart was built from
    pub sheet_id: Option<SheetId>,
}

impl ChartConfiguration {
    /// Create a configuration with default styling and no exclusions
    pub fn new<S: Into<String>>(name: S, selection: &AxisSelection) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            chart_kind: selection.kind.name().to_string(),
            x_axis_column: selection.x_column,
            y_axis_column: selection.y_column,
            date_created: Utc::now(),
            chart_color: DEFAULT_CHART_COLOR.to_string(),
            show_legend: true,
            show_grid_lines: true,
            x_axis_label: None,
            y_axis_label: None,
            excluded_row_indices: None,
            included_columns: None,
            sheet_id: None,
        }
    }

    /// Snapshot an exclusion set; an empty set is stored as `None`
    pub fn with_exclusions(mut self, exclusions: &ExclusionSet) -> Self {
        self.excluded_row_indices = if exclusions.is_empty() {
            None
        } else {
            Some(exclusions.iter().collect())
        };
        self
    }

    /// Set the series color
    pub fn with_color<S: Into<String>>(mut self, color: S) -> Self {
        self.chart_color = color.into();
        self
    }

    /// Set custom axis titles
    pub fn with_axis_labels(mut self, x: Option<String>, y: Option<String>) -> Self {
        self.x_axis_label = x;
        self.y_axis_label = y;
        self
    }

    /// Link the configuration to a sheet
    pub fn for_sheet(mut self, sheet_id: SheetId) -> Self {
        self.sheet_id = Some(sheet_id);
        self
    }

    pub fn kind(&self) -> ChartKind {
        ChartKind::from_stored(&self.chart_kind)
    }

    /// The stored axis selection
    pub fn selection(&self) -> AxisSelection {
        AxisSelection::new(self.x_axis_column, self.y_axis_column, self.kind())
    }

    /// The stored exclusion snapshot
    pub fn exclusions(&self) -> ExclusionSet {
        self.excluded_row_indices
            .iter()
            .flatten()
            .copied()
            .collect()
    }

    /// Replace the stored selection, keeping styling and exclusions
    pub fn set_selection(&mut self, selection: &AxisSelection) {
        self.chart_kind = selection.kind.name().to_string();
        self.x_axis_column = selection.x_column;
        self.y_axis_column = selection.y_column;
    }
}
