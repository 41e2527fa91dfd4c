//! Imported sheet files and their load state

use std::fmt;

use uuid::Uuid;

use crate::error::ParseError;
use crate::grid::Grid;

/// Opaque unique identifier of an imported sheet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SheetId(Uuid);

impl SheetId {
    /// Generate a fresh random identifier
    pub fn new() -> Self {
        SheetId(Uuid::new_v4())
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for SheetId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Uuid> for SheetId {
    fn from(uuid: Uuid) -> Self {
        SheetId(uuid)
    }
}

impl fmt::Display for SheetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Load state of a sheet's data
#[derive(Debug, Clone, PartialEq, Default)]
pub enum SheetData {
    /// No import has completed yet
    #[default]
    Unloaded,
    /// The last import succeeded
    Loaded(Grid),
    /// The last import failed; no partial grid is kept
    Failed(ParseError),
}

impl SheetData {
    /// Build the state that corresponds to a parse result
    pub fn from_result(result: Result<Grid, ParseError>) -> Self {
        match result {
            Ok(grid) => SheetData::Loaded(grid),
            Err(err) => SheetData::Failed(err),
        }
    }

    pub fn grid(&self) -> Option<&Grid> {
        match self {
            SheetData::Loaded(grid) => Some(grid),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&ParseError> {
        match self {
            SheetData::Failed(err) => Some(err),
            _ => None,
        }
    }

    pub fn is_loaded(&self) -> bool {
        matches!(self, SheetData::Loaded(_))
    }
}

/// An imported file: identity plus its current data
///
/// This is a plain container. It does not check the grid it holds.
#[derive(Debug, Clone, PartialEq)]
pub struct SheetFile {
    /// Unique identifier
    pub id: SheetId,
    /// Display name, usually the file name without its extension
    pub title: String,
    /// Current load state
    pub data: SheetData,
}

impl SheetFile {
    /// Create an unloaded sheet with a fresh identifier
    pub fn new<S: Into<String>>(title: S) -> Self {
        Self::with_id(SheetId::new(), title)
    }

    /// Create an unloaded sheet with a known identifier
    pub fn with_id<S: Into<String>>(id: SheetId, title: S) -> Self {
        Self {
            id,
            title: title.into(),
            data: SheetData::Unloaded,
        }
    }

    /// The grid, if the last import succeeded
    pub fn grid(&self) -> Option<&Grid> {
        self.data.grid()
    }
}

/// Derive a display title from a file name by dropping its last extension
///
/// # Examples
/// ```
/// use sheet_charter_core::title_from_filename;
///
/// assert_eq!(title_from_filename("Sales.csv"), "Sales");
/// assert_eq!(title_from_filename("Q1.report.xlsx"), "Q1.report");
/// assert_eq!(title_from_filename("notes"), "notes");
/// ```
pub fn title_from_filename(file_name: &str) -> &str {
    match file_name.rfind('.') {
        Some(0) | None => file_name,
        Some(dot) => &file_name[..dot],
    }
}
