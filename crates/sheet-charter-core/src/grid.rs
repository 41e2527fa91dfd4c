//! Grid type - the parsed table every format reader produces

/// A parsed table: a header row plus data rows of raw cell strings
///
/// Rows keep the order they had in the source file. A row may be shorter than
/// the header, in which case its missing trailing cells read as `""`; cells
/// beyond the header width are never reached by column-indexed access.
///
/// A grid is built once per import and not modified afterwards. A re-import
/// replaces it wholesale.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Grid {
    header: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Grid {
    /// Create a grid from a header row and data rows
    pub fn new(header: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        Self { header, rows }
    }

    /// Create a grid with no header and no rows
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a grid from raw records, taking the first one as the header
    pub fn from_records<I>(records: I) -> Self
    where
        I: IntoIterator<Item = Vec<String>>,
    {
        let mut records = records.into_iter();
        match records.next() {
            Some(header) => Self::new(header, records.collect()),
            None => Self::empty(),
        }
    }

    /// Column names, in source order
    pub fn header(&self) -> &[String] {
        &self.header
    }

    /// Data rows, in source order
    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    /// Get a data row by index
    pub fn row(&self, index: usize) -> Option<&[String]> {
        self.rows.get(index).map(Vec::as_slice)
    }

    /// Number of columns (the header width)
    pub fn column_count(&self) -> usize {
        self.header.len()
    }

    /// Number of data rows (the header is not counted)
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Check if the grid has neither a header nor rows
    pub fn is_empty(&self) -> bool {
        self.header.is_empty() && self.rows.is_empty()
    }

    /// Check whether a column index falls inside the header
    pub fn has_column(&self, col: usize) -> bool {
        col < self.header.len()
    }

    /// Get a column name
    pub fn column_name(&self, col: usize) -> Option<&str> {
        self.header.get(col).map(String::as_str)
    }

    /// Get a cell by data-row and column index
    ///
    /// Missing cells (short rows, or rows past the end) read as `""`.
    pub fn cell(&self, row: usize, col: usize) -> &str {
        self.rows
            .get(row)
            .map(|r| cell_at(r, col))
            .unwrap_or_default()
    }

    /// Iterate over one column's cells, one per data row
    pub fn column_values(&self, col: usize) -> impl Iterator<Item = &str> + '_ {
        self.rows.iter().map(move |r| cell_at(r, col))
    }
}

/// Read a cell from a raw row, treating missing trailing cells as empty
pub fn cell_at(row: &[String], col: usize) -> &str {
    row.get(col).map(String::as_str).unwrap_or_default()
}
