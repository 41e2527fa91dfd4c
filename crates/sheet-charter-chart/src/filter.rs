//! Row exclusion and filtering

use std::collections::BTreeSet;

use sheet_charter_core::Grid;

/// Data-row indices left out of a chart
///
/// Indices are 0-based offsets into [`Grid::rows`]; the header row can never
/// be excluded. Indices past the end of the grid are kept but have no effect,
/// so an exclusion set survives a re-import with fewer rows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExclusionSet(BTreeSet<usize>);

impl ExclusionSet {
    /// Create an empty set (every row included)
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, index: usize) -> bool {
        self.0.contains(&index)
    }

    /// Exclude a row. Returns `false` if it was already excluded.
    pub fn exclude(&mut self, index: usize) -> bool {
        self.0.insert(index)
    }

    /// Include a row again. Returns `false` if it was not excluded.
    pub fn include(&mut self, index: usize) -> bool {
        self.0.remove(&index)
    }

    /// Flip a row between included and excluded
    pub fn toggle(&mut self, index: usize) {
        if !self.0.remove(&index) {
            self.0.insert(index);
        }
    }

    /// Exclude every data row of a grid
    pub fn exclude_all(&mut self, grid: &Grid) {
        self.0.extend(0..grid.row_count());
    }

    /// Include every row
    pub fn include_all(&mut self) {
        self.0.clear();
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Excluded indices, ascending
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.0.iter().copied()
    }

    /// Count the rows of a grid that remain selected
    pub fn summary(&self, grid: &Grid) -> FilterSummary {
        let total = grid.row_count();
        let excluded = self.0.range(..total).count();
        FilterSummary {
            selected: total - excluded,
            total,
        }
    }
}

impl FromIterator<usize> for ExclusionSet {
    fn from_iter<I: IntoIterator<Item = usize>>(iter: I) -> Self {
        ExclusionSet(iter.into_iter().collect())
    }
}

impl Extend<usize> for ExclusionSet {
    fn extend<I: IntoIterator<Item = usize>>(&mut self, iter: I) {
        self.0.extend(iter)
    }
}

/// Selected and total data-row counts, as shown above a row picker
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterSummary {
    /// Rows that will be charted
    pub selected: usize,
    /// Data rows in the grid
    pub total: usize,
}

impl FilterSummary {
    /// Whether every row is selected
    pub fn all_selected(&self) -> bool {
        self.selected == self.total
    }
}

/// A data row tagged with its index in the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexedRow<'a> {
    /// 0-based index into [`Grid::rows`]
    pub index: usize,
    /// Raw cells
    pub row: &'a [String],
}

/// Rows of a grid that are not excluded, in original order
///
/// The grid is left untouched; filtering again with the same set gives the
/// same rows.
pub fn filter<'a>(grid: &'a Grid, exclusions: &ExclusionSet) -> Vec<IndexedRow<'a>> {
    grid.rows()
        .iter()
        .enumerate()
        .filter(|(index, _)| !exclusions.contains(*index))
        .map(|(index, row)| IndexedRow {
            index,
            row: row.as_slice(),
        })
        .collect()
}
