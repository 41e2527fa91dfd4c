//! Column type inference and previews

use std::fmt;

use crate::grid::Grid;
use crate::number::{is_blank, parse_number};

/// Number of cells shown in a column preview unless a caller asks otherwise
pub const DEFAULT_PREVIEW_LIMIT: usize = 5;

/// Inferred semantic type of a column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ColumnType {
    /// Every non-empty cell is a number, and there is at least one
    Numeric,
    /// Anything else, including all-empty columns
    Text,
}

impl ColumnType {
    /// Human-readable name, shown next to column names in pickers
    pub fn description(&self) -> &'static str {
        match self {
            ColumnType::Numeric => "Numeric",
            ColumnType::Text => "Text",
        }
    }

    pub fn is_numeric(&self) -> bool {
        matches!(self, ColumnType::Numeric)
    }
}

impl fmt::Display for ColumnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

/// Classify a column across all data rows
///
/// Blank cells are skipped. A column with no non-blank cell is `Text`, so
/// sparse columns are never reported as numeric by accident. Columns outside
/// the header are `Text` as well.
pub fn column_type(grid: &Grid, col: usize) -> ColumnType {
    if !grid.has_column(col) {
        return ColumnType::Text;
    }

    let mut seen_value = false;
    for cell in grid.column_values(col).filter(|c| !is_blank(c)) {
        if parse_number(cell).is_none() {
            return ColumnType::Text;
        }
        seen_value = true;
    }

    if seen_value {
        ColumnType::Numeric
    } else {
        ColumnType::Text
    }
}

/// Human-readable type of a column
pub fn type_description(grid: &Grid, col: usize) -> &'static str {
    column_type(grid, col).description()
}

/// Check whether a column can supply chart values (the y axis)
pub fn is_valid_for_y_axis(grid: &Grid, col: usize) -> bool {
    column_type(grid, col).is_numeric()
}

/// Up to `limit` raw cells of a column, from the first data row on
///
/// Previews always show the ingested content, with no row exclusions applied.
pub fn preview(grid: &Grid, col: usize, limit: usize) -> Vec<String> {
    grid.column_values(col)
        .take(limit)
        .map(str::to_string)
        .collect()
}

/// Everything a column picker shows for one column
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnSummary {
    /// Column index (0-based)
    pub index: usize,
    /// Header name
    pub name: String,
    /// Inferred type
    pub column_type: ColumnType,
    /// First cells of the column
    pub preview: Vec<String>,
}

/// Summarize every column of a grid
pub fn summarize(grid: &Grid, preview_limit: usize) -> Vec<ColumnSummary> {
    grid.header()
        .iter()
        .enumerate()
        .map(|(index, name)| ColumnSummary {
            index,
            name: name.clone(),
            column_type: column_type(grid, index),
            preview: preview(grid, index, preview_limit),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn single_column(cells: &[&str]) -> Grid {
        Grid::new(
            vec!["Value".to_string()],
            cells.iter().map(|c| vec![c.to_string()]).collect(),
        )
    }

    #[test]
    fn test_numeric_with_blank_cell() {
        let grid = single_column(&["1", "2.5", "", "3"]);
        assert_eq!(column_type(&grid, 0), ColumnType::Numeric);
    }

    #[test]
    fn test_all_empty_is_text() {
        let grid = single_column(&["", "", ""]);
        assert_eq!(column_type(&grid, 0), ColumnType::Text);
    }

    #[test]
    fn test_mixed_is_text() {
        let grid = single_column(&["1", "a", "3"]);
        assert_eq!(column_type(&grid, 0), ColumnType::Text);
    }

    #[test]
    fn test_no_rows_is_text() {
        let grid = single_column(&[]);
        assert_eq!(column_type(&grid, 0), ColumnType::Text);
    }

    #[test]
    fn test_out_of_range_is_text() {
        let grid = single_column(&["1"]);
        assert_eq!(column_type(&grid, 1), ColumnType::Text);
        assert!(!is_valid_for_y_axis(&grid, 1));
    }

    #[test]
    fn test_short_rows_count_as_blank() {
        let grid = Grid::new(
            vec!["Name".into(), "Score".into()],
            vec![vec!["a".into(), "10".into()], vec!["b".into()]],
        );
        assert_eq!(column_type(&grid, 1), ColumnType::Numeric);
    }

    #[test]
    fn test_descriptions() {
        let grid = Grid::new(
            vec!["Month".into(), "Sales".into()],
            vec![vec!["Jan".into(), "5".into()]],
        );
        assert_eq!(type_description(&grid, 0), "Text");
        assert_eq!(type_description(&grid, 1), "Numeric");
        assert_eq!(ColumnType::Numeric.to_string(), "Numeric");
    }

    #[test]
    fn test_preview_is_bounded_and_ordered() {
        let grid = single_column(&["a", "b", "c", "d", "e", "f", "g"]);
        assert_eq!(
            preview(&grid, 0, DEFAULT_PREVIEW_LIMIT),
            vec!["a", "b", "c", "d", "e"]
        );
        assert_eq!(preview(&grid, 0, 2), vec!["a", "b"]);
        assert_eq!(preview(&grid, 0, 0), Vec::<String>::new());
    }

    #[test]
    fn test_preview_missing_cells() {
        let grid = Grid::new(
            vec!["A".into(), "B".into()],
            vec![vec!["1".into()], vec!["2".into(), "x".into()]],
        );
        assert_eq!(preview(&grid, 1, 5), vec!["", "x"]);
    }

    #[test]
    fn test_summarize() {
        let grid = Grid::new(
            vec!["Month".into(), "Sales".into()],
            vec![
                vec!["Jan".into(), "1000".into()],
                vec!["Feb".into(), "1500".into()],
            ],
        );
        let summary = summarize(&grid, 1);
        assert_eq!(summary.len(), 2);
        assert_eq!(
            summary[1],
            ColumnSummary {
                index: 1,
                name: "Sales".into(),
                column_type: ColumnType::Numeric,
                preview: vec!["1000".into()],
            }
        );
    }
}
