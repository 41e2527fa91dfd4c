//! CSV reader

use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::error::CsvResult;
use crate::options::{CsvReadOptions, DELIMITER};
use sheet_charter_core::Grid;

/// CSV file reader
pub struct CsvReader;

impl CsvReader {
    /// Read CSV file into a grid
    pub fn read_file<P: AsRef<Path>>(path: P, options: &CsvReadOptions) -> CsvResult<Grid> {
        let file = File::open(path)?;
        Self::read(file, options)
    }

    /// Read CSV from an in-memory buffer into a grid
    pub fn read_bytes(bytes: &[u8], options: &CsvReadOptions) -> CsvResult<Grid> {
        Self::read(bytes, options)
    }

    /// Read CSV from a reader into a grid
    ///
    /// Every record is kept; there is no row limit. Records may have any
    /// number of fields.
    pub fn read<R: Read>(reader: R, options: &CsvReadOptions) -> CsvResult<Grid> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .delimiter(DELIMITER)
            .quote(options.quote)
            .has_headers(false)
            .flexible(true)
            .from_reader(reader);

        let mut records: Vec<Vec<String>> = Vec::new();

        for result in csv_reader.records() {
            let record = result?;

            if Self::is_blank_line(&record) {
                continue;
            }

            records.push(record.iter().map(str::to_string).collect());
        }

        let grid = Grid::from_records(records);
        log::debug!(
            "Read CSV with {} columns and {} data rows",
            grid.column_count(),
            grid.row_count()
        );
        Ok(grid)
    }

    /// A line holding nothing but whitespace
    fn is_blank_line(record: &csv::StringRecord) -> bool {
        record.len() == 1 && record.get(0).map_or(true, |f| f.trim().is_empty())
    }
}
