//! Format dispatch and file import

use std::path::{Path, PathBuf};

use sheet_charter_core::{Grid, ParseError, DEFAULT_PREVIEW_LIMIT};
use sheet_charter_csv::{CsvReadOptions, CsvReader};
use sheet_charter_xlsx::XlsxReader;

use crate::format::FormatHint;
use crate::staging::StagedCopy;

/// Options for importing a source
#[derive(Debug, Clone)]
pub struct ImportOptions {
    /// Options for the delimited-text reader
    pub csv: CsvReadOptions,
    /// Number of cells shown per column in previews
    pub preview_limit: usize,
    /// Where archive copies are staged; the system temp dir when `None`
    pub staging_dir: Option<PathBuf>,
}

impl Default for ImportOptions {
    fn default() -> Self {
        Self {
            csv: CsvReadOptions::default(),
            preview_limit: DEFAULT_PREVIEW_LIMIT,
            staging_dir: None,
        }
    }
}

impl ImportOptions {
    pub fn with_staging_dir<P: Into<PathBuf>>(mut self, dir: P) -> Self {
        self.staging_dir = Some(dir.into());
        self
    }

    pub fn with_preview_limit(mut self, limit: usize) -> Self {
        self.preview_limit = limit;
        self
    }
}

/// Parse raw bytes of a known format into a grid
///
/// # Examples
/// ```
/// use sheet_charter::{parse, FormatHint, ImportOptions};
///
/// let grid = parse(b"Month,Sales\nJanuary,1000\n", FormatHint::Csv, &ImportOptions::default())
///     .unwrap();
/// assert_eq!(grid.header(), ["Month", "Sales"]);
/// assert_eq!(grid.cell(0, 1), "1000");
/// ```
pub fn parse(bytes: &[u8], hint: FormatHint, options: &ImportOptions) -> Result<Grid, ParseError> {
    let grid = match hint {
        FormatHint::Csv => CsvReader::read_bytes(bytes, &options.csv)?,
        FormatHint::Xlsx => XlsxReader::read_bytes(bytes)?,
    };
    log::debug!(
        "Parsed {:?} source: {} columns, {} rows",
        hint,
        grid.column_count(),
        grid.row_count()
    );
    Ok(grid)
}

/// Import a file, choosing the reader from its extension
///
/// Archives are parsed from a staged temporary copy that is removed before
/// this returns, whatever the outcome.
pub fn import_file<P: AsRef<Path>>(path: P, options: &ImportOptions) -> Result<Grid, ParseError> {
    let path = path.as_ref();
    let hint = FormatHint::from_path(path)?;
    log::info!("Importing {} as {:?}", path.display(), hint);

    let grid = match hint {
        FormatHint::Csv => CsvReader::read_file(path, &options.csv)?,
        FormatHint::Xlsx => {
            let staged =
                StagedCopy::create(path, hint.extension(), options.staging_dir.as_deref())?;
            XlsxReader::read_file(staged.path())?
        }
    };
    log::debug!(
        "Imported {}: {} columns, {} rows",
        path.display(),
        grid.column_count(),
        grid.row_count()
    );
    Ok(grid)
}
