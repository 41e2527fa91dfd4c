//! Imported sheets and their import requests
//!
//! Imports may finish out of order. Each request gets a token, and only the
//! result for the newest token of a sheet is written into it.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::thread;

use sheet_charter_core::{
    column, title_from_filename, ColumnSummary, Grid, ParseError, SheetData, SheetFile, SheetId,
};

use crate::format::FormatHint;
use crate::import::{self, ImportOptions};

/// Identifies one import request for one sheet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ImportToken {
    sheet: SheetId,
    seq: u64,
}

impl ImportToken {
    /// The sheet this request targets
    pub fn sheet(&self) -> SheetId {
        self.sheet
    }
}

/// What happened to a completed import
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImportOutcome {
    /// The result was written into the sheet
    Applied,
    /// A newer request exists; the result was discarded
    Stale,
    /// The sheet was removed; the result was discarded
    UnknownSheet,
}

/// An import running on a worker thread
///
/// The worker sends exactly one result.
#[derive(Debug)]
pub struct PendingImport {
    token: ImportToken,
    receiver: Receiver<Result<Grid, ParseError>>,
}

impl PendingImport {
    pub fn token(&self) -> ImportToken {
        self.token
    }

    /// Block until the worker finishes
    pub fn wait(self) -> (ImportToken, Result<Grid, ParseError>) {
        let result = self.receiver.recv().unwrap_or_else(|_| Err(worker_stopped()));
        (self.token, result)
    }

    /// Take the result if the worker has finished
    pub fn try_wait(&self) -> Option<Result<Grid, ParseError>> {
        match self.receiver.try_recv() {
            Ok(result) => Some(result),
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Disconnected) => Some(Err(worker_stopped())),
        }
    }
}

fn worker_stopped() -> ParseError {
    ParseError::unreadable("import worker stopped before producing a result")
}

/// The set of imported sheets, owned by the caller
#[derive(Debug, Default)]
pub struct SheetRegistry {
    sheets: Vec<SheetFile>,
    latest: HashMap<SheetId, u64>,
    next_seq: u64,
    options: ImportOptions,
}

impl SheetRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: ImportOptions) -> Self {
        Self {
            options,
            ..Self::default()
        }
    }

    pub fn options(&self) -> &ImportOptions {
        &self.options
    }

    /// Add a sheet and return its id
    pub fn add(&mut self, sheet: SheetFile) -> SheetId {
        let id = sheet.id;
        log::debug!("Registered sheet '{}' ({})", sheet.title, id);
        self.sheets.push(sheet);
        id
    }

    /// Add an unloaded sheet titled after a file name
    pub fn add_for_file(&mut self, file_name: &str) -> SheetId {
        self.add(SheetFile::new(title_from_filename(file_name)))
    }

    pub fn get(&self, id: SheetId) -> Option<&SheetFile> {
        self.sheets.iter().find(|s| s.id == id)
    }

    fn get_mut(&mut self, id: SheetId) -> Option<&mut SheetFile> {
        self.sheets.iter_mut().find(|s| s.id == id)
    }

    /// Sheets in the order they were added
    pub fn sheets(&self) -> &[SheetFile] {
        &self.sheets
    }

    /// Remove a sheet; imports still running for it will be discarded
    pub fn remove(&mut self, id: SheetId) -> Option<SheetFile> {
        let pos = self.sheets.iter().position(|s| s.id == id)?;
        self.latest.remove(&id);
        Some(self.sheets.remove(pos))
    }

    pub fn len(&self) -> usize {
        self.sheets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sheets.is_empty()
    }

    /// Start an import request, superseding any earlier one for the sheet
    pub fn begin_import(&mut self, id: SheetId) -> Option<ImportToken> {
        self.get(id)?;
        self.next_seq += 1;
        let seq = self.next_seq;
        self.latest.insert(id, seq);
        log::trace!("Issued import token {} for sheet {}", seq, id);
        Some(ImportToken { sheet: id, seq })
    }

    /// Whether a token is still the newest for its sheet
    pub fn is_current(&self, token: &ImportToken) -> bool {
        self.latest.get(&token.sheet) == Some(&token.seq)
    }

    /// Record the result of an import request
    ///
    /// A failure replaces any previously loaded grid with
    /// [`SheetData::Failed`].
    pub fn complete_import(
        &mut self,
        token: ImportToken,
        result: Result<Grid, ParseError>,
    ) -> ImportOutcome {
        if self.get(token.sheet).is_none() {
            log::debug!("Discarding import for removed sheet {}", token.sheet);
            return ImportOutcome::UnknownSheet;
        }
        if !self.is_current(&token) {
            log::debug!(
                "Discarding stale import {} for sheet {}",
                token.seq,
                token.sheet
            );
            return ImportOutcome::Stale;
        }

        if let Err(err) = &result {
            log::warn!("Import for sheet {} failed: {}", token.sheet, err);
        }
        if let Some(sheet) = self.get_mut(token.sheet) {
            sheet.data = SheetData::from_result(result);
        }
        ImportOutcome::Applied
    }

    /// Parse bytes into a sheet on the calling thread
    pub fn import_bytes(&mut self, id: SheetId, bytes: &[u8], hint: FormatHint) -> ImportOutcome {
        let Some(token) = self.begin_import(id) else {
            return ImportOutcome::UnknownSheet;
        };
        let result = import::parse(bytes, hint, &self.options);
        self.complete_import(token, result)
    }

    /// Import a file into a sheet on the calling thread
    pub fn import_file<P: Into<PathBuf>>(&mut self, id: SheetId, path: P) -> ImportOutcome {
        let Some(token) = self.begin_import(id) else {
            return ImportOutcome::UnknownSheet;
        };
        let result = import::import_file(path.into(), &self.options);
        self.complete_import(token, result)
    }

    /// Import a file into a sheet on a worker thread
    ///
    /// Hand the result back through [`complete_import`](Self::complete_import).
    /// Returns `None` if the sheet is unknown or the thread cannot be started.
    pub fn spawn_import<P: Into<PathBuf>>(
        &mut self,
        id: SheetId,
        path: P,
    ) -> Option<PendingImport> {
        let token = self.begin_import(id)?;
        let path = path.into();
        let options = self.options.clone();
        let (tx, rx) = mpsc::sync_channel(1);

        let spawned = thread::Builder::new()
            .name(format!("sheet-import-{}", token.seq))
            .spawn(move || {
                let result = import::import_file(&path, &options);
                // The receiver may already be gone; nothing to report then.
                let _ = tx.send(result);
            });

        match spawned {
            Ok(_) => Some(PendingImport {
                token,
                receiver: rx,
            }),
            Err(err) => {
                log::warn!("Could not start import worker: {}", err);
                None
            }
        }
    }

    /// Column summaries of a loaded sheet, using the configured preview size
    pub fn column_summaries(&self, id: SheetId) -> Option<Vec<ColumnSummary>> {
        let grid = self.get(id)?.grid()?;
        Some(column::summarize(grid, self.options.preview_limit))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn grid(rows: usize) -> Grid {
        Grid::new(
            vec!["k".into(), "v".into()],
            (0..rows).map(|i| vec![i.to_string(), i.to_string()]).collect(),
        )
    }

    #[test]
    fn test_tokens_increase() {
        let mut registry = SheetRegistry::new();
        let id = registry.add_for_file("a.csv");
        let first = registry.begin_import(id).unwrap();
        let second = registry.begin_import(id).unwrap();

        assert!(second.seq > first.seq);
        assert!(!registry.is_current(&first));
        assert!(registry.is_current(&second));
        assert_eq!(second.sheet(), id);
    }

    #[test]
    fn test_stale_result_is_discarded() {
        let mut registry = SheetRegistry::new();
        let id = registry.add_for_file("a.csv");
        let old = registry.begin_import(id).unwrap();
        let new = registry.begin_import(id).unwrap();

        assert_eq!(registry.complete_import(new, Ok(grid(2))), ImportOutcome::Applied);
        assert_eq!(registry.complete_import(old, Ok(grid(9))), ImportOutcome::Stale);
        assert_eq!(registry.get(id).unwrap().grid().unwrap().row_count(), 2);
    }

    #[test]
    fn test_tokens_are_per_sheet() {
        let mut registry = SheetRegistry::new();
        let a = registry.add_for_file("a.csv");
        let b = registry.add_for_file("b.csv");
        let token_a = registry.begin_import(a).unwrap();
        let _token_b = registry.begin_import(b).unwrap();

        assert!(registry.is_current(&token_a));
        assert_eq!(registry.complete_import(token_a, Ok(grid(1))), ImportOutcome::Applied);
    }

    #[test]
    fn test_failure_replaces_grid() {
        let mut registry = SheetRegistry::new();
        let id = registry.add_for_file("a.csv");
        let token = registry.begin_import(id).unwrap();
        registry.complete_import(token, Ok(grid(3)));

        let token = registry.begin_import(id).unwrap();
        registry.complete_import(token, Err(ParseError::NoWorksheet));

        let sheet = registry.get(id).unwrap();
        assert_eq!(sheet.data, SheetData::Failed(ParseError::NoWorksheet));
        assert!(sheet.grid().is_none());
    }

    #[test]
    fn test_removed_sheet() {
        let mut registry = SheetRegistry::new();
        let id = registry.add_for_file("a.csv");
        let token = registry.begin_import(id).unwrap();

        assert!(registry.remove(id).is_some());
        assert_eq!(
            registry.complete_import(token, Ok(grid(1))),
            ImportOutcome::UnknownSheet
        );
        assert!(registry.begin_import(id).is_none());
        assert!(registry.is_empty());
    }

    #[test]
    fn test_import_bytes_and_summaries() {
        let mut registry =
            SheetRegistry::with_options(ImportOptions::default().with_preview_limit(1));
        let id = registry.add_for_file("sales.csv");

        let outcome = registry.import_bytes(id, b"Month,Sales\nJan,1\nFeb,2\n", FormatHint::Csv);
        assert_eq!(outcome, ImportOutcome::Applied);
        assert_eq!(registry.get(id).unwrap().title, "sales");

        let summaries = registry.column_summaries(id).unwrap();
        assert_eq!(summaries[0].preview, vec!["Jan"]);
        assert!(summaries[1].column_type.is_numeric());
    }

    #[test]
    fn test_unloaded_sheet_has_no_summaries() {
        let mut registry = SheetRegistry::new();
        let id = registry.add_for_file("a.csv");
        assert_eq!(registry.get(id).unwrap().data, SheetData::Unloaded);
        assert!(registry.column_summaries(id).is_none());
    }
}
