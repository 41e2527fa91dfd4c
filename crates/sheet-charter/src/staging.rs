//! Temporary copies of sources

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use tempfile::NamedTempFile;

/// A private copy of a source file, deleted when dropped
///
/// Archives are read from a copy so the source file is opened only briefly.
/// The copy goes away on every exit path, including errors and panics.
pub(crate) struct StagedCopy {
    file: NamedTempFile,
}

impl StagedCopy {
    /// Copy `source` into a new temporary file, in `dir` or the system temp dir
    pub(crate) fn create(source: &Path, extension: &str, dir: Option<&Path>) -> io::Result<Self> {
        let suffix = format!(".{}", extension);
        let mut builder = tempfile::Builder::new();
        builder.prefix("sheet-charter-").suffix(&suffix);

        let mut file = match dir {
            Some(dir) => builder.tempfile_in(dir)?,
            None => builder.tempfile()?,
        };

        let mut src = File::open(source)?;
        let copied = io::copy(&mut src, file.as_file_mut())?;
        file.as_file_mut().flush()?;
        log::trace!("Staged {} bytes of {} at {}", copied, source.display(), file.path().display());

        Ok(Self { file })
    }

    pub(crate) fn path(&self) -> &Path {
        self.file.path()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_copy_is_removed_on_drop() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("source.xlsx");
        std::fs::write(&source, b"payload").unwrap();

        let staged = StagedCopy::create(&source, "xlsx", Some(dir.path())).unwrap();
        let staged_path = staged.path().to_path_buf();
        assert_eq!(std::fs::read(&staged_path).unwrap(), b"payload");
        assert!(staged_path.to_string_lossy().ends_with(".xlsx"));

        drop(staged);
        assert!(!staged_path.exists());
        assert!(source.exists());
    }

    #[test]
    fn test_missing_source_leaves_nothing_behind() {
        let dir = tempfile::tempdir().unwrap();
        let result = StagedCopy::create(&dir.path().join("missing.xlsx"), "xlsx", Some(dir.path()));

        assert!(result.is_err());
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }
}
