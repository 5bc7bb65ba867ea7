//! The synchronized document and its storage.
//!
//! A document is an ordered list of text lines. The span strictly between
//! the start and end marker lines is the managed region, the only part of
//! the document the bot rewrites; everything outside it is never touched.

pub mod region;


use std::fs;
use std::io;
use std::path::Path;

/// The line opening the managed region (exact match after trimming).
pub const START_MARKER: &str = "<!--START_SECTION:activity-->";

/// The line closing the managed region (exact match after trimming).
pub const END_MARKER: &str = "<!--END_SECTION:activity-->";

/// Read/write access to the synchronized document.
///
/// `\n` is the line separator in both directions, so a trailing newline
/// round-trips as a trailing empty line.
pub trait DocumentStore {
    /// Reads the document, split into lines.
    fn read_lines(&self, path: &Path) -> io::Result<Vec<String>>;

    /// Writes the document, joining lines back together.
    fn write_lines(&self, path: &Path, lines: &[String]) -> io::Result<()>;
}

/// The production store, backed by the filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsDocumentStore;

impl DocumentStore for FsDocumentStore {
    fn read_lines(&self, path: &Path) -> io::Result<Vec<String>> {
        let text = fs::read_to_string(path)?;
        Ok(text.split('\n').map(str::to_string).collect())
    }

    fn write_lines(&self, path: &Path, lines: &[String]) -> io::Result<()> {
        fs::write(path, lines.join("\n"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lines_round_trip_including_trailing_newline() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("README.md");
        std::fs::write(&path, "# Title\n\nbody\n").unwrap();

        let store = FsDocumentStore;
        let lines = store.read_lines(&path).unwrap();
        assert_eq!(lines, vec!["# Title", "", "body", ""]);

        store.write_lines(&path, &lines).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "# Title\n\nbody\n");
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = FsDocumentStore
            .read_lines(&dir.path().join("absent.md"))
            .unwrap_err();
        assert_eq!(err.kind(), std::io::ErrorKind::NotFound);
    }
}
