//! Text sources that can be traversed from the start more than once.
//!
//! The exact-counting pass needs a second full traversal, so a source is a
//! capability to produce a fresh line sequence on demand rather than a
//! single reader handle. File handles are acquired per traversal and
//! released when the iterator drops, even when a pass aborts.

use std::fs::File;
use std::io::{self, BufRead, BufReader};

use camino::{Utf8Path, Utf8PathBuf};

use crate::error::{SummaryError, SummaryResult};

/// A fallible line in a traversal.
pub type SourceLine = io::Result<String>;

/// Capability to produce a fresh line sequence from the start of a source.
pub trait LineSource {
    /// Begin a new traversal from the first line.
    fn lines(&self) -> SummaryResult<Box<dyn Iterator<Item = SourceLine> + '_>>;

    /// Human-readable locator for error reporting.
    fn locator(&self) -> &str;
}

/// A line source backed by a file on disk.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: Utf8PathBuf,
}

impl FileSource {
    /// Validate the path and verify the file opens for reading.
    ///
    /// Fails with [`SummaryError::InvalidArgument`] on an empty path and
    /// [`SummaryError::SourceUnavailable`] when the file cannot be opened,
    /// so an engine is never constructed over a dead source.
    pub fn open(path: impl AsRef<Utf8Path>) -> SummaryResult<Self> {
        let path = path.as_ref();
        if path.as_str().trim().is_empty() {
            return Err(SummaryError::InvalidArgument(
                "source path is empty".to_string(),
            ));
        }
        // Probe handle, dropped immediately; traversals reopen.
        File::open(path.as_std_path()).map_err(|source| SummaryError::SourceUnavailable {
            locator: path.to_string(),
            source,
        })?;
        Ok(Self {
            path: path.to_owned(),
        })
    }

    /// The underlying file path.
    pub fn path(&self) -> &Utf8Path {
        &self.path
    }
}

impl LineSource for FileSource {
    fn lines(&self) -> SummaryResult<Box<dyn Iterator<Item = SourceLine> + '_>> {
        let file =
            File::open(self.path.as_std_path()).map_err(|source| SummaryError::SourceUnavailable {
                locator: self.path.to_string(),
                source,
            })?;
        Ok(Box::new(BufReader::new(file).lines()))
    }

    fn locator(&self) -> &str {
        self.path.as_str()
    }
}

/// An in-memory line source, for tests and embedded use.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    lines: Vec<String>,
}

impl MemorySource {
    /// Build a source from the lines of `text`.
    pub fn from_text(text: &str) -> Self {
        Self {
            lines: text.lines().map(str::to_string).collect(),
        }
    }
}

impl LineSource for MemorySource {
    fn lines(&self) -> SummaryResult<Box<dyn Iterator<Item = SourceLine> + '_>> {
        Ok(Box::new(self.lines.iter().map(|line| Ok(line.clone()))))
    }

    fn locator(&self) -> &str {
        "<memory>"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn empty_path_is_invalid_argument() {
        let err = FileSource::open("").unwrap_err();
        assert!(matches!(err, SummaryError::InvalidArgument(_)));
    }

    #[test]
    fn missing_file_is_source_unavailable() {
        let err = FileSource::open("no/such/file.txt").unwrap_err();
        assert!(matches!(err, SummaryError::SourceUnavailable { .. }));
    }

    #[test]
    fn file_source_traverses_twice_from_start() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "first line").unwrap();
        writeln!(file, "second line").unwrap();
        let path = Utf8PathBuf::try_from(file.path().to_path_buf()).unwrap();

        let source = FileSource::open(&path).unwrap();
        for _ in 0..2 {
            let lines: Vec<String> = source.lines().unwrap().map(Result::unwrap).collect();
            assert_eq!(lines, vec!["first line", "second line"]);
        }
    }

    #[test]
    fn memory_source_restarts_from_beginning() {
        let source = MemorySource::from_text("one\ntwo");
        let first: Vec<String> = source.lines().unwrap().map(Result::unwrap).collect();
        let second: Vec<String> = source.lines().unwrap().map(Result::unwrap).collect();
        assert_eq!(first, second);
        assert_eq!(first, vec!["one", "two"]);
    }
}
