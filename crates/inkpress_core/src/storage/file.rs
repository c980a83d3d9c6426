//! Single-file document storage.
//!
//! # Responsibility
//! - Persist the collection document as one file on disk.
//!
//! # Invariants
//! - A missing file reads as `None`, not as an error.
//! - Writes go through a sibling temp file and rename; readers never
//!   observe a half-written document.

use super::{StorageBackend, StorageResult};
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

/// File-backed storage holding the whole collection in one document.
#[derive(Debug)]
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl StorageBackend for FileStorage {
    fn read(&self) -> StorageResult<Option<String>> {
        match fs::read_to_string(&self.path) {
            Ok(document) => Ok(Some(document)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    fn write(&mut self, document: &str) -> StorageResult<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let staging = self.path.with_extension("tmp");
        fs::write(&staging, document)?;
        fs::rename(&staging, &self.path)?;
        Ok(())
    }
}
