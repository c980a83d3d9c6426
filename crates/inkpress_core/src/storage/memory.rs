//! In-memory storage for tests and ephemeral sessions.
//!
//! # Responsibility
//! - Mirror the `StorageBackend` contract without touching disk.
//! - Allow injecting read/write failures so fail-soft repository paths can
//!   be exercised.

use super::{StorageBackend, StorageError, StorageResult};

/// In-memory storage holding the document in an `Option`.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    document: Option<String>,
    fail_reads: bool,
    fail_writes: bool,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts with a pre-seeded document, as if a previous session wrote it.
    pub fn with_document(document: impl Into<String>) -> Self {
        Self {
            document: Some(document.into()),
            ..Self::default()
        }
    }

    /// Makes every subsequent `read` fail.
    pub fn fail_reads(&mut self, fail: bool) {
        self.fail_reads = fail;
    }

    /// Makes every subsequent `write` fail.
    pub fn fail_writes(&mut self, fail: bool) {
        self.fail_writes = fail;
    }

    /// Current raw document, for assertions.
    pub fn document(&self) -> Option<&str> {
        self.document.as_deref()
    }
}

impl StorageBackend for MemoryStorage {
    fn read(&self) -> StorageResult<Option<String>> {
        if self.fail_reads {
            return Err(StorageError::Unavailable("injected read failure"));
        }
        Ok(self.document.clone())
    }

    fn write(&mut self, document: &str) -> StorageResult<()> {
        if self.fail_writes {
            return Err(StorageError::Unavailable("injected write failure"));
        }
        self.document = Some(document.to_string());
        Ok(())
    }
}
