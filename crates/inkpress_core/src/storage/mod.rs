//! Wholesale document persistence for the post collection.
//!
//! # Responsibility
//! - Define the one-document read/write contract used by repositories.
//! - Keep storage mechanics swappable without touching business logic.
//!
//! # Invariants
//! - `write` replaces the stored document wholesale; there is no partial
//!   or incremental persistence.
//! - Backends never interpret the document; only repositories understand
//!   its shape.

mod file;
mod memory;

pub use file::FileStorage;
pub use memory::MemoryStorage;

use std::error::Error;
use std::fmt::{Display, Formatter};

pub type StorageResult<T> = Result<T, StorageError>;

/// Storage-layer error for document read/write failures.
#[derive(Debug)]
pub enum StorageError {
    Io(std::io::Error),
    /// Backend cannot serve requests at all (quota, injected failure).
    Unavailable(&'static str),
}

impl Display for StorageError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(err) => write!(f, "{err}"),
            Self::Unavailable(reason) => write!(f, "storage unavailable: {reason}"),
        }
    }
}

impl Error for StorageError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Unavailable(_) => None,
        }
    }
}

impl From<std::io::Error> for StorageError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

/// One-document persistence contract.
///
/// The entire post collection lives in a single serialized document that
/// is read and written wholesale on every access.
pub trait StorageBackend {
    /// Returns the stored document, or `None` when nothing was stored yet.
    fn read(&self) -> StorageResult<Option<String>>;

    /// Replaces the stored document.
    fn write(&mut self, document: &str) -> StorageResult<()>;
}
