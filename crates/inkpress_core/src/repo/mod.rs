//! Repository layer: the authoritative persisted post collection.
//!
//! # Responsibility
//! - Define the collection-level access contract.
//! - Isolate persistence-format details from service orchestration.
//!
//! # Invariants
//! - The collection stays most-recently-created first.
//! - Slug uniqueness is enforced here, not by slug derivation.
//! - Storage failures degrade to empty/no-effect results; post data is a
//!   presentation cache, not a system of record.

pub mod post_repo;
