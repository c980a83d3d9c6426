//! Domain model for published articles.
//!
//! # Responsibility
//! - Define the canonical post record shared by user-created and seeded
//!   content.
//! - Define the editor-facing draft and patch inputs.
//!
//! # Invariants
//! - Every post is identified by a stable `PostId`.
//! - Derived fields (`slug`, `read_time`) are computed by their owning
//!   components, never assembled by hand.

pub mod post;
