//! Typo-tolerant search over the article catalog.
//!
//! # Responsibility
//! - Rank catalog records against free-text queries.
//! - Keep the scoring algorithm swappable behind a strategy trait.
//!
//! # Invariants
//! - Blank queries return a fixed-size default listing, not a ranking.
//! - Result order is deterministic: best score first, insertion order on
//!   ties.

pub mod fuzzy;
