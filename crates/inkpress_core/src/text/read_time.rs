//! Reading-time estimation for article content.
//!
//! # Responsibility
//! - Produce the human-readable duration shown next to each article.
//!
//! # Invariants
//! - Estimates round up to whole minutes and never drop below one.

/// Reading speed assumed by estimates, in words per minute.
pub const WORDS_PER_MINUTE: usize = 200;

/// Estimates reading time as a short human string such as `"8 min"`.
///
/// Words are whitespace-separated tokens. Empty or whitespace-only content
/// still reports the one minute floor.
pub fn estimate_read_time(content: &str) -> String {
    let words = content.split_whitespace().count();
    let minutes = words.div_ceil(WORDS_PER_MINUTE).max(1);
    format!("{minutes} min")
}
