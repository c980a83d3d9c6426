//! Post domain model.
//!
//! # Responsibility
//! - Define the canonical article record and its persisted field names.
//! - Define the fixed category set used across editor, listing and search.
//!
//! # Invariants
//! - `id` is stable and never reused for another post.
//! - `slug` is assigned at creation and never recomputed on edits.
//! - `date` is creation-day granularity and immutable.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for every post.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type PostId = Uuid;

/// Fixed category set shared by the editor and the listing filters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Category {
    Technology,
    Design,
    Productivity,
    Lifestyle,
    Tutorial,
}

impl Category {
    /// Every category, in the order the editor offers them.
    pub const ALL: [Category; 5] = [
        Category::Technology,
        Category::Design,
        Category::Productivity,
        Category::Lifestyle,
        Category::Tutorial,
    ];

    /// Display label, identical to the persisted representation.
    pub fn label(&self) -> &'static str {
        match self {
            Category::Technology => "Technology",
            Category::Design => "Design",
            Category::Productivity => "Productivity",
            Category::Lifestyle => "Lifestyle",
            Category::Tutorial => "Tutorial",
        }
    }
}

/// Canonical article record.
///
/// Serialized field names follow the persisted document format, camelCase
/// for the derived/display fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    /// Stable global ID used for linking and display keys.
    pub id: PostId,
    pub title: String,
    pub excerpt: String,
    pub content: String,
    pub category: Category,
    /// Free-text labels, duplicates suppressed.
    pub tags: Vec<String>,
    /// URL-safe identifier, unique across the collection.
    pub slug: String,
    /// Derived from `content`; recomputed whenever content changes.
    #[serde(rename = "readTime")]
    pub read_time: String,
    /// Creation date, calendar-day granularity.
    pub date: NaiveDate,
    pub featured: bool,
    /// `true` for posts produced through the repository, `false` for the
    /// seeded catalog.
    #[serde(rename = "isUserCreated")]
    pub is_user_created: bool,
}

/// Editor input for creating a post.
///
/// The editor flow is expected to have validated this draft (see
/// `service::post_service::validate_draft`); the repository does not
/// re-validate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostDraft {
    pub title: String,
    pub excerpt: String,
    pub content: String,
    pub category: Category,
    pub tags: Vec<String>,
}

/// Partial edit applied over an existing post.
///
/// Absent fields keep their current value. `slug`, `date` and `id` are not
/// patchable; `read_time` is derived and recomputed when `content` is set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostPatch {
    pub title: Option<String>,
    pub excerpt: Option<String>,
    pub content: Option<String>,
    pub category: Option<Category>,
    pub tags: Option<Vec<String>>,
    pub featured: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::Category;

    #[test]
    fn category_labels_match_persisted_names() {
        assert_eq!(Category::Technology.label(), "Technology");
        assert_eq!(Category::ALL.len(), 5);
    }

    #[test]
    fn category_serializes_as_its_label() {
        for category in Category::ALL {
            let encoded = serde_json::to_string(&category).unwrap();
            assert_eq!(encoded, format!("\"{}\"", category.label()));
        }
    }
}
