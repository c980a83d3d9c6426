//! Post publishing use-cases.
//!
//! # Responsibility
//! - Validate editor drafts before they reach the repository.
//! - Assemble the combined catalog: user posts followed by the seeded
//!   demo articles.
//!
//! # Invariants
//! - Validation failures never partially publish.
//! - User posts always precede seeded articles in the catalog.
//! - Seeded articles are read-only; revise/retract only touch the
//!   repository.

use crate::model::post::{Category, Post, PostDraft, PostPatch};
use crate::repo::post_repo::PostRepository;
use crate::search::fuzzy::SearchRecord;
use crate::seed::demo_posts;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Minimum trimmed content length accepted by the editor flow.
pub const MIN_CONTENT_LEN: usize = 50;

/// Field-level validation error for editor drafts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftValidationError {
    TitleRequired,
    ExcerptRequired,
    ContentRequired,
    ContentTooShort { min: usize },
}

impl Display for DraftValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::TitleRequired => write!(f, "title is required"),
            Self::ExcerptRequired => write!(f, "excerpt is required"),
            Self::ContentRequired => write!(f, "content is required"),
            Self::ContentTooShort { min } => {
                write!(f, "content must be at least {min} characters")
            }
        }
    }
}

impl Error for DraftValidationError {}

/// Checks a draft against the editor rules without publishing it.
///
/// Returns the first failing rule: required title, required excerpt,
/// required content, then the content length floor.
pub fn validate_draft(draft: &PostDraft) -> Result<(), DraftValidationError> {
    if draft.title.trim().is_empty() {
        return Err(DraftValidationError::TitleRequired);
    }
    if draft.excerpt.trim().is_empty() {
        return Err(DraftValidationError::ExcerptRequired);
    }

    let content = draft.content.trim();
    if content.is_empty() {
        return Err(DraftValidationError::ContentRequired);
    }
    if content.chars().count() < MIN_CONTENT_LEN {
        return Err(DraftValidationError::ContentTooShort {
            min: MIN_CONTENT_LEN,
        });
    }

    Ok(())
}

/// Use-case facade over a post repository.
pub struct PostService<R: PostRepository> {
    repo: R,
}

impl<R: PostRepository> PostService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Validates a draft and publishes it.
    pub fn publish(&mut self, draft: PostDraft) -> Result<Post, DraftValidationError> {
        validate_draft(&draft)?;
        Ok(self.repo.create(draft))
    }

    /// Applies a partial edit to a published post.
    pub fn revise(&mut self, slug: &str, patch: PostPatch) -> Option<Post> {
        self.repo.update(slug, patch)
    }

    /// Removes a published post. Returns whether a post was removed.
    pub fn retract(&mut self, slug: &str) -> bool {
        self.repo.delete(slug)
    }

    /// Finds one post by slug, checking user posts before the seed catalog.
    pub fn find(&self, slug: &str) -> Option<Post> {
        self.repo
            .get_by_slug(slug)
            .or_else(|| demo_posts().into_iter().find(|post| post.slug == slug))
    }

    /// Returns user posts followed by the seeded catalog.
    ///
    /// With a category, only posts in that category are kept; relative
    /// order is preserved either way.
    pub fn catalog(&self, category: Option<Category>) -> Vec<Post> {
        let mut posts = self.repo.list();
        posts.extend(demo_posts());
        match category {
            Some(category) => posts
                .into_iter()
                .filter(|post| post.category == category)
                .collect(),
            None => posts,
        }
    }

    /// Snapshot of the combined catalog as search records.
    ///
    /// The index built from this snapshot is not kept in sync with later
    /// mutations; callers rebuild it when the collection changes.
    pub fn search_records(&self) -> Vec<SearchRecord> {
        self.catalog(None)
            .iter()
            .map(SearchRecord::from_post)
            .collect()
    }
}
