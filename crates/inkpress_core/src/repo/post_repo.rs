//! Post repository contract and storage-backed implementation.
//!
//! # Responsibility
//! - Own the ordered, persisted collection of user-created posts.
//! - Enforce slug uniqueness and derived-field consistency on writes.
//!
//! # Invariants
//! - New posts are prepended; the collection reads most-recent-first.
//! - Slug collisions take the smallest free numeric suffix (`base`,
//!   `base-1`, `base-2`, ...).
//! - `read_time` is recomputed whenever `content` changes and never
//!   otherwise.
//! - A storage failure never surfaces to the caller: reads degrade to an
//!   empty collection, writes to no effect, and both are logged.

use crate::model::post::{Post, PostDraft, PostPatch};
use crate::storage::StorageBackend;
use crate::text::read_time::estimate_read_time;
use crate::text::slug::slugify;
use chrono::Local;
use log::warn;
use uuid::Uuid;

/// Repository interface for the persisted post collection.
///
/// All operations are infallible by contract. Storage problems degrade to
/// "empty" / "not found" / "no effect" instead of erroring; the worst-case
/// outcome is silent data loss, which is accepted for presentation-layer
/// data.
pub trait PostRepository {
    /// Returns all persisted posts, most-recently-created first.
    fn list(&self) -> Vec<Post>;

    /// Returns one post by exact slug match.
    fn get_by_slug(&self, slug: &str) -> Option<Post>;

    /// Creates a post from validated draft input and returns it.
    ///
    /// # Contract
    /// - The caller (editor flow) has already validated the draft; no
    ///   re-validation happens here.
    /// - Returns the materialized post even when persisting it failed.
    fn create(&mut self, draft: PostDraft) -> Post;

    /// Merges patch fields over the post with the given slug.
    ///
    /// The slug itself is never recomputed, even when the title changes;
    /// re-deriving it would break existing links.
    fn update(&mut self, slug: &str, patch: PostPatch) -> Option<Post>;

    /// Deletes the post with the given slug. Returns whether a post was
    /// removed.
    fn delete(&mut self, slug: &str) -> bool;
}

/// Storage-backed post repository.
///
/// Holds no in-memory copy of the collection: every operation reads the
/// whole document from the backend and mutations write it back wholesale.
/// Concurrent contexts over the same backend settle on last-write-wins.
pub struct StoredPostRepository<S: StorageBackend> {
    storage: S,
}

impl<S: StorageBackend> StoredPostRepository<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    /// Consumes the repository and returns the underlying backend.
    pub fn into_storage(self) -> S {
        self.storage
    }

    fn load(&self) -> Vec<Post> {
        let document = match self.storage.read() {
            Ok(Some(document)) => document,
            Ok(None) => return Vec::new(),
            Err(err) => {
                warn!("event=posts_load module=repo status=error error={err}");
                return Vec::new();
            }
        };

        match serde_json::from_str(&document) {
            Ok(posts) => posts,
            Err(err) => {
                // Shape-incompatible documents are treated as absent.
                warn!("event=posts_decode module=repo status=error error={err}");
                Vec::new()
            }
        }
    }

    fn store(&mut self, posts: &[Post]) {
        let document = match serde_json::to_string(posts) {
            Ok(document) => document,
            Err(err) => {
                warn!("event=posts_encode module=repo status=error error={err}");
                return;
            }
        };

        if let Err(err) = self.storage.write(&document) {
            warn!("event=posts_store module=repo status=error error={err}");
        }
    }
}

impl<S: StorageBackend> PostRepository for StoredPostRepository<S> {
    fn list(&self) -> Vec<Post> {
        self.load()
    }

    fn get_by_slug(&self, slug: &str) -> Option<Post> {
        self.load().into_iter().find(|post| post.slug == slug)
    }

    fn create(&mut self, draft: PostDraft) -> Post {
        let mut posts = self.load();
        let slug = unique_slug(&slugify(&draft.title), &posts);

        let post = Post {
            id: Uuid::new_v4(),
            read_time: estimate_read_time(&draft.content),
            title: draft.title,
            excerpt: draft.excerpt,
            content: draft.content,
            category: draft.category,
            tags: dedup_tags(draft.tags),
            slug,
            date: Local::now().date_naive(),
            featured: false,
            is_user_created: true,
        };

        posts.insert(0, post.clone());
        self.store(&posts);
        post
    }

    fn update(&mut self, slug: &str, patch: PostPatch) -> Option<Post> {
        let mut posts = self.load();
        let post = posts.iter_mut().find(|post| post.slug == slug)?;

        if let Some(title) = patch.title {
            post.title = title;
        }
        if let Some(excerpt) = patch.excerpt {
            post.excerpt = excerpt;
        }
        if let Some(content) = patch.content {
            post.read_time = estimate_read_time(&content);
            post.content = content;
        }
        if let Some(category) = patch.category {
            post.category = category;
        }
        if let Some(tags) = patch.tags {
            post.tags = dedup_tags(tags);
        }
        if let Some(featured) = patch.featured {
            post.featured = featured;
        }

        let updated = post.clone();
        self.store(&posts);
        Some(updated)
    }

    fn delete(&mut self, slug: &str) -> bool {
        let mut posts = self.load();
        let before = posts.len();
        posts.retain(|post| post.slug != slug);
        if posts.len() == before {
            return false;
        }

        self.store(&posts);
        true
    }
}

/// Resolves a base slug against the current collection.
///
/// The base wins when free; otherwise the smallest numeric suffix wins.
fn unique_slug(base: &str, posts: &[Post]) -> String {
    let taken = |candidate: &str| posts.iter().any(|post| post.slug == candidate);
    if !taken(base) {
        return base.to_string();
    }

    let mut counter = 1u32;
    loop {
        let candidate = format!("{base}-{counter}");
        if !taken(&candidate) {
            return candidate;
        }
        counter += 1;
    }
}

/// Trims tags, dropping empties and duplicates while keeping first-seen
/// order and the author's casing.
pub fn dedup_tags(tags: Vec<String>) -> Vec<String> {
    let mut kept: Vec<String> = Vec::with_capacity(tags.len());
    for tag in tags {
        let trimmed = tag.trim();
        if trimmed.is_empty() || kept.iter().any(|existing| existing == trimmed) {
            continue;
        }
        kept.push(trimmed.to_string());
    }
    kept
}
