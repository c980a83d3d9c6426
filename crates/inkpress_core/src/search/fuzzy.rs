//! Weighted fuzzy matching over title/excerpt/category fields.
//!
//! # Responsibility
//! - Score records with edit-distance-like similarity instead of exact
//!   substring containment.
//! - Exclude records beyond the tolerance threshold entirely.
//!
//! # Invariants
//! - Scores are distances: lower is better, `0.0` is a perfect match.
//! - A record matches when at least one field stays within the threshold.
//! - The index never mutates its records; it is a read-only snapshot.

use crate::model::post::{Post, PostId};
use strsim::jaro_winkler;

/// Tunables for the default scorer and result shaping.
///
/// Treated as configuration, not hard-coded law; the defaults mirror the
/// search dialog this core serves.
#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// Maximum per-field distance for a field to count as matching.
    pub threshold: f64,
    /// Relative weight of the title field.
    pub title_weight: f64,
    /// Relative weight of the excerpt field.
    pub excerpt_weight: f64,
    /// Relative weight of the category field.
    pub category_weight: f64,
    /// Number of records returned for blank queries.
    pub default_limit: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            threshold: 0.3,
            title_weight: 0.7,
            excerpt_weight: 0.2,
            category_weight: 0.1,
            default_limit: 5,
        }
    }
}

/// Searchable view over one catalog entry.
///
/// Carries the display fields a result list needs alongside the matchable
/// text fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRecord {
    pub id: PostId,
    pub title: String,
    pub excerpt: String,
    pub category: String,
    pub slug: String,
    pub read_time: String,
}

impl SearchRecord {
    pub fn from_post(post: &Post) -> Self {
        Self {
            id: post.id,
            title: post.title.clone(),
            excerpt: post.excerpt.clone(),
            category: post.category.label().to_string(),
            slug: post.slug.clone(),
            read_time: post.read_time.clone(),
        }
    }
}

/// Pluggable relevance strategy.
///
/// Lower scores are better; `None` means the record does not match at all.
pub trait ScoreStrategy {
    fn score(&self, record: &SearchRecord, query: &str) -> Option<f64>;
}

/// Weighted multi-field fuzzy scorer, the default strategy.
///
/// Each field is compared case-insensitively with Jaro-Winkler similarity,
/// taking the best of the whole-field comparison and the best single
/// token; substring containment counts as a perfect field match. A field
/// matches when its distance (`1 - similarity`) stays within the
/// threshold. The record score is the best matching field's distance
/// scaled by the complement of that field's weight, so the heavier field
/// wins between equal distances.
#[derive(Debug, Clone, Default)]
pub struct WeightedFuzzyScorer {
    config: SearchConfig,
}

impl WeightedFuzzyScorer {
    pub fn new(config: SearchConfig) -> Self {
        Self { config }
    }

    fn field_distance(query: &str, field: &str) -> f64 {
        let query = query.to_lowercase();
        let field = field.to_lowercase();
        if field.contains(&query) {
            return 0.0;
        }

        let whole = jaro_winkler(&query, &field);
        let best = field
            .split_whitespace()
            .map(|token| jaro_winkler(&query, token))
            .fold(whole, f64::max);
        1.0 - best
    }
}

impl ScoreStrategy for WeightedFuzzyScorer {
    fn score(&self, record: &SearchRecord, query: &str) -> Option<f64> {
        let fields = [
            (record.title.as_str(), self.config.title_weight),
            (record.excerpt.as_str(), self.config.excerpt_weight),
            (record.category.as_str(), self.config.category_weight),
        ];

        let mut best: Option<f64> = None;
        for (field, weight) in fields {
            let distance = Self::field_distance(query, field);
            if distance > self.config.threshold {
                continue;
            }
            let scored = distance * (1.0 - weight);
            best = Some(match best {
                Some(current) => current.min(scored),
                None => scored,
            });
        }
        best
    }
}

/// Ranked search over a fixed snapshot of records.
pub struct SearchIndex<S: ScoreStrategy = WeightedFuzzyScorer> {
    records: Vec<SearchRecord>,
    scorer: S,
    default_limit: usize,
}

impl SearchIndex<WeightedFuzzyScorer> {
    /// Builds an index with the default weighted fuzzy scorer.
    pub fn new(records: Vec<SearchRecord>) -> Self {
        let config = SearchConfig::default();
        let default_limit = config.default_limit;
        Self {
            records,
            scorer: WeightedFuzzyScorer::new(config),
            default_limit,
        }
    }
}

impl<S: ScoreStrategy> SearchIndex<S> {
    /// Builds an index with a caller-provided scoring strategy.
    pub fn with_scorer(records: Vec<SearchRecord>, scorer: S, default_limit: usize) -> Self {
        Self {
            records,
            scorer,
            default_limit,
        }
    }

    /// Returns matches ranked best-first.
    ///
    /// # Contract
    /// - Blank queries return the first `default_limit` records in
    ///   insertion order; this is a usability default, not a ranking.
    /// - Records whose score exceeds the strategy's tolerance are excluded
    ///   entirely.
    /// - Ties keep insertion order.
    pub fn search(&self, query: &str) -> Vec<&SearchRecord> {
        let query = query.trim();
        if query.is_empty() {
            return self.records.iter().take(self.default_limit).collect();
        }

        let mut scored: Vec<(f64, usize)> = self
            .records
            .iter()
            .enumerate()
            .filter_map(|(index, record)| {
                self.scorer
                    .score(record, query)
                    .map(|score| (score, index))
            })
            .collect();

        scored.sort_by(|a, b| a.0.total_cmp(&b.0).then(a.1.cmp(&b.1)));
        scored
            .into_iter()
            .map(|(_, index)| &self.records[index])
            .collect()
    }
}
