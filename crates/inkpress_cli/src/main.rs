//! CLI smoke entry point.
//!
//! # Responsibility
//! - Exercise `inkpress_core` wiring end to end without any UI runtime.
//! - Keep output deterministic for quick local sanity checks.

use inkpress_core::{Category, MemoryStorage, PostService, SearchIndex, StoredPostRepository};

fn main() {
    println!("inkpress_core version={}", inkpress_core::core_version());
    println!("categories={}", Category::ALL.len());

    let service = PostService::new(StoredPostRepository::new(MemoryStorage::new()));
    let catalog = service.catalog(None);
    println!("seeded_articles={}", catalog.len());

    let index = SearchIndex::new(service.search_records());
    let hits = index.search("nextjs");
    println!(
        "probe_query=nextjs hits={} top={}",
        hits.len(),
        hits.first().map(|hit| hit.slug.as_str()).unwrap_or("-")
    );
}
