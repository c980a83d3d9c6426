use inkpress_core::{
    demo_posts, MemoryStorage, PostService, ScoreStrategy, SearchIndex, SearchRecord,
    StoredPostRepository,
};

fn demo_records() -> Vec<SearchRecord> {
    demo_posts().iter().map(SearchRecord::from_post).collect()
}

#[test]
fn exact_title_query_ranks_its_record_first() {
    let index = SearchIndex::new(demo_records());

    let hits = index.search("The Psychology of Colors in Web Design");
    assert!(!hits.is_empty());
    assert_eq!(hits[0].slug, "psychology-colors-web-design");
}

#[test]
fn one_character_typo_still_finds_the_record() {
    let index = SearchIndex::new(demo_records());

    let hits = index.search("The Psychology of Colars in Web Design");
    assert!(!hits.is_empty());
    assert_eq!(hits[0].slug, "psychology-colors-web-design");
}

#[test]
fn single_word_typo_query_finds_the_record() {
    let index = SearchIndex::new(demo_records());

    let hits = index.search("productvity");
    assert!(hits
        .iter()
        .any(|hit| hit.slug == "productivity-hacks-developers"));
}

#[test]
fn blank_queries_return_the_default_listing() {
    let records = demo_records();
    let expected: Vec<String> = records.iter().take(5).map(|r| r.slug.clone()).collect();
    let index = SearchIndex::new(records);

    for query in ["", "   ", "\t\n"] {
        let hits = index.search(query);
        let slugs: Vec<String> = hits.iter().map(|hit| hit.slug.clone()).collect();
        assert_eq!(slugs, expected, "query {query:?}");
    }
}

#[test]
fn queries_beyond_tolerance_return_nothing() {
    let index = SearchIndex::new(demo_records());

    assert!(index.search("xqzvwk jjyqp").is_empty());
}

#[test]
fn equal_scores_keep_insertion_order() {
    let index = SearchIndex::new(demo_records());

    // Both design articles contain the query in title and category, so
    // they tie at a perfect score.
    let hits = index.search("Design");
    let design: Vec<&str> = hits
        .iter()
        .filter(|hit| hit.category == "Design")
        .map(|hit| hit.slug.as_str())
        .collect();
    assert_eq!(
        design,
        vec!["art-of-ui-ux-design", "psychology-colors-web-design"]
    );
}

#[test]
fn scoring_strategy_is_swappable() {
    struct TitlePrefixScorer;

    impl ScoreStrategy for TitlePrefixScorer {
        fn score(&self, record: &SearchRecord, query: &str) -> Option<f64> {
            record
                .title
                .to_lowercase()
                .starts_with(&query.to_lowercase())
                .then_some(0.0)
        }
    }

    let index = SearchIndex::with_scorer(demo_records(), TitlePrefixScorer, 5);
    let hits = index.search("the");
    let slugs: Vec<&str> = hits.iter().map(|hit| hit.slug.as_str()).collect();
    assert_eq!(
        slugs,
        vec!["art-of-ui-ux-design", "psychology-colors-web-design"]
    );
}

#[test]
fn service_snapshot_feeds_the_index() {
    let service = PostService::new(StoredPostRepository::new(MemoryStorage::new()));
    let index = SearchIndex::new(service.search_records());

    let hits = index.search("Mastering CSS Grid and Flexbox");
    assert!(!hits.is_empty());
    assert_eq!(hits[0].slug, "mastering-css-grid-flexbox");
}
