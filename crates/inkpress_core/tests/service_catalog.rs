use inkpress_core::{
    Category, DraftValidationError, MemoryStorage, PostDraft, PostService, StoredPostRepository,
};

fn service() -> PostService<StoredPostRepository<MemoryStorage>> {
    PostService::new(StoredPostRepository::new(MemoryStorage::new()))
}

fn draft(title: &str) -> PostDraft {
    PostDraft {
        title: title.to_string(),
        excerpt: "Summary.".to_string(),
        content: "word ".repeat(60),
        category: Category::Lifestyle,
        tags: vec!["Notes".to_string()],
    }
}

#[test]
fn publish_rejects_invalid_drafts_without_side_effects() {
    let mut service = service();
    let mut invalid = draft("Valid Title");
    invalid.content = "too short".to_string();

    let err = service.publish(invalid).unwrap_err();
    assert!(matches!(err, DraftValidationError::ContentTooShort { .. }));
    assert!(service.catalog(None).iter().all(|post| !post.is_user_created));
}

#[test]
fn catalog_lists_user_posts_before_the_seeded_articles() {
    let mut service = service();
    assert_eq!(service.catalog(None).len(), 6);

    let published = service.publish(draft("Fresh Off The Editor")).unwrap();

    let catalog = service.catalog(None);
    assert_eq!(catalog.len(), 7);
    assert_eq!(catalog[0].id, published.id);
    assert!(catalog[1..].iter().all(|post| !post.is_user_created));
}

#[test]
fn catalog_category_filter_spans_user_and_seeded_posts() {
    let mut service = service();
    let mut design_draft = draft("My Design Notes");
    design_draft.category = Category::Design;
    service.publish(design_draft).unwrap();

    let design = service.catalog(Some(Category::Design));
    assert_eq!(design.len(), 3);
    assert!(design[0].is_user_created);
    assert!(design.iter().all(|post| post.category == Category::Design));

    assert!(service.catalog(Some(Category::Tutorial)).is_empty());
}

#[test]
fn find_prefers_user_posts_and_falls_back_to_seeds() {
    let mut service = service();
    let published = service.publish(draft("Reachable By Slug")).unwrap();

    assert_eq!(service.find(&published.slug).unwrap().id, published.id);

    let seeded = service.find("art-of-ui-ux-design").unwrap();
    assert!(!seeded.is_user_created);

    assert!(service.find("no-such-slug").is_none());
}

#[test]
fn retract_never_touches_the_seeded_catalog() {
    let mut service = service();
    assert!(!service.retract("art-of-ui-ux-design"));
    assert_eq!(service.catalog(None).len(), 6);

    let published = service.publish(draft("Temporary")).unwrap();
    assert!(service.retract(&published.slug));
    assert_eq!(service.catalog(None).len(), 6);
}
