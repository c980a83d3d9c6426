use inkpress_core::{
    Category, MemoryStorage, PostDraft, PostPatch, PostRepository, StoredPostRepository,
};

fn repo() -> StoredPostRepository<MemoryStorage> {
    StoredPostRepository::new(MemoryStorage::new())
}

fn draft(title: &str) -> PostDraft {
    PostDraft {
        title: title.to_string(),
        excerpt: "A short summary of the article.".to_string(),
        content: "word ".repeat(60),
        category: Category::Technology,
        tags: vec!["Rust".to_string()],
    }
}

#[test]
fn create_then_get_by_slug_round_trips() {
    let mut repo = repo();
    let created = repo.create(draft("Round Trip"));

    let fetched = repo.get_by_slug(&created.slug).unwrap();
    assert_eq!(fetched, created);
}

#[test]
fn list_is_most_recently_created_first() {
    let mut repo = repo();
    let first = repo.create(draft("First Article"));
    let second = repo.create(draft("Second Article"));

    let listed = repo.list();
    assert_eq!(listed.len(), 2);
    assert_eq!(listed[0].id, second.id);
    assert_eq!(listed[1].id, first.id);
}

#[test]
fn create_assigns_distinct_ids_and_defaults() {
    let mut repo = repo();
    let a = repo.create(draft("One"));
    let b = repo.create(draft("Two"));

    assert_ne!(a.id, b.id);
    assert!(!a.featured);
    assert!(a.is_user_created);
}

#[test]
fn create_suppresses_duplicate_tags() {
    let mut repo = repo();
    let mut input = draft("Tagged");
    input.tags = vec![
        "Rust".to_string(),
        " Rust ".to_string(),
        "Web".to_string(),
        "".to_string(),
    ];

    let created = repo.create(input);
    assert_eq!(created.tags, vec!["Rust".to_string(), "Web".to_string()]);
}

#[test]
fn update_content_recomputes_read_time() {
    let mut repo = repo();
    let created = repo.create(draft("Growing Article"));
    assert_eq!(created.read_time, "1 min");

    let longer = "word ".repeat(250);
    let updated = repo
        .update(
            &created.slug,
            PostPatch {
                content: Some(longer.clone()),
                ..PostPatch::default()
            },
        )
        .unwrap();

    assert_eq!(updated.read_time, "2 min");
    assert_eq!(updated.content, longer);
    assert_eq!(repo.get_by_slug(&created.slug).unwrap().read_time, "2 min");
}

#[test]
fn update_without_content_keeps_read_time() {
    let mut repo = repo();
    let created = repo.create(draft("Stable Estimate"));

    let updated = repo
        .update(
            &created.slug,
            PostPatch {
                excerpt: Some("New summary.".to_string()),
                featured: Some(true),
                ..PostPatch::default()
            },
        )
        .unwrap();

    assert_eq!(updated.read_time, created.read_time);
    assert!(updated.featured);
}

#[test]
fn update_unknown_slug_returns_none() {
    let mut repo = repo();
    repo.create(draft("Exists"));

    let patch = PostPatch {
        title: Some("New".to_string()),
        ..PostPatch::default()
    };
    assert!(repo.update("missing-slug", patch).is_none());
}

#[test]
fn delete_removes_exactly_the_matching_post() {
    let mut repo = repo();
    let keep = repo.create(draft("Keep Me"));
    let removed = repo.create(draft("Drop Me"));

    assert!(repo.delete(&removed.slug));
    assert!(repo.get_by_slug(&removed.slug).is_none());
    assert!(repo.get_by_slug(&keep.slug).is_some());

    assert!(!repo.delete(&removed.slug));
    assert_eq!(repo.list().len(), 1);
}
