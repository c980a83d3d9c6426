//! Built-in demo catalog.
//!
//! # Responsibility
//! - Provide the read-only articles shown before any user content exists.
//!
//! # Invariants
//! - Seeded posts are never persisted and never user-created.
//! - Ids, slugs and dates are fixed so links stay stable across runs.

use crate::model::post::{Category, Post, PostId};
use chrono::NaiveDate;
use uuid::uuid;

struct SeedEntry {
    id: PostId,
    title: &'static str,
    excerpt: &'static str,
    content: &'static str,
    category: Category,
    tags: &'static [&'static str],
    slug: &'static str,
    read_time: &'static str,
    date: (i32, u32, u32),
    featured: bool,
}

const SEED_ENTRIES: [SeedEntry; 6] = [
    SeedEntry {
        id: uuid!("5f1c2a4e-8d0b-4c4f-9a61-1d2e3f405061"),
        title: "Building Modern Web Applications with Next.js 14",
        excerpt: "Explore the latest features in Next.js 14 including App Router, Server Components, and more. Learn how to build performant web applications.",
        content: "Next.js 14 introduces a rethought routing model built on nested \
layouts and server components. This walkthrough covers the App Router, \
partial prerendering, streaming responses and the data-fetching patterns \
that replace getServerSideProps in day-to-day work.",
        category: Category::Technology,
        tags: &["Next.js", "React", "Web Development"],
        slug: "building-modern-web-apps-nextjs-14",
        read_time: "8 min",
        date: (2024, 1, 28),
        featured: true,
    },
    SeedEntry {
        id: uuid!("9b7d6c5a-4e3f-4a2b-8c1d-0e9f8a7b6c5d"),
        title: "The Art of UI/UX Design: Principles That Matter",
        excerpt: "Deep dive into design principles that create memorable user experiences. From color theory to micro-interactions.",
        content: "Good interfaces disappear. This piece works through hierarchy, \
contrast and rhythm, then looks at how micro-interactions and motion give \
products a sense of craft without getting in the user's way.",
        category: Category::Design,
        tags: &["UI/UX", "Design", "User Experience"],
        slug: "art-of-ui-ux-design",
        read_time: "6 min",
        date: (2024, 1, 25),
        featured: true,
    },
    SeedEntry {
        id: uuid!("2a3b4c5d-6e7f-4081-92a3-b4c5d6e7f809"),
        title: "Productivity Hacks for Developers",
        excerpt: "Maximize your efficiency with these proven productivity techniques. From time management to automation.",
        content: "Most productivity advice ignores how development work actually \
flows. These techniques focus on protecting deep-work blocks, automating \
repeated chores and keeping the feedback loop between change and result as \
short as possible.",
        category: Category::Productivity,
        tags: &["Productivity", "Development", "Tips"],
        slug: "productivity-hacks-developers",
        read_time: "5 min",
        date: (2024, 1, 22),
        featured: false,
    },
    SeedEntry {
        id: uuid!("7c8d9e0f-1a2b-4c3d-8e5f-6a7b8c9d0e1f"),
        title: "Understanding Three.js: A Beginner's Guide",
        excerpt: "Get started with 3D graphics on the web. Learn the fundamentals of Three.js and create your first 3D scene.",
        content: "Scenes, cameras, lights and meshes: the four ideas every Three.js \
program is built from. Starting from an empty canvas, this guide assembles \
a first rotating scene and explains what the renderer is doing each frame.",
        category: Category::Technology,
        tags: &["Three.js", "3D", "WebGL"],
        slug: "understanding-threejs-beginners-guide",
        read_time: "10 min",
        date: (2024, 1, 20),
        featured: false,
    },
    SeedEntry {
        id: uuid!("3d4e5f60-7182-4930-a1b2-c3d4e5f60718"),
        title: "Mastering CSS Grid and Flexbox",
        excerpt: "A comprehensive guide to modern CSS layout techniques. Build responsive layouts with ease.",
        content: "Grid for the page, flexbox for the component. With that split in \
mind, this guide builds a full responsive layout twice, once per tool, and \
shows where each one stops being the right answer.",
        category: Category::Technology,
        tags: &["CSS", "Layout", "Web Development"],
        slug: "mastering-css-grid-flexbox",
        read_time: "7 min",
        date: (2024, 1, 18),
        featured: false,
    },
    SeedEntry {
        id: uuid!("8e9f0a1b-2c3d-4e4f-9a6b-7c8d9e0f1a2b"),
        title: "The Psychology of Colors in Web Design",
        excerpt: "How colors affect user perception and behavior. Learn to create impactful color schemes for your projects.",
        content: "Color reaches users before copy does. This article covers how hue \
and saturation shift perceived tone, and how to build a scheme that stays \
accessible while still carrying the brand.",
        category: Category::Design,
        tags: &["Color Theory", "Psychology", "Design"],
        slug: "psychology-colors-web-design",
        read_time: "6 min",
        date: (2024, 1, 15),
        featured: false,
    },
];

/// Returns the demo catalog, newest first.
///
/// These records never pass through the repository; they exist only on the
/// read path, flagged `is_user_created = false` so callers can tell them
/// apart from authored content.
pub fn demo_posts() -> Vec<Post> {
    SEED_ENTRIES.iter().map(materialize).collect()
}

fn materialize(entry: &SeedEntry) -> Post {
    let (year, month, day) = entry.date;
    Post {
        id: entry.id,
        title: entry.title.to_string(),
        excerpt: entry.excerpt.to_string(),
        content: entry.content.to_string(),
        category: entry.category,
        tags: entry.tags.iter().map(|tag| tag.to_string()).collect(),
        slug: entry.slug.to_string(),
        read_time: entry.read_time.to_string(),
        date: NaiveDate::from_ymd_opt(year, month, day).expect("valid seed date"),
        featured: entry.featured,
        is_user_created: false,
    }
}
