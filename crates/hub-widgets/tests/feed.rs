// File: crates/hub-widgets/tests/feed.rs
// Purpose: Validate cursor-driven feed pagination and sample seeding.

use hub_widgets::feed::{self, FeedCursor, DEFAULT_PAGE_SIZE};
use hub_widgets::MemoryStore;

#[test]
fn samples_are_seeded_relative_to_now() {
    let store = MemoryStore::new();
    let now = 1_700_000_000_000;
    let posts = feed::posts(&store, now).expect("posts");

    assert_eq!(posts.len(), 5);
    assert_eq!(posts[0].author, "ThalaFan07");
    assert_eq!(posts[0].time, now - 3_000_000);
    // Newest first by construction.
    for pair in posts.windows(2) {
        assert!(pair[0].time > pair[1].time);
    }
}

#[test]
fn pages_grow_by_cursor_steps() {
    let store = MemoryStore::new();
    let posts = feed::posts(&store, 0).expect("posts");

    let first = feed::load_more(&posts, FeedCursor::default(), DEFAULT_PAGE_SIZE);
    assert_eq!(first.visible.len(), 2);
    assert_eq!(first.cursor, FeedCursor(2));
    assert!(!first.exhausted);

    let second = feed::load_more(&posts, first.cursor, DEFAULT_PAGE_SIZE);
    assert_eq!(second.visible.len(), 4);
    assert!(!second.exhausted);

    let third = feed::load_more(&posts, second.cursor, DEFAULT_PAGE_SIZE);
    assert_eq!(third.visible.len(), 5);
    assert_eq!(third.cursor, FeedCursor(5));
    assert!(third.exhausted, "all posts visible hides the load-more control");
}

#[test]
fn cursor_past_end_restarts_from_top() {
    let store = MemoryStore::new();
    let posts = feed::posts(&store, 0).expect("posts");

    let wrapped = feed::load_more(&posts, FeedCursor(posts.len()), DEFAULT_PAGE_SIZE);
    assert_eq!(wrapped.visible.len(), 2);
    assert_eq!(wrapped.cursor, FeedCursor(2));
}

#[test]
fn empty_feed_is_immediately_exhausted() {
    let page = feed::load_more(&[], FeedCursor::default(), DEFAULT_PAGE_SIZE);
    assert!(page.visible.is_empty());
    assert!(page.exhausted);
    assert_eq!(page.cursor, FeedCursor(0));
}

#[test]
fn stored_posts_override_samples() {
    let mut store = MemoryStore::new();
    let custom = vec![hub_widgets::FeedPost {
        author: "OnlyFan".to_owned(),
        text: "hello".to_owned(),
        time: 42,
    }];
    hub_widgets::store::save_json(&mut store, feed::FEED_KEY, &custom).expect("seed");

    let posts = feed::posts(&store, 0).expect("posts");
    assert_eq!(posts, custom);
}
