// File: crates/hub-widgets/src/feed.rs
// Summary: Social feed with an explicit pagination cursor threaded through calls.

use serde::{Deserialize, Serialize};

use crate::store::{load_json, KeyValueStore, StoreResult};

pub const FEED_KEY: &str = "ipl_social_feed_v1";
pub const DEFAULT_PAGE_SIZE: usize = 2;

/// `time` is epoch milliseconds.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FeedPost {
    pub author: String,
    pub text: String,
    pub time: i64,
}

/// Number of posts already visible. Threaded through `load_more` calls instead
/// of being held as ambient state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FeedCursor(pub usize);

/// One page of the feed: the visible prefix, the advanced cursor, and whether
/// everything is shown (the "hide load-more" signal).
#[derive(Clone, Debug, PartialEq)]
pub struct FeedPage {
    pub visible: Vec<FeedPost>,
    pub cursor: FeedCursor,
    pub exhausted: bool,
}

/// Built-in sample posts at fixed offsets before `now_ms`.
pub fn sample_posts(now_ms: i64) -> Vec<FeedPost> {
    let post = |author: &str, text: &str, age_ms: i64| FeedPost {
        author: author.to_owned(),
        text: text.to_owned(),
        time: now_ms - age_ms,
    };
    vec![
        post("ThalaFan07", "Dhoni's helicopter shot today... pure nostalgia!", 3_000_000),
        post("AnbuDen", "Yellow Army will roar again this season!", 6_000_000),
        post("ChepaukBoy", "Ruturaj is the future of CSK. What a player!", 9_000_000),
        post("WhistlePoduGirl", "Jadeja is in insane form!", 14_000_000),
        post("MSDianForever", "Thala doesn't age. He evolves", 21_000_000),
    ]
}

/// Stored posts, or the samples when nothing has been persisted yet.
pub fn posts(store: &dyn KeyValueStore, now_ms: i64) -> StoreResult<Vec<FeedPost>> {
    Ok(load_json(store, FEED_KEY)?.unwrap_or_else(|| sample_posts(now_ms)))
}

/// Advance the cursor by `count` and return everything visible so far.
/// A cursor at or past the end restarts from the top of the feed.
pub fn load_more(items: &[FeedPost], cursor: FeedCursor, count: usize) -> FeedPage {
    let start = if cursor.0 >= items.len() { 0 } else { cursor.0 };
    let visible_end = (start + count).min(items.len());
    FeedPage {
        visible: items[..visible_end].to_vec(),
        cursor: FeedCursor(visible_end),
        exhausted: visible_end >= items.len(),
    }
}
