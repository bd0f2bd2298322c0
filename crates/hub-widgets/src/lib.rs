// File: crates/hub-widgets/src/lib.rs
// Summary: Widget library entry point; persisted poll, comment list, and social feed.

pub mod clock;
pub mod comments;
pub mod feed;
pub mod poll;
pub mod store;

pub use clock::{format_time_ms, now_ms};
pub use comments::Comment;
pub use feed::{load_more, FeedCursor, FeedPage, FeedPost};
pub use poll::{PollRow, PollTallies};
pub use store::{KeyValueStore, MemoryStore, StoreError};
