// File: crates/hub-widgets/src/comments.rs
// Summary: Persisted comment list; newest-first display, delete by display index.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::store::{load_json, save_json, KeyValueStore, StoreError, StoreResult};

pub const COMMENTS_KEY: &str = "ipl_comments_v1";

/// `time` is epoch milliseconds, matching the stored JSON shape.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    pub name: String,
    pub text: String,
    pub time: i64,
}

#[derive(Debug, Error)]
pub enum CommentError {
    #[error("comment name and text must be non-empty")]
    Blank,
    #[error("no comment at display index {0}")]
    BadIndex(usize),
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Stored order: oldest first, as appended.
pub fn all(store: &dyn KeyValueStore) -> StoreResult<Vec<Comment>> {
    Ok(load_json(store, COMMENTS_KEY)?.unwrap_or_default())
}

/// Display order: newest first.
pub fn newest_first(store: &dyn KeyValueStore) -> StoreResult<Vec<Comment>> {
    let mut list = all(store)?;
    list.reverse();
    Ok(list)
}

/// Append a comment. Name and text are trimmed; blank input is rejected.
pub fn add(
    store: &mut dyn KeyValueStore,
    name: &str,
    text: &str,
    time_ms: i64,
) -> Result<Comment, CommentError> {
    let name = name.trim();
    let text = text.trim();
    if name.is_empty() || text.is_empty() {
        return Err(CommentError::Blank);
    }
    let mut list = all(store)?;
    let comment = Comment {
        name: name.to_owned(),
        text: text.to_owned(),
        time: time_ms,
    };
    list.push(comment.clone());
    save_json(store, COMMENTS_KEY, &list)?;
    Ok(comment)
}

/// Remove the comment at `display_index`, counted from the newest entry to
/// match the on-page order.
pub fn delete(store: &mut dyn KeyValueStore, display_index: usize) -> Result<(), CommentError> {
    let mut list = all(store)?;
    if display_index >= list.len() {
        return Err(CommentError::BadIndex(display_index));
    }
    let stored_index = list.len() - 1 - display_index;
    list.remove(stored_index);
    save_json(store, COMMENTS_KEY, &list)?;
    Ok(())
}
