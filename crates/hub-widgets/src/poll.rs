// File: crates/hub-widgets/src/poll.rs
// Summary: Single-choice poll with persisted tallies and a one-vote-per-client guard.

use indexmap::IndexMap;
use thiserror::Error;

use crate::store::{load_json, save_json, KeyValueStore, StoreError, StoreResult};

pub const POLL_KEY: &str = "ipl_poll_votes_v1";
pub const POLL_VOTED_KEY: &str = "ipl_poll_voted_v1";

/// Option name -> vote count, insertion-ordered so results render stably.
pub type PollTallies = IndexMap<String, u64>;

#[derive(Debug, Error)]
pub enum PollError {
    #[error("this client already voted")]
    AlreadyVoted,
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// One rendered results row.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PollRow {
    pub option: String,
    pub votes: u64,
    pub percent: u32,
}

fn default_tallies() -> PollTallies {
    PollTallies::from([
        ("MS Dhoni".to_owned(), 320),
        ("Ruturaj Gaikwad".to_owned(), 210),
        ("Ravindra Jadeja".to_owned(), 180),
        ("Matheesha Pathirana".to_owned(), 140),
    ])
}

/// Current tallies, seeded with the default options when nothing is stored.
pub fn tallies(store: &dyn KeyValueStore) -> StoreResult<PollTallies> {
    Ok(load_json(store, POLL_KEY)?.unwrap_or_else(default_tallies))
}

pub fn has_voted(store: &dyn KeyValueStore) -> bool {
    store.get(POLL_VOTED_KEY).is_some()
}

/// Record one vote for `option` and mark this client as having voted.
/// An unknown option enters the tally at one vote.
pub fn vote(store: &mut dyn KeyValueStore, option: &str) -> Result<PollTallies, PollError> {
    if has_voted(store) {
        return Err(PollError::AlreadyVoted);
    }
    let mut current = tallies(store)?;
    *current.entry(option.to_owned()).or_insert(0) += 1;
    save_json(store, POLL_KEY, &current)?;
    store.set(POLL_VOTED_KEY, "true");
    Ok(current)
}

/// Tallies with integer percentages of the total (0 when the total is 0).
pub fn results(store: &dyn KeyValueStore) -> StoreResult<Vec<PollRow>> {
    let current = tallies(store)?;
    let total: u64 = current.values().sum();
    Ok(current
        .iter()
        .map(|(option, &votes)| PollRow {
            option: option.clone(),
            votes,
            percent: if total == 0 {
                0
            } else {
                ((votes as f64 / total as f64) * 100.0).round() as u32
            },
        })
        .collect())
}
