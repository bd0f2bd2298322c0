// File: crates/hub-widgets/tests/poll.rs
// Purpose: Validate poll seeding, vote accounting, and the one-vote guard.

use hub_widgets::poll::{self, PollError};
use hub_widgets::MemoryStore;

#[test]
fn unseeded_store_returns_default_options() {
    let store = MemoryStore::new();
    let tallies = poll::tallies(&store).expect("tallies");

    let names: Vec<_> = tallies.keys().cloned().collect();
    assert_eq!(
        names,
        ["MS Dhoni", "Ruturaj Gaikwad", "Ravindra Jadeja", "Matheesha Pathirana"]
    );
    assert_eq!(tallies["MS Dhoni"], 320);
    assert_eq!(tallies["Matheesha Pathirana"], 140);
}

#[test]
fn vote_increments_and_marks_client() {
    let mut store = MemoryStore::new();
    assert!(!poll::has_voted(&store));

    let tallies = poll::vote(&mut store, "Ravindra Jadeja").expect("vote");
    assert_eq!(tallies["Ravindra Jadeja"], 181);
    assert!(poll::has_voted(&store));

    // The increment is persisted, not just returned.
    let reloaded = poll::tallies(&store).expect("tallies");
    assert_eq!(reloaded["Ravindra Jadeja"], 181);
}

#[test]
fn second_vote_is_rejected() {
    let mut store = MemoryStore::new();
    poll::vote(&mut store, "MS Dhoni").expect("first vote");
    let err = poll::vote(&mut store, "MS Dhoni").unwrap_err();
    assert!(matches!(err, PollError::AlreadyVoted));

    let tallies = poll::tallies(&store).expect("tallies");
    assert_eq!(tallies["MS Dhoni"], 321);
}

#[test]
fn unknown_option_enters_at_one_vote() {
    let mut store = MemoryStore::new();
    let tallies = poll::vote(&mut store, "Shivam Dube").expect("vote");
    assert_eq!(tallies["Shivam Dube"], 1);
    // New options append after the seeded ones.
    assert_eq!(tallies.keys().last().map(String::as_str), Some("Shivam Dube"));
}

#[test]
fn results_carry_rounded_percentages() {
    let store = MemoryStore::new();
    let rows = poll::results(&store).expect("results");

    assert_eq!(rows.len(), 4);
    // Defaults total 850: 320/850 = 37.6% -> 38, 140/850 = 16.5% -> 16.
    assert_eq!(rows[0].option, "MS Dhoni");
    assert_eq!(rows[0].percent, 38);
    assert_eq!(rows[3].percent, 16);
}

#[test]
fn empty_tallies_report_zero_percent() {
    let mut store = MemoryStore::new();
    hub_widgets::store::save_json(
        &mut store,
        poll::POLL_KEY,
        &hub_widgets::PollTallies::from([("Nobody".to_owned(), 0u64)]),
    )
    .expect("seed");

    let rows = poll::results(&store).expect("results");
    assert_eq!(rows[0].votes, 0);
    assert_eq!(rows[0].percent, 0);
}
