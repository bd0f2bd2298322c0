// File: crates/hub-widgets/tests/store.rs
// Purpose: Validate JSON codec behavior over the key-value store.

use hub_widgets::store::{load_json, save_json, StoreError};
use hub_widgets::{KeyValueStore, MemoryStore};

#[test]
fn round_trips_json_values() {
    let mut store = MemoryStore::new();
    save_json(&mut store, "k", &vec![1u32, 2, 3]).expect("save");
    let back: Option<Vec<u32>> = load_json(&store, "k").expect("load");
    assert_eq!(back, Some(vec![1, 2, 3]));
}

#[test]
fn absent_key_reads_as_none() {
    let store = MemoryStore::new();
    let got: Option<Vec<u32>> = load_json(&store, "missing").expect("load");
    assert_eq!(got, None);
}

#[test]
fn corrupt_payload_is_a_decode_error() {
    let mut store = MemoryStore::new();
    store.set("k", "not-json{");
    let err = load_json::<Vec<u32>>(&store, "k").unwrap_err();
    assert!(matches!(err, StoreError::Decode { ref key, .. } if key == "k"));
}

#[test]
fn remove_clears_the_key() {
    let mut store = MemoryStore::new();
    store.set("k", "v");
    assert_eq!(store.get("k").as_deref(), Some("v"));
    store.remove("k");
    assert_eq!(store.get("k"), None);
}
