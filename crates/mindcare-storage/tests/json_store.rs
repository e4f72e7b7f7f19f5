use mindcare_storage::{JsonStore, MemoryStore, Store, StorageError};
use serde_json::json;

#[test]
fn typed_helpers_round_trip_through_json() {
    let store = MemoryStore::new();
    let entries = vec!["a".to_string(), "b".to_string()];

    mindcare_storage::store::save_typed(&store, "mood_entries", &entries).expect("save");
    let loaded: Vec<String> = mindcare_storage::store::load_typed(&store, "mood_entries")
        .expect("load")
        .expect("present");
    assert_eq!(loaded, entries);
}

#[test]
fn absent_key_loads_as_none() {
    let dir = tempfile::tempdir().expect("tempdir");
    let store = JsonStore::open(dir.path()).expect("open");
    assert!(store.load("mood_entries").expect("load").is_none());
}

#[test]
fn save_then_load_round_trips() {
    let dir = tempfile::tempdir().expect("tempdir");
    let store = JsonStore::open(dir.path()).expect("open");

    let doc = json!([{ "date": "2024-01-15", "mood": "good" }]);
    store.save("mood_entries", &doc).expect("save");

    let loaded = store.load("mood_entries").expect("load").expect("present");
    assert_eq!(loaded, doc);
}

#[test]
fn save_replaces_whole_collection() {
    let dir = tempfile::tempdir().expect("tempdir");
    let store = JsonStore::open(dir.path()).expect("open");

    store.save("assessments", &json!([1, 2, 3])).expect("save");
    store.save("assessments", &json!([4])).expect("save");

    let loaded = store.load("assessments").expect("load").expect("present");
    assert_eq!(loaded, json!([4]));
}

#[test]
fn no_tmp_file_left_behind() {
    let dir = tempfile::tempdir().expect("tempdir");
    let store = JsonStore::open(dir.path()).expect("open");
    store.save("chat_history", &json!({})).expect("save");

    let names: Vec<String> = std::fs::read_dir(dir.path())
        .expect("read_dir")
        .map(|e| e.expect("entry").file_name().to_string_lossy().into_owned())
        .collect();
    assert_eq!(names, vec!["chat_history.json".to_string()]);
}

#[test]
fn path_like_key_is_rejected() {
    let dir = tempfile::tempdir().expect("tempdir");
    let store = JsonStore::open(dir.path()).expect("open");
    let err = store.load("../escape").unwrap_err();
    assert!(matches!(err, StorageError::InvalidKey(_)));
}

#[test]
fn memory_store_matches_file_semantics() {
    let store = MemoryStore::new();
    assert!(store.load("mood_entries").expect("load").is_none());

    store.save("mood_entries", &json!([1])).expect("save");
    store.save("mood_entries", &json!([2])).expect("save");
    assert_eq!(
        store.load("mood_entries").expect("load").expect("present"),
        json!([2])
    );
}
