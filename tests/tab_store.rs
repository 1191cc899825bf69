//! End-to-end lifecycle over the file-backed store: seed, mutate, reopen,
//! recover from a corrupted blob on disk.

use tabdeck::api::TabStore;
use tabdeck::model::AppState;
use tabdeck::store::fs::FileStore;

fn first_ids(store: &TabStore<FileStore>) -> Vec<u32> {
    store
        .first_tab()
        .unwrap()
        .cards
        .iter()
        .map(|c| c.id)
        .collect()
}

#[test]
fn fresh_directory_seeds_defaults_and_writes_nothing() {
    let temp_dir = tempfile::tempdir().unwrap();
    let store = TabStore::new(FileStore::new(temp_dir.path().to_path_buf()));
    assert_eq!(store.state(), &AppState::default_state());
    assert!(!temp_dir.path().join("tabState.json").exists());
}

#[test]
fn state_survives_a_reopen() {
    let temp_dir = tempfile::tempdir().unwrap();

    let mut store = TabStore::new(FileStore::new(temp_dir.path().to_path_buf()));
    store.move_card(0, 2);
    store.switch_tab(1);
    let saved = store.state().clone();
    drop(store);

    let reopened = TabStore::new(FileStore::new(temp_dir.path().to_path_buf()));
    assert_eq!(reopened.state(), &saved);
    assert_eq!(first_ids(&reopened), vec![2, 3, 1, 4]);
    assert_eq!(reopened.current_tab().unwrap().id, 1);
}

#[test]
fn corrupted_blob_on_disk_falls_back_to_defaults() {
    let temp_dir = tempfile::tempdir().unwrap();

    let mut store = TabStore::new(FileStore::new(temp_dir.path().to_path_buf()));
    store.move_card(0, 3);
    drop(store);

    std::fs::write(temp_dir.path().join("tabState.json"), "][ not json").unwrap();

    let mut reopened = TabStore::new(FileStore::new(temp_dir.path().to_path_buf()));
    assert_eq!(reopened.state(), &AppState::default_state());

    // Explicit hydrate against the still-corrupt blob resets and repairs
    // the slot on disk.
    reopened.hydrate();
    drop(reopened);
    let repaired = TabStore::new(FileStore::new(temp_dir.path().to_path_buf()));
    assert_eq!(repaired.state(), &AppState::default_state());
}

#[test]
fn structurally_broken_blob_is_treated_as_corrupt() {
    let temp_dir = tempfile::tempdir().unwrap();

    // Parseable JSON, but the second tab lost a card: the tabs no longer
    // hold the same card set.
    let mut state = AppState::default_state();
    state.tabs[1].cards.pop();
    let blob = serde_json::to_string(&state).unwrap();
    std::fs::write(temp_dir.path().join("tabState.json"), blob).unwrap();

    let store = TabStore::new(FileStore::new(temp_dir.path().to_path_buf()));
    assert_eq!(store.state(), &AppState::default_state());
}
