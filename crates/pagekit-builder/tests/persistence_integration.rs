//! Persistence gateway integration tests

use pagekit_builder::{
    BlockKind, BuilderState, JsonFileStore, LayoutItem, LayoutStore, MemoryStore, Position,
    StorageError,
};

/// Store that fails every call, for the failure-path contracts.
struct FailingStore;

impl LayoutStore for FailingStore {
    fn save_layout(&mut self, _items: &[LayoutItem]) -> Result<(), StorageError> {
        Err(StorageError::Backend {
            message: "backend unavailable".to_string(),
        })
    }

    fn load_layout(&self) -> Result<Vec<LayoutItem>, StorageError> {
        Err(StorageError::Backend {
            message: "backend unavailable".to_string(),
        })
    }
}

#[test]
fn test_save_then_load_round_trip_through_memory_store() {
    let mut store = MemoryStore::new();

    let mut state = BuilderState::new();
    state.drop_block(BlockKind::Text, 10, 10);
    state.drop_block(BlockKind::Button, 200, 60);
    state.save_to_store(&mut store).unwrap();
    assert!(!state.is_modified);

    let mut other = BuilderState::new();
    let report = other.load_from_store(&store).unwrap();
    assert_eq!(report.restored, 2);
    assert_eq!(other.canvas.block_count(), 2);

    let positions: Vec<Position> = other.canvas.blocks().map(|b| b.position).collect();
    assert_eq!(positions, vec![Position::new(10, 10), Position::new(200, 60)]);
    assert!(!other.can_undo(), "load clears the history");
}

#[test]
fn test_save_then_load_round_trip_through_file_store() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("landing.pagekit.json");
    let mut store = JsonFileStore::new(&path).with_name("Landing");

    let mut state = BuilderState::new();
    let hero = state.drop_block(BlockKind::Hero, 0, 0);
    state.drop_block(BlockKind::Footer, 0, 800);
    state.begin_text_edit(hero);
    state.commit_text_edit("<section class=\"hero\"><h1>Launch</h1></section>");
    state.save_to_store(&mut store).unwrap();
    let saved = state.serialize_layout();

    let mut restored = BuilderState::new();
    restored.load_from_store(&store).unwrap();
    assert_eq!(restored.serialize_layout(), saved);
}

#[test]
fn test_file_store_writes_versioned_envelope() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("page.json");
    let mut store = JsonFileStore::new(&path).with_name("Page");

    let mut state = BuilderState::new();
    state.drop_block(BlockKind::Text, 1, 2);
    state.save_to_store(&mut store).unwrap();

    let raw: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(raw["version"], "1.0");
    assert_eq!(raw["metadata"]["name"], "Page");
    assert_eq!(raw["items"][0]["type"], "text");
}

#[test]
fn test_load_failure_leaves_canvas_untouched() {
    let mut state = BuilderState::new();
    state.drop_block(BlockKind::Text, 10, 10);
    state.drop_block(BlockKind::Image, 30, 30);
    let before = state.serialize_layout();
    let history_before = state.history_len();

    let err = state.load_from_store(&FailingStore);
    assert!(err.is_err());
    assert_eq!(state.serialize_layout(), before, "failed load must not clear the canvas");
    assert_eq!(state.history_len(), history_before, "history survives a failed load");
}

#[test]
fn test_save_failure_keeps_dirty_flag() {
    let mut state = BuilderState::new();
    state.drop_block(BlockKind::Text, 0, 0);
    assert!(state.is_modified);
    assert!(state.save_to_store(&mut FailingStore).is_err());
    assert!(state.is_modified);
}

#[test]
fn test_load_replaces_existing_canvas_wholesale() {
    let mut store = MemoryStore::new();
    let mut source = BuilderState::new();
    source.drop_block(BlockKind::Button, 5, 5);
    source.save_to_store(&mut store).unwrap();

    let mut state = BuilderState::new();
    let first = state.drop_block(BlockKind::Text, 0, 0);
    state.drop_block(BlockKind::Text, 10, 10);
    state.select_block(first);

    let report = state.load_from_store(&store).unwrap();
    assert_eq!(report.restored, 1);
    assert_eq!(state.canvas.block_count(), 1, "no merge with existing items");
    assert_eq!(state.canvas.blocks().next().unwrap().kind, BlockKind::Button);
    assert_eq!(state.canvas.selected_id(), None);
    assert!(!state.is_modified);
}

#[test]
fn test_load_from_missing_file_fails_cleanly() {
    let dir = tempfile::tempdir().unwrap();
    let store = JsonFileStore::new(dir.path().join("absent.json"));
    let mut state = BuilderState::new();
    state.drop_block(BlockKind::Text, 0, 0);
    assert!(state.load_from_store(&store).is_err());
    assert_eq!(state.canvas.block_count(), 1);
}
