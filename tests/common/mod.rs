//! Shared test utilities.

#![allow(dead_code, unused_imports)]

use favmoji::catalog::Catalog;
use favmoji::config::TimingConfig;
use favmoji::favorites::{MemoryStorage, PersistentFavorites};
use favmoji::ui::app::{App, CatalogStatus};
use favmoji::ui::finder::FinderState;
use favmoji::ui::store::StateStore;
use std::path::PathBuf;
use std::time::Duration;
use tempfile::TempDir;

/// Default debounce and transition delay.
pub const DELAY: Duration = Duration::from_millis(300);

/// Small catalog with three animals and the placeholder images.
pub fn animal_catalog() -> Catalog {
    [
        ("cat", "https://example.test/1f431.png"),
        ("cow", "https://example.test/1f42e.png"),
        ("dog", "https://example.test/1f436.png"),
        ("keyboard", "https://example.test/2328.png"),
        ("crying_cat_face", "https://example.test/1f63f.png"),
    ]
    .into_iter()
    .collect()
}

/// Store backed by the given in-memory storage.
pub fn memory_store(storage: &MemoryStorage) -> StateStore {
    StateStore::new(
        FinderState::default(),
        PersistentFavorites::new(storage.clone()),
    )
}

/// Loaded app on an 80x24 screen with the animal catalog.
pub fn animal_app(storage: &MemoryStorage) -> App {
    let mut app = App::new(
        memory_store(storage),
        CatalogStatus::Ready(animal_catalog()),
        &TimingConfig::default(),
    );
    app.on_resize(80, 24);
    app.load(std::time::Instant::now());
    app
}

/// Write `content` to `name` inside a fresh temp dir.
pub fn temp_file(name: &str, content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join(name);
    std::fs::write(&path, content).expect("Failed to write temp file");
    (temp_dir, path)
}
