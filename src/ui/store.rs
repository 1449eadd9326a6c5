//! Owner of the single finder state snapshot.

use crate::favorites::PersistentFavorites;
use crate::ui::finder::{FinderIntent, FinderReducer, FinderState};
use crate::ui::mvi::Reducer;

/// Holds the current [`FinderState`] and runs every transition.
///
/// `dispatch` is the only way the snapshot changes. The favorites side
/// effect runs after the new snapshot is committed.
pub struct StateStore {
    state: FinderState,
    favorites: PersistentFavorites,
    last_error: Option<String>,
}

impl StateStore {
    pub fn new(initial: FinderState, favorites: PersistentFavorites) -> Self {
        Self {
            state: initial,
            favorites,
            last_error: None,
        }
    }

    /// Latest committed snapshot.
    pub fn state(&self) -> &FinderState {
        &self.state
    }

    /// Last persistence failure, kept for the status line.
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Hydrate favorites from storage.
    pub fn load(&mut self) {
        let stored = self.favorites.load();
        self.dispatch(FinderIntent::Load { stored });
    }

    pub fn dispatch(&mut self, intent: FinderIntent) {
        tracing::debug!(action = intent.label(), ?intent, "dispatch");
        let persist = intent.persists_favorites();

        let previous = std::mem::take(&mut self.state);
        self.state = FinderReducer::reduce(previous, intent);

        if persist {
            match self.favorites.save(self.state.favorites()) {
                Ok(()) => self.last_error = None,
                Err(e) => {
                    tracing::warn!("Failed to persist favorites: {}", e);
                    self.last_error = Some(e.to_string());
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::favorites::{FavoriteSet, KeyValueStorage, MemoryStorage, FAVORITES_KEY};
    use crate::ui::finder::ViewMode;

    fn store_with(storage: &MemoryStorage) -> StateStore {
        StateStore::new(
            FinderState::default(),
            PersistentFavorites::new(storage.clone()),
        )
    }

    #[test]
    fn load_hydrates_from_storage() {
        let mut storage = MemoryStorage::new();
        storage.set_item(FAVORITES_KEY, r#"["pig","cat"]"#).unwrap();

        let mut store = store_with(&storage);
        store.load();

        let expected: FavoriteSet = ["pig", "cat"].into_iter().collect();
        assert_eq!(store.state().favorites(), &expected);
        assert_eq!(store.state().view_mode(), ViewMode::Favorites);
    }

    #[test]
    fn toggles_are_written_through() {
        let storage = MemoryStorage::new();
        let mut store = store_with(&storage);

        store.dispatch(FinderIntent::AddFavorite("cow".into()));
        assert_eq!(
            storage.get_item(FAVORITES_KEY).unwrap().as_deref(),
            Some(r#"["cow"]"#)
        );

        store.dispatch(FinderIntent::RemoveFavorite("cow".into()));
        assert_eq!(storage.get_item(FAVORITES_KEY).unwrap().as_deref(), Some("[]"));
    }

    #[test]
    fn search_does_not_touch_storage() {
        let storage = MemoryStorage::new();
        let mut store = store_with(&storage);
        store.dispatch(FinderIntent::Search("cat".into()));
        assert_eq!(storage.get_item(FAVORITES_KEY).unwrap(), None);
        assert!(store.last_error().is_none());
    }
}
