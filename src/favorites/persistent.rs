use super::storage::{KeyValueStorage, StorageError};
use super::FavoriteSet;

/// Storage key holding the JSON list of favorite names.
pub const FAVORITES_KEY: &str = "favEmojis";

/// Favorites persisted through a [`KeyValueStorage`].
pub struct PersistentFavorites {
    storage: Box<dyn KeyValueStorage>,
}

impl PersistentFavorites {
    pub fn new(storage: impl KeyValueStorage + 'static) -> Self {
        Self {
            storage: Box::new(storage),
        }
    }

    /// Read the stored favorites.
    ///
    /// `None` on first run. Unreadable or undecodable values are logged and
    /// also reported as `None` so a corrupt store never blocks startup.
    pub fn load(&self) -> Option<FavoriteSet> {
        let raw = match self.storage.get_item(FAVORITES_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return None,
            Err(e) => {
                tracing::warn!("Ignoring stored favorites: {}", e);
                return None;
            }
        };

        match serde_json::from_str::<FavoriteSet>(&raw) {
            Ok(set) => {
                tracing::debug!(count = set.len(), "Loaded favorites");
                Some(set)
            }
            Err(e) => {
                tracing::warn!("Stored favorites are corrupt, starting empty: {}", e);
                None
            }
        }
    }

    /// Write the full set, replacing what was stored.
    pub fn save(&mut self, favorites: &FavoriteSet) -> Result<(), StorageError> {
        let encoded = serde_json::to_string(favorites).map_err(|e| StorageError::Encode {
            key: FAVORITES_KEY.to_string(),
            source: e,
        })?;
        self.storage.set_item(FAVORITES_KEY, &encoded)
    }
}
