use crate::favorites::FavoriteSet;
use crate::ui::mvi::UiState;

/// Which list the body region shows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ViewMode {
    #[default]
    Favorites,
    SearchResults,
}

/// Snapshot of the finder UI.
///
/// Invariant: `view_mode == SearchResults` exactly when `search_text` is
/// non-empty. Only [`FinderReducer`](super::FinderReducer) builds non-initial
/// snapshots, which keeps the invariant closed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FinderState {
    pub(super) search_text: String,
    pub(super) view_mode: ViewMode,
    pub(super) favorites: FavoriteSet,
    pub(super) pending_transition: bool,
}

impl UiState for FinderState {}

impl FinderState {
    /// Initial snapshot with favorites already known (injected by tests or
    /// by a host that hydrates outside of `Load`).
    pub fn with_favorites(favorites: FavoriteSet) -> Self {
        Self {
            favorites,
            ..Self::default()
        }
    }

    pub fn search_text(&self) -> &str {
        &self.search_text
    }

    pub fn view_mode(&self) -> ViewMode {
        self.view_mode
    }

    pub fn favorites(&self) -> &FavoriteSet {
        &self.favorites
    }

    pub fn is_favorite(&self, name: &str) -> bool {
        self.favorites.contains(name)
    }

    /// Set by a non-empty search, cleared by favorite toggles.
    pub fn pending_transition(&self) -> bool {
        self.pending_transition
    }
}
