use crate::favorites::FavoriteSet;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FinderIntent {
    /// Startup hydration. `stored` is what the favorites storage returned.
    Load { stored: Option<FavoriteSet> },
    /// Debounced search text. Empty text returns to the favorites view.
    Search(String),
    ShowFavorites,
    AddFavorite(String),
    RemoveFavorite(String),
}

impl FinderIntent {
    /// True for intents whose result must be written to favorites storage.
    pub fn persists_favorites(&self) -> bool {
        matches!(self, Self::AddFavorite(_) | Self::RemoveFavorite(_))
    }

    /// Short name for logs.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Load { .. } => "load",
            Self::Search(_) => "search",
            Self::ShowFavorites => "show favorites",
            Self::AddFavorite(_) => "add to favorites",
            Self::RemoveFavorite(_) => "remove from favorites",
        }
    }
}

impl Intent for FinderIntent {}
