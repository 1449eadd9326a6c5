//! Reducer for the finder state.

use crate::ui::mvi::Reducer;

use super::intent::FinderIntent;
use super::state::{FinderState, ViewMode};

/// Pure transition function for [`FinderState`].
///
/// Persisting favorites after `AddFavorite`/`RemoveFavorite` is done by the
/// store around the dispatch call.
pub struct FinderReducer;

impl Reducer for FinderReducer {
    type State = FinderState;
    type Intent = FinderIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            FinderIntent::Load { stored } => match stored {
                Some(favorites) => FinderState { favorites, ..state },
                None => state,
            },

            FinderIntent::Search(text) if !text.is_empty() => FinderState {
                search_text: text,
                view_mode: ViewMode::SearchResults,
                pending_transition: true,
                ..state
            },

            FinderIntent::Search(_) | FinderIntent::ShowFavorites => FinderState {
                search_text: String::new(),
                view_mode: ViewMode::Favorites,
                ..state
            },

            FinderIntent::AddFavorite(name) => {
                let mut favorites = state.favorites;
                favorites.insert(name);
                FinderState {
                    favorites,
                    pending_transition: false,
                    ..state
                }
            }

            FinderIntent::RemoveFavorite(name) => {
                let mut favorites = state.favorites;
                favorites.remove(&name);
                FinderState {
                    favorites,
                    pending_transition: false,
                    ..state
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn searching(text: &str) -> FinderState {
        FinderReducer::reduce(FinderState::default(), FinderIntent::Search(text.into()))
    }

    #[test]
    fn empty_search_keeps_pending_transition_flag() {
        let new = FinderReducer::reduce(searching("pig"), FinderIntent::Search(String::new()));
        assert_eq!(new.view_mode(), ViewMode::Favorites);
        assert!(new.pending_transition());
    }

    #[test]
    fn toggle_pair_restores_favorites() {
        let start = FinderState::with_favorites(["cat"].into_iter().collect());
        let added = FinderReducer::reduce(start.clone(), FinderIntent::AddFavorite("dog".into()));
        let removed = FinderReducer::reduce(added, FinderIntent::RemoveFavorite("dog".into()));
        assert_eq!(removed.favorites(), start.favorites());

        let removed = FinderReducer::reduce(start.clone(), FinderIntent::RemoveFavorite("cat".into()));
        let added = FinderReducer::reduce(removed, FinderIntent::AddFavorite("cat".into()));
        assert_eq!(added.favorites(), start.favorites());
    }
}
