mod common;

use favmoji::favorites::FavoriteSet;
use favmoji::ui::finder::{FinderIntent, FinderReducer, FinderState, ViewMode};
use favmoji::ui::mvi::Reducer;

fn reduce_all(intents: Vec<FinderIntent>) -> FinderState {
    intents
        .into_iter()
        .fold(FinderState::default(), FinderReducer::reduce)
}

fn with_favorites(names: &[&str]) -> FinderState {
    FinderState::with_favorites(names.iter().copied().collect())
}

#[test]
fn initial_state_shows_empty_favorites() {
    let state = FinderState::default();
    assert_eq!(state.search_text(), "");
    assert_eq!(state.view_mode(), ViewMode::Favorites);
    assert!(state.favorites().is_empty());
    assert!(!state.pending_transition());
}

#[test]
fn load_with_nothing_stored_keeps_state() {
    let state = FinderReducer::reduce(
        FinderState::default(),
        FinderIntent::Load { stored: None },
    );
    assert_eq!(state, FinderState::default());
}

#[test]
fn load_replaces_favorites_only() {
    let stored: FavoriteSet = ["pig", "cat"].into_iter().collect();
    let state = reduce_all(vec![
        FinderIntent::Search("co".into()),
        FinderIntent::Load {
            stored: Some(stored.clone()),
        },
    ]);
    assert_eq!(state.favorites(), &stored);
    assert_eq!(state.search_text(), "co");
    assert_eq!(state.view_mode(), ViewMode::SearchResults);
}

#[test]
fn search_enters_results_with_pending_transition() {
    let state = reduce_all(vec![FinderIntent::Search("dog".into())]);
    assert_eq!(state.search_text(), "dog");
    assert_eq!(state.view_mode(), ViewMode::SearchResults);
    assert!(state.pending_transition());
}

#[test]
fn empty_search_always_shows_favorites() {
    let starts = vec![
        FinderState::default(),
        reduce_all(vec![FinderIntent::Search("cat".into())]),
        reduce_all(vec![
            FinderIntent::Search("cat".into()),
            FinderIntent::AddFavorite("cat".into()),
        ]),
    ];
    for start in starts {
        let favorites = start.favorites().clone();
        let state = FinderReducer::reduce(start, FinderIntent::Search(String::new()));
        assert_eq!(state.view_mode(), ViewMode::Favorites);
        assert_eq!(state.search_text(), "");
        assert_eq!(state.favorites(), &favorites);
    }
}

#[test]
fn show_favorites_clears_search_text() {
    let state = reduce_all(vec![
        FinderIntent::Search("cow".into()),
        FinderIntent::ShowFavorites,
    ]);
    assert_eq!(state.view_mode(), ViewMode::Favorites);
    assert_eq!(state.search_text(), "");
}

#[test]
fn add_keeps_view_and_clears_pending() {
    let state = reduce_all(vec![
        FinderIntent::Search("cat".into()),
        FinderIntent::AddFavorite("cat".into()),
    ]);
    assert!(state.is_favorite("cat"));
    assert_eq!(state.view_mode(), ViewMode::SearchResults);
    assert_eq!(state.search_text(), "cat");
    assert!(!state.pending_transition());
}

#[test]
fn adding_twice_stores_one_entry() {
    let state = FinderReducer::reduce(
        with_favorites(&["cat"]),
        FinderIntent::AddFavorite("cat".into()),
    );
    assert_eq!(state.favorites().len(), 1);
}

#[test]
fn removing_absent_name_is_a_no_op() {
    let start = with_favorites(&["cat"]);
    let state = FinderReducer::reduce(start.clone(), FinderIntent::RemoveFavorite("dog".into()));
    assert_eq!(state.favorites(), start.favorites());
}

#[test]
fn favorites_keep_insertion_order() {
    let state = reduce_all(vec![
        FinderIntent::AddFavorite("dog".into()),
        FinderIntent::AddFavorite("cat".into()),
        FinderIntent::AddFavorite("cow".into()),
        FinderIntent::RemoveFavorite("cat".into()),
    ]);
    let names: Vec<&str> = state.favorites().iter().collect();
    assert_eq!(names, vec!["dog", "cow"]);
}
