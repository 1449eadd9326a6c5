//! Event sources: raw input in, [`FinderIntent`](crate::ui::finder::FinderIntent)s out.
//!
//! Each source is independent. The app feeds every raw event to the sources
//! that listen for it and dispatches whatever they emit, one at a time, on
//! the UI thread.

mod debounce;
mod search;
mod show_favorites;
mod toggle;

pub use debounce::Debouncer;
pub use search::SearchStream;
pub use show_favorites::ShowFavoritesStream;
pub use toggle::ToggleStream;

/// What a mouse click landed on after hit-testing the current frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClickTarget {
    /// An entry row; carries the entry name.
    Entry(String),
    /// The "show favorites" control in the footer.
    ShowFavorites,
    SearchInput,
    Nothing,
}
