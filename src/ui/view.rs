//! View model: a pure mapping from finder state + catalog to what the list
//! region shows. Drawing (terminal or markup) happens on top of this.

use crate::catalog::Catalog;
use crate::ui::finder::{FinderState, ViewMode};

/// Queries shorter than this match by prefix, longer ones by substring.
pub const PREFIX_QUERY_LIMIT: usize = 3;

/// Catalog entry whose image illustrates "no search results".
pub const NO_RESULTS_IMAGE: &str = "crying_cat_face";
/// Catalog entry whose image illustrates the empty favorites list.
pub const EMPTY_FAVORITES_IMAGE: &str = "keyboard";

pub const FAVORITES_HEADER: &str = "Tap or click to remove from favorites";
pub const RESULTS_HEADER: &str = "Tap or click to add to favorites";
pub const EMPTY_FAVORITES_TEXT: &str = "Start Typing Above";
pub const NO_RESULTS_TEXT: &str = "No Search Results";
pub const LOADING_TEXT: &str = "Loading...";
pub const CATALOG_ERROR_TEXT: &str = "Error Fetching Emojis";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryRow {
    pub name: String,
    pub image_ref: String,
    pub favorite: bool,
}

/// Static message with an optional illustrating image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placeholder {
    pub text: &'static str,
    pub image_name: Option<&'static str>,
    pub image_ref: Option<String>,
}

impl Placeholder {
    fn plain(text: &'static str) -> Self {
        Self {
            text,
            image_name: None,
            image_ref: None,
        }
    }

    fn illustrated(text: &'static str, image_name: &'static str, catalog: &Catalog) -> Self {
        Self {
            text,
            image_name: Some(image_name),
            image_ref: catalog.image_ref(image_name).map(str::to_string),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListView {
    Loading(Placeholder),
    CatalogError(Placeholder),
    EmptyFavorites(Placeholder),
    Favorites(Vec<EntryRow>),
    NoResults(Placeholder),
    Results(Vec<EntryRow>),
}

/// One visual line of the list region.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewRow<'a> {
    Header(&'static str),
    Entry(&'a EntryRow),
    Placeholder(&'a Placeholder),
}

impl ListView {
    pub fn loading() -> Self {
        Self::Loading(Placeholder::plain(LOADING_TEXT))
    }

    pub fn catalog_error() -> Self {
        Self::CatalogError(Placeholder::plain(CATALOG_ERROR_TEXT))
    }

    pub fn header(&self) -> Option<&'static str> {
        match self {
            Self::Favorites(_) => Some(FAVORITES_HEADER),
            Self::Results(_) => Some(RESULTS_HEADER),
            _ => None,
        }
    }

    pub fn entries(&self) -> &[EntryRow] {
        match self {
            Self::Favorites(rows) | Self::Results(rows) => rows,
            _ => &[],
        }
    }

    pub fn rows(&self) -> Vec<ViewRow<'_>> {
        match self {
            Self::Loading(p) | Self::CatalogError(p) | Self::EmptyFavorites(p) | Self::NoResults(p) => {
                vec![ViewRow::Placeholder(p)]
            }
            Self::Favorites(rows) | Self::Results(rows) => {
                let mut out = Vec::with_capacity(rows.len() + 1);
                out.extend(self.header().map(ViewRow::Header));
                out.extend(rows.iter().map(ViewRow::Entry));
                out
            }
        }
    }
}

/// Case-insensitive match of one catalog key against a query.
pub fn matches_query(name: &str, query: &str) -> bool {
    let name = name.to_lowercase();
    let query = query.to_lowercase();
    if query.chars().count() < PREFIX_QUERY_LIMIT {
        name.starts_with(&query)
    } else {
        name.contains(&query)
    }
}

/// Catalog keys matching `query`, in catalog order.
pub fn filter_names<'a>(catalog: &'a Catalog, query: &str) -> Vec<&'a str> {
    catalog
        .names()
        .filter(|name| matches_query(name, query))
        .collect()
}

/// Build the list view for a ready catalog.
pub fn build(state: &FinderState, catalog: &Catalog) -> ListView {
    match state.view_mode() {
        ViewMode::Favorites => {
            let rows: Vec<EntryRow> = state
                .favorites()
                .iter()
                .filter_map(|name| {
                    let image_ref = catalog.image_ref(name);
                    if image_ref.is_none() {
                        tracing::debug!(name, "Favorite not in catalog, skipped");
                    }
                    image_ref.map(|image_ref| EntryRow {
                        name: name.to_string(),
                        image_ref: image_ref.to_string(),
                        favorite: true,
                    })
                })
                .collect();
            if rows.is_empty() {
                ListView::EmptyFavorites(Placeholder::illustrated(
                    EMPTY_FAVORITES_TEXT,
                    EMPTY_FAVORITES_IMAGE,
                    catalog,
                ))
            } else {
                ListView::Favorites(rows)
            }
        }
        ViewMode::SearchResults => {
            let rows: Vec<EntryRow> = catalog
                .entries()
                .filter(|entry| matches_query(entry.name, state.search_text()))
                .map(|entry| EntryRow {
                    name: entry.name.to_string(),
                    image_ref: entry.image_ref.to_string(),
                    favorite: state.is_favorite(entry.name),
                })
                .collect();
            if rows.is_empty() {
                ListView::NoResults(Placeholder::illustrated(
                    NO_RESULTS_TEXT,
                    NO_RESULTS_IMAGE,
                    catalog,
                ))
            } else {
                ListView::Results(rows)
            }
        }
    }
}
