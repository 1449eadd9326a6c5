//! Non-interactive rendering: run the same store, reducer and view as the
//! terminal UI for one query and return the list markup.

use crate::catalog::{load_catalog, CatalogSource};
use crate::favorites::PersistentFavorites;
use crate::ui::finder::{FinderIntent, FinderState};
use crate::ui::markup::to_html;
use crate::ui::store::StateStore;
use crate::ui::view::{self, ListView};

/// Markup of the list region after `Load` then `Search(query)`.
///
/// A catalog that cannot be loaded yields the catalog error view.
pub fn render_query(source: &CatalogSource, favorites: PersistentFavorites, query: &str) -> String {
    let mut store = StateStore::new(FinderState::default(), favorites);
    store.load();
    store.dispatch(FinderIntent::Search(query.to_string()));

    let list = match load_catalog(source) {
        Ok(catalog) => view::build(store.state(), &catalog),
        Err(e) => {
            tracing::error!("Catalog unavailable: {}", e);
            ListView::catalog_error()
        }
    };
    to_html(&list)
}
