use std::time::Instant;

use ratatui::layout::Rect;

use crate::catalog::{Catalog, CatalogError};
use crate::config::TimingConfig;
use crate::ui::finder::{FinderIntent, FinderState, ViewMode};
use crate::ui::layout::{contains, favorites_button_rect, layout_regions, list_rect};
use crate::ui::sources::{ClickTarget, SearchStream, ShowFavoritesStream, ToggleStream};
use crate::ui::store::StateStore;
use crate::ui::transition::Transition;
use crate::ui::view::{self, ListView, ViewRow};

/// Availability of the catalog. Remote catalogs start as `Loading`.
#[derive(Debug)]
pub enum CatalogStatus {
    Loading,
    Ready(Catalog),
    Failed(String),
}

/// Terminal host for the finder: owns the store, the event sources and
/// what the list region currently shows.
pub struct App {
    should_quit: bool,
    store: StateStore,
    catalog: CatalogStatus,
    /// Current content of the search input.
    input: String,
    search: SearchStream,
    toggle: ToggleStream,
    show_favorites: ShowFavoritesStream,
    transition: Transition,
    /// Content on screen. Lags behind the store while a transition runs.
    displayed: ListView,
    /// Highlighted entry, as an index into `displayed.entries()`.
    selected: usize,
    /// First visible row of the list region.
    scroll: usize,
    area: Rect,
}

impl App {
    pub fn new(store: StateStore, catalog: CatalogStatus, timing: &TimingConfig) -> Self {
        let mut app = Self {
            should_quit: false,
            store,
            catalog,
            input: String::new(),
            search: SearchStream::new(timing.debounce()),
            toggle: ToggleStream,
            show_favorites: ShowFavoritesStream,
            transition: Transition::new(timing.transition()),
            displayed: ListView::loading(),
            selected: 0,
            scroll: 0,
            area: Rect::default(),
        };
        app.displayed = app.build_view();
        app
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn state(&self) -> &FinderState {
        self.store.state()
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    /// Search input accepts text only once the catalog is available.
    pub fn is_input_enabled(&self) -> bool {
        matches!(self.catalog, CatalogStatus::Ready(_))
    }

    pub fn catalog_status(&self) -> &CatalogStatus {
        &self.catalog
    }

    pub fn displayed(&self) -> &ListView {
        &self.displayed
    }

    /// True while the list shows old content waiting for the swap.
    pub fn is_entering(&self) -> bool {
        self.transition.is_entering()
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn scroll(&self) -> usize {
        self.scroll
    }

    pub fn last_error(&self) -> Option<&str> {
        self.store.last_error()
    }

    /// Startup: hydrate favorites and draw the first view.
    pub fn load(&mut self, now: Instant) {
        self.store.load();
        self.after_dispatch(now);
    }

    pub fn dispatch(&mut self, intent: FinderIntent, now: Instant) {
        self.store.dispatch(intent);
        self.after_dispatch(now);
    }

    pub fn on_catalog_loaded(&mut self, result: Result<Catalog, CatalogError>, now: Instant) {
        self.catalog = match result {
            Ok(catalog) => {
                tracing::info!(entries = catalog.len(), "Catalog ready");
                CatalogStatus::Ready(catalog)
            }
            Err(e) => {
                tracing::error!("Catalog unavailable: {}", e);
                CatalogStatus::Failed(e.to_string())
            }
        };
        self.render(now);
    }

    /// Without terminal input nothing could ever quit the loop.
    pub fn on_input_closed(&mut self) {
        tracing::warn!("Terminal input closed, shutting down");
        self.request_quit();
    }

    pub fn on_resize(&mut self, cols: u16, rows: u16) {
        self.area = Rect::new(0, 0, cols, rows);
        self.ensure_selected_visible();
    }

    pub fn on_char(&mut self, ch: char, now: Instant) {
        if !self.is_input_enabled() {
            return;
        }
        self.input.push(ch);
        self.search.on_input(&self.input, now);
    }

    pub fn on_backspace(&mut self, now: Instant) {
        if !self.is_input_enabled() || self.input.pop().is_none() {
            return;
        }
        self.search.on_input(&self.input, now);
    }

    pub fn on_clear_input(&mut self, now: Instant) {
        if !self.is_input_enabled() || self.input.is_empty() {
            return;
        }
        self.input.clear();
        self.search.on_input(&self.input, now);
    }

    pub fn on_paste(&mut self, text: &str, now: Instant) {
        if !self.is_input_enabled() {
            return;
        }
        let before = self.input.len();
        self.input
            .extend(text.chars().filter(|ch| !ch.is_control()));
        if self.input.len() != before {
            self.search.on_input(&self.input, now);
        }
    }

    /// Raw click at a screen cell. Every source sees it and filters for
    /// itself.
    pub fn on_click(&mut self, column: u16, row: u16, now: Instant) {
        let target = self.target_at(column, row);
        if let ClickTarget::Entry(name) = &target {
            if let Some(index) = self.displayed.entries().iter().position(|e| &e.name == name) {
                self.selected = index;
            }
        }
        if let Some(intent) = self.toggle.on_click(&target, self.store.state()) {
            self.dispatch(intent, now);
        }
        if let Some(intent) = self.show_favorites.on_click(&target) {
            self.dispatch(intent, now);
        }
    }

    /// Keyboard equivalent of clicking the highlighted entry.
    pub fn activate_selected(&mut self, now: Instant) {
        let Some(entry) = self.displayed.entries().get(self.selected) else {
            return;
        };
        let target = ClickTarget::Entry(entry.name.clone());
        if let Some(intent) = self.toggle.on_click(&target, self.store.state()) {
            self.dispatch(intent, now);
        }
    }

    /// Keyboard equivalent of clicking the favorites control.
    pub fn activate_show_favorites(&mut self, now: Instant) {
        let intent = self.show_favorites.on_activate();
        self.dispatch(intent, now);
    }

    pub fn move_selection(&mut self, delta: isize) {
        let len = self.displayed.entries().len();
        if len == 0 {
            return;
        }
        let next = (self.selected as isize + delta).clamp(0, len as isize - 1);
        self.selected = next as usize;
        self.ensure_selected_visible();
    }

    /// Fire due timers: debounced search first, then the pending swap.
    pub fn on_tick(&mut self, now: Instant) {
        if let Some(intent) = self.search.poll(now) {
            self.dispatch(intent, now);
        }
        if self.transition.poll(now) {
            self.swap_content();
        }
    }

    /// Nearest instant at which [`on_tick`](Self::on_tick) has work to do.
    pub fn next_deadline(&self) -> Option<Instant> {
        match (self.search.deadline(), self.transition.deadline()) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }

    /// Hit-test a screen cell against the last drawn frame.
    pub fn target_at(&self, column: u16, row: u16) -> ClickTarget {
        if contains(favorites_button_rect(self.area), column, row) {
            return ClickTarget::ShowFavorites;
        }
        let (header, _, _) = layout_regions(self.area);
        if contains(header, column, row) {
            return ClickTarget::SearchInput;
        }
        let list = list_rect(self.area);
        if !contains(list, column, row) {
            return ClickTarget::Nothing;
        }
        let index = self.scroll + usize::from(row - list.y);
        match self.displayed.rows().get(index) {
            Some(ViewRow::Entry(entry)) => ClickTarget::Entry(entry.name.clone()),
            _ => ClickTarget::Nothing,
        }
    }

    fn after_dispatch(&mut self, now: Instant) {
        self.input = self.store.state().search_text().to_string();
        self.render(now);
    }

    /// Apply the current snapshot to the list region, immediately or behind
    /// the transition. Any request cancels a pending swap first.
    fn render(&mut self, now: Instant) {
        let state = self.store.state();
        if state.view_mode() == ViewMode::SearchResults && state.pending_transition() {
            self.transition.start(now);
        } else {
            self.transition.cancel();
            self.swap_content();
        }
    }

    fn swap_content(&mut self) {
        let next = self.build_view();
        let same_entries = next
            .entries()
            .iter()
            .map(|e| &e.name)
            .eq(self.displayed.entries().iter().map(|e| &e.name));
        if !same_entries {
            self.selected = 0;
            self.scroll = 0;
        }
        self.displayed = next;
        self.selected = self
            .selected
            .min(self.displayed.entries().len().saturating_sub(1));
        self.ensure_selected_visible();
    }

    fn build_view(&self) -> ListView {
        match &self.catalog {
            CatalogStatus::Loading => ListView::loading(),
            CatalogStatus::Failed(_) => ListView::catalog_error(),
            CatalogStatus::Ready(catalog) => view::build(self.store.state(), catalog),
        }
    }

    fn ensure_selected_visible(&mut self) {
        let height = usize::from(list_rect(self.area).height);
        if height == 0 || self.displayed.entries().is_empty() {
            return;
        }
        let row = self.selected + usize::from(self.displayed.header().is_some());
        if row < self.scroll {
            self.scroll = row;
        } else if row >= self.scroll + height {
            self.scroll = row + 1 - height;
        }
        // Keep the header visible when the first entry is selected.
        if self.selected == 0 {
            self.scroll = 0;
        }
    }
}
