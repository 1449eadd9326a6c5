pub mod app;
pub mod events;
pub mod finder;
pub mod footer;
pub mod header;
pub mod input;
pub mod layout;
pub mod markup;
pub mod mvi;
pub mod render;
pub mod runtime;
pub mod sources;
pub mod store;
pub mod terminal_guard;
pub mod theme;
pub mod transition;
pub mod view;
