pub mod catalog;
pub mod cli;
pub mod config;
pub mod favorites;
pub mod logging;
pub mod preview;
pub mod ui;
