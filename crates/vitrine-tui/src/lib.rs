//! vitrine-tui - Terminal UI for Vitrine
//!
//! Drives a `vitrine_app::Engine` from crossterm events and renders the
//! gallery with ratatui: category bar, carousel or grid of cards, detail
//! overlay and status bar.

pub mod event;
pub mod layout;
pub mod render;
pub mod runner;
pub mod terminal;
pub mod theme;
pub mod widgets;

#[cfg(test)]
pub mod test_utils;

pub use runner::run;
