//! Centralized theme for the gallery TUI.
//!
//! - `palette`: raw color constants
//! - `styles`: semantic style builder functions
//! - `icons`: glyphs with Nerd Font and Unicode variants

pub mod icons;
pub mod palette;
pub mod styles;
