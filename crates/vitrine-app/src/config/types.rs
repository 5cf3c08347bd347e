//! Configuration types for Vitrine
//!
//! Defines `Settings` and its sections as read from `config.toml`.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Application settings (`config.toml`)
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub gallery: GallerySettings,

    #[serde(default)]
    pub layout: LayoutSettings,

    #[serde(default)]
    pub ui: UiSettings,
}

/// Gallery content settings
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct GallerySettings {
    /// Category selected at startup (falls back to `all` / first category)
    #[serde(default)]
    pub initial_category: Option<String>,

    /// Catalogue file; the built-in catalogue is used when absent
    #[serde(default)]
    pub catalogue: Option<PathBuf>,
}

/// Responsive breakpoints, in terminal columns
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub struct LayoutSettings {
    /// Below this width the gallery is a swipe carousel
    #[serde(default = "default_carousel_max_width")]
    pub carousel_max_width: u16,

    /// From this width the grid uses four columns instead of two
    #[serde(default = "default_wide_min_width")]
    pub wide_min_width: u16,
}

impl Default for LayoutSettings {
    fn default() -> Self {
        Self {
            carousel_max_width: default_carousel_max_width(),
            wide_min_width: default_wide_min_width(),
        }
    }
}

fn default_carousel_max_width() -> u16 {
    80
}

fn default_wide_min_width() -> u16 {
    160
}

/// Icon rendering mode for the TUI.
///
/// Controls whether icons use Nerd Font glyphs (requires a Nerd Font)
/// or safe Unicode characters (works in all terminals).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IconMode {
    /// Safe Unicode characters that work in all terminals (default)
    #[default]
    Unicode,
    /// Nerd Font glyphs
    NerdFonts,
}

impl std::fmt::Display for IconMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IconMode::Unicode => write!(f, "unicode"),
            IconMode::NerdFonts => write!(f, "nerd_fonts"),
        }
    }
}

/// UI settings
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct UiSettings {
    /// Capture mouse events (needed for press gestures)
    #[serde(default = "default_true")]
    pub mouse: bool,

    /// Event poll timeout in milliseconds
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,

    #[serde(default)]
    pub icons: IconMode,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            mouse: true,
            tick_rate_ms: default_tick_rate_ms(),
            icons: IconMode::default(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_tick_rate_ms() -> u64 {
    50
}
