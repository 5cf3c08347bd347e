//! Color palette for the gallery.

use ratatui::style::Color;

// --- Background layers ---
pub const DEEPEST_BG: Color = Color::Rgb(10, 10, 12);
pub const CARD_BG: Color = Color::Rgb(18, 18, 22);
pub const POPUP_BG: Color = Color::Rgb(28, 28, 34);

// --- Borders ---
pub const BORDER_DIM: Color = Color::DarkGray;
pub const BORDER_ACTIVE: Color = Color::Rgb(232, 196, 120);

// --- Accent ---
pub const ACCENT: Color = Color::Rgb(232, 196, 120); // brass
pub const ACCENT_DIM: Color = Color::Rgb(120, 100, 64);

// --- Text ---
pub const TEXT_PRIMARY: Color = Color::White;
pub const TEXT_SECONDARY: Color = Color::Gray;
pub const TEXT_MUTED: Color = Color::DarkGray;

// --- Media ---
pub const MEDIA_LOADING: Color = Color::Rgb(60, 60, 68);
pub const MEDIA_STILL: Color = Color::Rgb(140, 170, 200);
pub const MEDIA_MOTION: Color = Color::Rgb(210, 120, 150);

// --- Effects ---
pub const SHADOW: Color = Color::Black;

/// Foreground on accent backgrounds
pub const CONTRAST_FG: Color = Color::Black;
