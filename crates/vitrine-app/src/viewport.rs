//! Viewport and responsive layout mode
//!
//! The viewport is a read-only environmental input (terminal size). The same
//! slot list backs both presentations; only the geometry differs.

use std::ops::Range;

use crate::config::LayoutSettings;

/// Rows taken by the category bar
pub const HEADER_HEIGHT: u16 = 3;
/// Rows taken by the status bar
pub const STATUS_HEIGHT: u16 = 1;
/// Rows of one card (border included)
pub const CARD_HEIGHT: u16 = 12;

/// Terminal size in cells
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: 80,
            height: 24,
        }
    }
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }

    pub fn layout_mode(&self, settings: &LayoutSettings) -> LayoutMode {
        LayoutMode::from_width(self.width, settings)
    }

    /// Height available to the gallery below the header and above the status bar
    pub fn gallery_height(&self) -> u16 {
        self.height.saturating_sub(HEADER_HEIGHT + STATUS_HEIGHT)
    }

    /// Number of grid rows that fit on screen (at least one)
    pub fn rows_per_screen(&self) -> usize {
        usize::from((self.gallery_height() / CARD_HEIGHT).max(1))
    }
}

/// Presentation chosen from the viewport width
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutMode {
    /// Narrow viewport: one snapping card per page, swiped horizontally
    Carousel,
    /// Wide viewport: multi-column grid
    Grid { columns: usize },
}

impl LayoutMode {
    pub fn from_width(width: u16, settings: &LayoutSettings) -> Self {
        if width < settings.carousel_max_width {
            LayoutMode::Carousel
        } else if width < settings.wide_min_width {
            LayoutMode::Grid { columns: 2 }
        } else {
            LayoutMode::Grid { columns: 4 }
        }
    }

    pub fn is_carousel(self) -> bool {
        self == LayoutMode::Carousel
    }

    pub fn columns(self) -> usize {
        match self {
            LayoutMode::Carousel => 1,
            LayoutMode::Grid { columns } => columns.max(1),
        }
    }

    /// First grid row drawn so that the focused slot is on screen
    pub fn first_visible_row(self, focus: usize, rows_per_screen: usize) -> usize {
        let focus_row = focus / self.columns();
        focus_row.saturating_sub(rows_per_screen.saturating_sub(1))
    }

    /// Slots close enough to the viewport for lazy media to start loading.
    ///
    /// Carousel: the focused slot and its neighbours. Grid: the visible rows
    /// plus one row below.
    pub fn near_viewport(self, focus: usize, total: usize, rows_per_screen: usize) -> Range<usize> {
        let range = match self {
            LayoutMode::Carousel => focus.saturating_sub(1)..focus + 2,
            LayoutMode::Grid { columns } => {
                let first_row = self.first_visible_row(focus, rows_per_screen);
                let columns = columns.max(1);
                first_row * columns..(first_row + rows_per_screen + 1) * columns
            }
        };
        range.start.min(total)..range.end.min(total)
    }
}
