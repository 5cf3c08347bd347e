//! Screen layout and hit testing
//!
//! Geometry is computed from the gallery state alone so that rendering and
//! mouse hit testing always agree on where things are.

use ratatui::layout::{Constraint, Layout, Position, Rect};
use unicode_width::UnicodeWidthStr;

use vitrine_app::viewport::{CARD_HEIGHT, HEADER_HEIGHT, STATUS_HEIGHT};
use vitrine_app::{AppState, LayoutMode};
use vitrine_core::Category;

/// Brand text drawn before the category tabs
pub const TITLE: &str = "VITRINE";

/// Width of the "add to order" control in the detail overlay
pub const ORDER_BUTTON_WIDTH: u16 = 22;

const OVERLAY_MAX_WIDTH: u16 = 72;
const OVERLAY_MAX_HEIGHT: u16 = 22;

/// Screen areas for the main layout
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenAreas {
    /// Category bar (glass container)
    pub header: Rect,
    /// Cards, pager and swipe hint
    pub gallery: Rect,
    pub status: Rect,
}

/// Split the screen into header, gallery and status bar
pub fn create(area: Rect) -> ScreenAreas {
    let chunks = Layout::vertical([
        Constraint::Length(HEADER_HEIGHT),
        Constraint::Min(0),
        Constraint::Length(STATUS_HEIGHT),
    ])
    .split(area);

    ScreenAreas {
        header: chunks[0],
        gallery: chunks[1],
        status: chunks[2],
    }
}

/// Cell width of a category tab: the label padded by one space on each side
pub fn tab_width(category: &Category) -> u16 {
    u16::try_from(category.label.width())
        .unwrap_or(u16::MAX)
        .saturating_add(2)
}

/// Rects of the category tabs inside the header, in declaration order.
///
/// Tabs that do not fit get an empty rect so indices keep matching the
/// catalogue.
pub fn category_tabs(header: Rect, categories: &[Category]) -> Vec<Rect> {
    let row = header.y.saturating_add(1);
    let right = header.right().saturating_sub(1);
    // border + space + title + two spaces
    let mut x = header.x + 2 + TITLE.len() as u16 + 2;

    categories
        .iter()
        .map(|category| {
            let width = tab_width(category);
            if x.saturating_add(width) > right {
                x = right;
                return Rect::new(right, row, 0, 0);
            }
            let rect = Rect::new(x, row, width, 1);
            x = x.saturating_add(width + 1);
            rect
        })
        .collect()
}

/// One slot placed on screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlotRect {
    /// Index into `AppState::slots()`
    pub index: usize,
    pub rect: Rect,
}

/// Geometry of the gallery area
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GalleryAreas {
    pub slots: Vec<SlotRect>,
    /// Carousel page dots
    pub pager: Option<Rect>,
    /// Carousel swipe hint row
    pub hint: Option<Rect>,
}

/// Place the slots that are on screen.
///
/// Carousel: the focused slot fills the width, with the pager and hint rows
/// below it. Grid: rows of `columns` cards, scrolled so the focused slot is
/// visible.
pub fn gallery(area: Rect, mode: LayoutMode, focus: usize, total: usize) -> GalleryAreas {
    if total == 0 || area.is_empty() {
        return GalleryAreas::default();
    }

    match mode {
        LayoutMode::Carousel => {
            let card_height = CARD_HEIGHT.min(area.height);
            let card = Rect::new(
                area.x.saturating_add(1),
                area.y,
                area.width.saturating_sub(2),
                card_height,
            );
            let row_below = |offset: u16| {
                let y = area.y + card_height + offset;
                (y < area.bottom()).then(|| Rect::new(area.x, y, area.width, 1))
            };
            GalleryAreas {
                slots: vec![SlotRect {
                    index: focus.min(total - 1),
                    rect: card,
                }],
                pager: row_below(0),
                hint: row_below(1),
            }
        }
        LayoutMode::Grid { .. } => {
            let columns = mode.columns();
            let col_width = area.width / columns as u16;
            let rows = usize::from((area.height / CARD_HEIGHT).max(1));
            let first_row = mode.first_visible_row(focus, rows);

            let mut slots = Vec::new();
            for row in 0..rows {
                for col in 0..columns {
                    let index = (first_row + row) * columns + col;
                    if index >= total {
                        break;
                    }
                    let rect = Rect::new(
                        area.x + col as u16 * col_width,
                        area.y + row as u16 * CARD_HEIGHT,
                        col_width,
                        CARD_HEIGHT,
                    )
                    .intersection(area);
                    slots.push(SlotRect { index, rect });
                }
            }
            GalleryAreas {
                slots,
                pager: None,
                hint: None,
            }
        }
    }
}

/// Geometry of the open detail overlay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OverlayAreas {
    pub modal: Rect,
    /// Close control on the top border
    pub close: Rect,
    /// "Add to order" control on the last inner row
    pub order: Rect,
}

pub fn overlay(area: Rect) -> OverlayAreas {
    let modal = crate::widgets::modal_overlay::centered_rect(
        OVERLAY_MAX_WIDTH.min(area.width.saturating_sub(4)),
        OVERLAY_MAX_HEIGHT.min(area.height.saturating_sub(2)),
        area,
    );
    let close = Rect::new(modal.right().saturating_sub(5), modal.y, 3, 1);
    let order = Rect::new(
        modal.x + 2,
        modal.bottom().saturating_sub(2),
        ORDER_BUTTON_WIDTH.min(modal.width.saturating_sub(4)),
        1,
    );
    OverlayAreas {
        modal,
        close,
        order,
    }
}

/// Full-frame geometry derived from the state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GalleryLayout {
    pub screen: ScreenAreas,
    pub tabs: Vec<Rect>,
    pub gallery: GalleryAreas,
    pub overlay: Option<OverlayAreas>,
}

impl GalleryLayout {
    pub fn compute(area: Rect, state: &AppState) -> Self {
        let screen = create(area);
        Self {
            tabs: category_tabs(screen.header, &state.catalogue.categories),
            gallery: gallery(
                screen.gallery,
                state.layout_mode(),
                state.focus,
                state.total_slots(),
            ),
            overlay: state.overlay.is_open().then(|| overlay(area)),
            screen,
        }
    }

    /// What sits under the pointer
    pub fn hit_test(&self, column: u16, row: u16) -> HitTarget {
        let position = Position::new(column, row);

        if let Some(overlay) = &self.overlay {
            return if overlay.close.contains(position) {
                HitTarget::CloseDetail
            } else if overlay.order.contains(position) {
                HitTarget::AddToOrder
            } else {
                // The overlay is modal
                HitTarget::Nothing
            };
        }

        if let Some(index) = self.tabs.iter().position(|r| r.contains(position)) {
            return HitTarget::Category(index);
        }

        self.slot_at(position)
            .map(HitTarget::Slot)
            .unwrap_or(HitTarget::Nothing)
    }

    /// Rect of the slot at `index`, when it is on screen
    pub fn slot_rect(&self, index: usize) -> Option<Rect> {
        self.gallery
            .slots
            .iter()
            .find(|s| s.index == index)
            .map(|s| s.rect)
    }

    fn slot_at(&self, position: Position) -> Option<usize> {
        self.gallery
            .slots
            .iter()
            .find(|s| s.rect.contains(position))
            .map(|s| s.index)
    }
}

/// Result of mouse hit testing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitTarget {
    /// Category tab by declaration index
    Category(usize),
    /// Gallery slot by index
    Slot(usize),
    CloseDetail,
    AddToOrder,
    Nothing,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::create_test_state;
    use vitrine_core::CategoryId;

    #[test]
    fn test_create_layout() {
        let layout = create(Rect::new(0, 0, 80, 24));

        assert_eq!(layout.header.height, 3);
        assert_eq!(layout.gallery, Rect::new(0, 3, 80, 20));
        assert_eq!(layout.status, Rect::new(0, 23, 80, 1));
    }

    #[test]
    fn test_category_tabs_follow_title() {
        let categories = vec![
            Category {
                id: CategoryId::all(),
                label: "All".into(),
            },
            Category {
                id: CategoryId::new("shaker"),
                label: "Shakers".into(),
            },
        ];
        let tabs = category_tabs(Rect::new(0, 0, 80, 3), &categories);

        // "│ VITRINE  " is 11 cells
        assert_eq!(tabs[0], Rect::new(11, 1, 5, 1));
        assert_eq!(tabs[1], Rect::new(17, 1, 9, 1));
    }

    #[test]
    fn test_category_tabs_that_do_not_fit_are_empty() {
        let categories = vec![
            Category {
                id: CategoryId::all(),
                label: "All".into(),
            },
            Category {
                id: CategoryId::new("long"),
                label: "A very long category label".into(),
            },
        ];
        let tabs = category_tabs(Rect::new(0, 0, 24, 3), &categories);

        assert_eq!(tabs.len(), 2);
        assert!(!tabs[0].is_empty());
        assert!(tabs[1].is_empty());
    }

    #[test]
    fn test_carousel_places_focused_slot_only() {
        let areas = gallery(Rect::new(0, 3, 40, 20), LayoutMode::Carousel, 2, 5);

        assert_eq!(areas.slots.len(), 1);
        assert_eq!(areas.slots[0].index, 2);
        assert_eq!(areas.slots[0].rect, Rect::new(1, 3, 38, CARD_HEIGHT));
        assert_eq!(areas.pager, Some(Rect::new(0, 15, 40, 1)));
        assert_eq!(areas.hint, Some(Rect::new(0, 16, 40, 1)));
    }

    #[test]
    fn test_carousel_without_room_for_hint() {
        let areas = gallery(Rect::new(0, 3, 40, 12), LayoutMode::Carousel, 0, 3);
        assert_eq!(areas.pager, None);
        assert_eq!(areas.hint, None);
    }

    #[test]
    fn test_grid_places_rows() {
        // 2 columns, 24 rows -> 2 grid rows
        let areas = gallery(
            Rect::new(0, 3, 100, 24),
            LayoutMode::Grid { columns: 2 },
            0,
            5,
        );

        let indices: Vec<usize> = areas.slots.iter().map(|s| s.index).collect();
        assert_eq!(indices, vec![0, 1, 2, 3]);
        assert_eq!(areas.slots[1].rect, Rect::new(50, 3, 50, CARD_HEIGHT));
        assert_eq!(areas.slots[2].rect, Rect::new(0, 15, 50, CARD_HEIGHT));
    }

    #[test]
    fn test_grid_scrolls_to_focus() {
        let areas = gallery(
            Rect::new(0, 3, 100, 12),
            LayoutMode::Grid { columns: 2 },
            4,
            5,
        );

        let indices: Vec<usize> = areas.slots.iter().map(|s| s.index).collect();
        assert_eq!(indices, vec![4]);
    }

    #[test]
    fn test_empty_gallery_has_no_slots() {
        let areas = gallery(Rect::new(0, 3, 40, 20), LayoutMode::Carousel, 0, 0);
        assert!(areas.slots.is_empty());
        assert_eq!(areas.pager, None);
    }

    #[test]
    fn test_hit_test_maps_coordinates_to_slots() {
        let state = create_test_state(100, 30);
        let layout = GalleryLayout::compute(Rect::new(0, 0, 100, 30), &state);

        assert_eq!(layout.hit_test(10, 5), HitTarget::Slot(0));
        assert_eq!(layout.hit_test(60, 5), HitTarget::Slot(1));
        assert_eq!(layout.hit_test(60, 16), HitTarget::Slot(3));
        assert_eq!(layout.hit_test(10, 29), HitTarget::Nothing);
    }

    #[test]
    fn test_hit_test_category_tab() {
        let state = create_test_state(100, 30);
        let layout = GalleryLayout::compute(Rect::new(0, 0, 100, 30), &state);

        let tab = layout.tabs[1];
        assert_eq!(layout.hit_test(tab.x, tab.y), HitTarget::Category(1));
    }

    #[test]
    fn test_hit_test_overlay_is_modal() {
        let mut state = create_test_state(100, 30);
        state.overlay.open("s1".into());
        let layout = GalleryLayout::compute(Rect::new(0, 0, 100, 30), &state);
        let overlay = layout.overlay.unwrap();

        assert_eq!(
            layout.hit_test(overlay.close.x + 1, overlay.close.y),
            HitTarget::CloseDetail
        );
        assert_eq!(
            layout.hit_test(overlay.order.x, overlay.order.y),
            HitTarget::AddToOrder
        );
        // A card behind the overlay is not reachable
        assert_eq!(layout.hit_test(1, 4), HitTarget::Nothing);
    }
}
