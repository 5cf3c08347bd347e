//! Category bar
//!
//! Brand title followed by one tab per declared category; the active tab is
//! highlighted.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::Widget,
};

use vitrine_core::{Category, CategoryId};

use crate::layout::TITLE;
use crate::theme::styles;

/// Header with the category filter controls
pub struct CategoryBar<'a> {
    categories: &'a [Category],
    active: &'a CategoryId,
    /// Absolute tab rects from `layout::category_tabs`
    tabs: &'a [Rect],
}

impl<'a> CategoryBar<'a> {
    pub fn new(categories: &'a [Category], active: &'a CategoryId, tabs: &'a [Rect]) -> Self {
        Self {
            categories,
            active,
            tabs,
        }
    }
}

impl Widget for CategoryBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(false);
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let title = Line::from(vec![Span::raw(" "), Span::styled(TITLE, styles::accent_bold())]);
        buf.set_line(inner.x, inner.y, &title, inner.width);

        for (category, rect) in self.categories.iter().zip(self.tabs) {
            if rect.is_empty() {
                continue;
            }
            let style = if &category.id == self.active {
                styles::focused_selected()
            } else {
                styles::text_secondary()
            };
            buf.set_stringn(
                rect.x,
                rect.y,
                format!(" {} ", category.label),
                usize::from(rect.width),
                style,
            );
        }
    }
}
