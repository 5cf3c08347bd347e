//! "Coming soon" card appended after the real items under `all` and `future`

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::theme::{icons::IconSet, styles};

pub struct PlaceholderCard {
    focused: bool,
    icons: IconSet,
}

impl PlaceholderCard {
    pub fn new(icons: IconSet) -> Self {
        Self {
            focused: false,
            icons,
        }
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }
}

impl Widget for PlaceholderCard {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(self.focused);
        let inner = block.inner(area);
        block.render(area, buf);
        if inner.is_empty() {
            return;
        }

        let lines = vec![
            Line::from(vec![
                Span::styled(self.icons.hourglass(), styles::accent()),
                Span::styled(" Coming soon", styles::text_bold()),
            ]),
            Line::from(Span::styled(
                "New pieces are on the workbench",
                styles::text_muted(),
            )),
        ];
        let top = inner.height.saturating_sub(2) / 2;
        let text_area = Rect::new(inner.x, inner.y + top, inner.width, inner.height - top);
        Paragraph::new(lines).centered().render(text_area, buf);
    }
}
