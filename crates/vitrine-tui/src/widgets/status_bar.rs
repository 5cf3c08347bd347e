//! Status bar widget
//!
//! Layout mode, focused position, order count and key hints.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::Widget,
};

use vitrine_app::{AppState, LayoutMode};

use crate::theme::{icons::IconSet, styles};

pub struct StatusBar<'a> {
    state: &'a AppState,
    icons: IconSet,
}

impl<'a> StatusBar<'a> {
    pub fn new(state: &'a AppState, icons: IconSet) -> Self {
        Self { state, icons }
    }

    fn position(&self) -> Span<'static> {
        let mode = match self.state.layout_mode() {
            LayoutMode::Carousel => "carousel".to_string(),
            LayoutMode::Grid { columns } => format!("grid {columns}"),
        };
        let total = self.state.total_slots();
        let text = if total == 0 {
            format!(" {mode}")
        } else {
            format!(" {mode} \u{00b7} {}/{}", self.state.focus + 1, total)
        };
        Span::styled(text, styles::text_secondary())
    }

    fn orders(&self) -> Option<Span<'static>> {
        match self.state.orders_requested {
            0 => None,
            n => Some(Span::styled(
                format!("  {} {} in order", self.icons.cart(), n),
                styles::accent(),
            )),
        }
    }

    fn key_hints(&self) -> Line<'static> {
        let hints: &[(&str, &str)] = if self.state.overlay.is_open() {
            &[("o", "order"), ("Esc", "close")]
        } else if self.state.layout_mode().is_carousel() {
            &[
                ("\u{2190}\u{2192}", "browse"),
                ("Tab", "category"),
                ("\u{23ce}", "open"),
                ("Space", "preview"),
                ("q", "quit"),
            ]
        } else {
            &[
                ("arrows", "browse"),
                ("Tab", "category"),
                ("\u{23ce}", "open"),
                ("Space", "preview"),
                ("q", "quit"),
            ]
        };

        let spans: Vec<Span<'static>> = hints
            .iter()
            .flat_map(|(key, action)| {
                [
                    Span::styled(*key, styles::keybinding()),
                    Span::styled(format!(" {action}  "), styles::text_muted()),
                ]
            })
            .collect();
        Line::from(spans)
    }
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.is_empty() {
            return;
        }

        let mut left = vec![self.position()];
        left.extend(self.orders());
        let left = Line::from(left);
        let left_width = left.width() as u16;
        buf.set_line(area.x, area.y, &left, area.width);

        let hints = self.key_hints();
        let hints_width = hints.width() as u16;
        // Hints are dropped when they would collide with the left section
        if left_width + hints_width + 2 <= area.width {
            let x = area.right() - hints_width;
            buf.set_line(x, area.y, &hints, hints_width);
        }
    }
}
