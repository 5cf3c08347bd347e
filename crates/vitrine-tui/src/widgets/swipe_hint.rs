//! Carousel affordances: the one-shot swipe hint and the page dots

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::theme::{icons::IconSet, styles};

/// "Swipe for more" hint, shown until the first carousel scroll
pub struct SwipeHint {
    icons: IconSet,
}

impl SwipeHint {
    pub fn new(icons: IconSet) -> Self {
        Self { icons }
    }
}

impl Widget for SwipeHint {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let line = Line::from(vec![
            Span::styled(self.icons.chevron_left(), styles::accent()),
            Span::styled(" swipe for more ", styles::text_secondary()),
            Span::styled(self.icons.chevron_right(), styles::accent()),
        ]);
        Paragraph::new(line).centered().render(area, buf);
    }
}

/// Page indicator for the carousel
pub struct PagerDots {
    total: usize,
    focus: usize,
    icons: IconSet,
}

impl PagerDots {
    pub fn new(total: usize, focus: usize, icons: IconSet) -> Self {
        Self {
            total,
            focus,
            icons,
        }
    }
}

impl Widget for PagerDots {
    fn render(self, area: Rect, buf: &mut Buffer) {
        // One dot plus a gap per page; fall back to a counter when too narrow
        let line = if self.total * 2 <= usize::from(area.width) {
            let spans: Vec<Span> = (0..self.total)
                .map(|i| {
                    let active = i == self.focus;
                    let style = if active {
                        styles::accent()
                    } else {
                        styles::text_muted()
                    };
                    Span::styled(format!("{} ", self.icons.dot(active)), style)
                })
                .collect();
            Line::from(spans)
        } else {
            Line::from(Span::styled(
                format!("{} / {}", self.focus + 1, self.total),
                styles::text_secondary(),
            ))
        };
        Paragraph::new(line).centered().render(area, buf);
    }
}
