//! Modal helpers: centering, background dimming and drop shadow.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::{Clear, Widget};

use crate::theme::palette;

/// Center a `width` x `height` rect in `area`, clamped to the area.
///
/// ```
/// use ratatui::layout::Rect;
/// use vitrine_tui::widgets::modal_overlay::centered_rect;
///
/// let modal = centered_rect(40, 10, Rect::new(0, 0, 80, 24));
/// assert_eq!(modal, Rect::new(20, 7, 40, 10));
/// ```
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let w = width.min(area.width);
    let h = height.min(area.height);
    Rect::new(
        area.x + (area.width - w) / 2,
        area.y + (area.height - h) / 2,
        w,
        h,
    )
}

/// Mute everything already drawn in `area` so the modal stands out
pub fn dim_background(buf: &mut Buffer, area: Rect) {
    let dim = Style::default()
        .fg(palette::TEXT_MUTED)
        .bg(palette::DEEPEST_BG);
    let area = area.intersection(buf.area);
    for position in area.positions() {
        buf[position].set_style(dim);
    }
}

/// One-cell shadow along the right and bottom edges of `modal`
pub fn render_shadow(buf: &mut Buffer, modal: Rect) {
    let shadow = Style::default().bg(palette::SHADOW).fg(palette::SHADOW);
    let right = Rect::new(modal.right(), modal.y + 1, 1, modal.height);
    let bottom = Rect::new(modal.x + 1, modal.bottom(), modal.width, 1);

    for edge in [right, bottom] {
        for position in edge.intersection(buf.area).positions() {
            buf[position].set_char(' ').set_style(shadow);
        }
    }
}

/// Clear `area` and prepare it for modal content
pub fn clear_area(buf: &mut Buffer, area: Rect) {
    Clear.render(area, buf);
}
