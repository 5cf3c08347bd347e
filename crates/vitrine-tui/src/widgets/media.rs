//! Media area shared by cards and the detail overlay

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    widgets::Widget,
};
use unicode_width::UnicodeWidthStr;

use vitrine_core::{MediaKind, MediaStatus, RenderHints};

use crate::theme::{icons::IconSet, styles};

/// Human-readable rendering hints, e.g. `autoplay · muted · loop`
pub fn describe_hints(hints: RenderHints) -> String {
    let flags = [
        (hints.autoplay, "autoplay"),
        (hints.muted, "muted"),
        (hints.looping, "loop"),
        (hints.lazy, "lazy"),
    ];
    flags
        .iter()
        .filter(|(on, _)| *on)
        .map(|(_, name)| *name)
        .collect::<Vec<_>>()
        .join(" \u{00b7} ")
}

/// Placeholder for a media element: shaded area with a centred label.
///
/// Degraded shading and a spinner while loading; tinted by kind once ready.
pub struct MediaArea {
    kind: MediaKind,
    status: MediaStatus,
    icons: IconSet,
    frame: u64,
    full_frame: bool,
}

impl MediaArea {
    pub fn new(kind: MediaKind, status: MediaStatus, icons: IconSet, frame: u64) -> Self {
        Self {
            kind,
            status,
            icons,
            frame,
            full_frame: false,
        }
    }

    /// Uncropped framing of a sustained press
    pub fn full_frame(mut self, full_frame: bool) -> Self {
        self.full_frame = full_frame;
        self
    }

    fn fill(&self) -> char {
        match (self.status.is_ready(), self.full_frame) {
            (false, _) => '\u{2591}', // ░
            (true, false) => '\u{2592}', // ▒
            (true, true) => '\u{2593}', // ▓
        }
    }

    fn label(&self) -> (String, String) {
        if !self.status.is_ready() {
            return (format!("{} loading", self.icons.spinner(self.frame)), String::new());
        }
        let head = if self.full_frame {
            format!("{} full detail", self.icons.expand())
        } else {
            format!("{} {}", self.icons.media(self.kind), self.kind.label())
        };
        (head, describe_hints(self.kind.hints()))
    }
}

impl Widget for MediaArea {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.is_empty() {
            return;
        }
        let style = styles::media(self.kind, self.status.is_ready());
        let fill = self.fill();
        for position in area.positions() {
            buf[position].set_char(fill).set_style(style);
        }

        let (head, detail) = self.label();
        let middle = area.y + area.height / 2;
        let label_style = if self.status.is_ready() {
            styles::text_bold()
        } else {
            styles::text_muted()
        };
        centered_line(buf, area, middle, &head, label_style);
        if !detail.is_empty() && middle + 1 < area.bottom() {
            centered_line(buf, area, middle + 1, &detail, styles::text_secondary());
        }
    }
}

fn centered_line(buf: &mut Buffer, area: Rect, y: u16, text: &str, style: Style) {
    let padded = format!(" {text} ");
    let width = u16::try_from(padded.width()).unwrap_or(u16::MAX).min(area.width);
    let x = area.x + (area.width - width) / 2;
    buf.set_stringn(x, y, padded, usize::from(width), style);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;
    use vitrine_app::config::IconMode;

    fn icons() -> IconSet {
        IconSet::new(IconMode::Unicode)
    }

    #[test]
    fn test_describe_hints() {
        assert_eq!(
            describe_hints(MediaKind::Motion.hints()),
            "autoplay \u{00b7} muted \u{00b7} loop"
        );
        assert_eq!(describe_hints(MediaKind::Still.hints()), "lazy");
    }

    #[test]
    fn test_loading_shows_spinner() {
        let mut term = TestTerminal::with_size(30, 5);
        term.render_widget(
            MediaArea::new(MediaKind::Still, MediaStatus::Loading, icons(), 0),
            term.area(),
        );

        assert!(term.buffer_contains("loading"));
        assert!(term.buffer_contains(icons().spinner(0)));
        assert_eq!(term.cell_at(0, 0), Some("\u{2591}"));
    }

    #[test]
    fn test_ready_shows_kind_and_hints() {
        let mut term = TestTerminal::with_size(40, 5);
        term.render_widget(
            MediaArea::new(MediaKind::Motion, MediaStatus::Ready, icons(), 0),
            term.area(),
        );

        assert!(term.buffer_contains("motion"));
        assert!(term.buffer_contains("autoplay"));
        assert!(!term.buffer_contains("loading"));
    }

    #[test]
    fn test_full_frame_label() {
        let mut term = TestTerminal::with_size(40, 5);
        term.render_widget(
            MediaArea::new(MediaKind::Still, MediaStatus::Ready, icons(), 0).full_frame(true),
            term.area(),
        );

        assert!(term.buffer_contains("full detail"));
        assert_eq!(term.cell_at(0, 0), Some("\u{2593}"));
    }
}
