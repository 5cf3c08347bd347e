//! Icon set for the gallery.
//!
//! `IconSet` resolves glyphs at runtime from the configured `IconMode`.

use vitrine_app::config::IconMode;
use vitrine_core::MediaKind;

const SPINNER_UNICODE: [&str; 4] = ["\u{25d0}", "\u{25d3}", "\u{25d1}", "\u{25d2}"]; // ◐◓◑◒
const SPINNER_NERD: [&str; 6] = [
    "\u{e3c8}", "\u{e3c9}", "\u{e3ca}", "\u{e3cb}", "\u{e3cc}", "\u{e3cd}",
];

/// Runtime icon resolver.
#[derive(Debug, Clone, Copy)]
pub struct IconSet {
    mode: IconMode,
}

impl IconSet {
    pub fn new(mode: IconMode) -> Self {
        Self { mode }
    }

    /// Loading spinner frame for the given animation tick
    pub fn spinner(&self, frame: u64) -> &'static str {
        let frames: &[&'static str] = match self.mode {
            IconMode::NerdFonts => &SPINNER_NERD,
            IconMode::Unicode => &SPINNER_UNICODE,
        };
        frames[(frame % frames.len() as u64) as usize]
    }

    pub fn media(&self, kind: MediaKind) -> &'static str {
        match (self.mode, kind) {
            (IconMode::NerdFonts, MediaKind::Still) => "\u{f03e}", // nf-fa-image
            (IconMode::NerdFonts, MediaKind::Motion) => "\u{f03d}", // nf-fa-video_camera
            (IconMode::Unicode, MediaKind::Still) => "\u{25a3}",   // ▣
            (IconMode::Unicode, MediaKind::Motion) => "\u{25b6}",  // ▶
        }
    }

    pub fn close(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f00d}", // nf-fa-close
            IconMode::Unicode => "\u{2717}",   // ✗
        }
    }

    pub fn cart(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f07a}", // nf-fa-shopping_cart
            IconMode::Unicode => "+",
        }
    }

    pub fn hourglass(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f254}", // nf-fa-hourglass
            IconMode::Unicode => "\u{29d7}",   // ⧗
        }
    }

    pub fn chevron_left(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f053}", // nf-fa-chevron_left
            IconMode::Unicode => "\u{2039}",   // ‹
        }
    }

    pub fn chevron_right(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f054}", // nf-fa-chevron_right
            IconMode::Unicode => "\u{203a}",   // ›
        }
    }

    pub fn dot(&self, active: bool) -> &'static str {
        if active {
            "\u{25cf}" // ●
        } else {
            "\u{25cb}" // ○
        }
    }

    pub fn expand(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f065}", // nf-fa-expand
            IconMode::Unicode => "\u{25c7}",   // ◇
        }
    }
}
