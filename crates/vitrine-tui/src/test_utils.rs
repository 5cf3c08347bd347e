//! Test utilities for TUI rendering verification
//!
//! Helpers for testing widgets and full-screen rendering with ratatui's
//! `TestBackend`.

use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::widgets::Widget;
use ratatui::{Frame, Terminal};

use vitrine_app::config::Settings;
use vitrine_app::{AppState, Message};
use vitrine_core::{Catalogue, Category, CategoryId, CraftParams, MediaRef, Product, ProductId};

/// Standard test terminal size (grid with two columns)
pub const TEST_WIDTH: u16 = 100;
pub const TEST_HEIGHT: u16 = 30;

/// Narrow terminal (carousel)
pub const COMPACT_WIDTH: u16 = 40;
pub const COMPACT_HEIGHT: u16 = 24;

/// Wrapper around a `TestBackend` terminal.
pub struct TestTerminal {
    pub terminal: Terminal<TestBackend>,
}

impl TestTerminal {
    pub fn new() -> Self {
        Self::with_size(TEST_WIDTH, TEST_HEIGHT)
    }

    pub fn compact() -> Self {
        Self::with_size(COMPACT_WIDTH, COMPACT_HEIGHT)
    }

    pub fn with_size(width: u16, height: u16) -> Self {
        let backend = TestBackend::new(width, height);
        let terminal = Terminal::new(backend).expect("Failed to create test terminal");
        Self { terminal }
    }

    /// Get the full terminal area
    pub fn area(&self) -> Rect {
        let size = self.terminal.size().expect("Failed to get terminal size");
        Rect::new(0, 0, size.width, size.height)
    }

    /// Render a widget to the terminal
    pub fn render_widget<W: Widget>(&mut self, widget: W, area: Rect) {
        self.terminal
            .draw(|frame| frame.render_widget(widget, area))
            .expect("Failed to render widget");
    }

    /// Draw a full frame, e.g. with `render::view`
    pub fn draw_with<F>(&mut self, f: F)
    where
        F: FnOnce(&mut Frame),
    {
        self.terminal.draw(f).expect("Failed to draw frame");
    }

    pub fn buffer(&self) -> &Buffer {
        self.terminal.backend().buffer()
    }

    /// Check if the buffer contains a string anywhere
    pub fn buffer_contains(&self, text: &str) -> bool {
        buffer_to_string(self.buffer()).contains(text)
    }

    /// Check if a specific line contains text
    pub fn line_contains(&self, line: u16, text: &str) -> bool {
        get_line_content(self.buffer(), line).contains(text)
    }

    pub fn cell_at(&self, x: u16, y: u16) -> Option<&str> {
        let buffer = self.buffer();
        if x < buffer.area.width && y < buffer.area.height {
            Some(buffer[(x, y)].symbol())
        } else {
            None
        }
    }

    /// Get all content as a string (for debugging)
    pub fn content(&self) -> String {
        buffer_to_string(self.buffer())
    }
}

impl Default for TestTerminal {
    fn default() -> Self {
        Self::new()
    }
}

fn buffer_to_string(buffer: &Buffer) -> String {
    let mut result = String::new();
    for y in 0..buffer.area.height {
        for x in 0..buffer.area.width {
            result.push_str(buffer[(x, y)].symbol());
        }
        result.push('\n');
    }
    result
}

fn get_line_content(buffer: &Buffer, line: u16) -> String {
    let mut result = String::new();
    if line < buffer.area.height {
        for x in 0..buffer.area.width {
            result.push_str(buffer[(x, line)].symbol());
        }
    }
    result
}

// ─────────────────────────────────────────────────────────────────────────────
// Gallery fixtures
// ─────────────────────────────────────────────────────────────────────────────

pub fn test_product(id: &str, category: &str, media: &str) -> Product {
    Product {
        id: ProductId::new(id),
        archive_id: format!("NO.{id}"),
        code_name: format!("Code {id}"),
        title: format!("Title {id}"),
        category: CategoryId::new(category),
        tags: vec!["amber".into(), "resin".into(), "hidden".into()],
        media: MediaRef::new(media),
        craft: CraftParams {
            techniques: vec!["oil pour".into(), "hand polish".into()],
            materials: Some("acrylic".into()),
            size: Some("80 x 80 mm".into()),
        },
    }
}

/// Categories all/shaker/stand/future; three shakers and one stand (`s1` is motion media)
pub fn test_catalogue() -> Catalogue {
    let categories = [
        ("all", "All"),
        ("shaker", "Shakers"),
        ("stand", "Stands"),
        ("future", "Soon"),
    ]
    .into_iter()
    .map(|(id, label)| Category {
        id: CategoryId::new(id),
        label: label.into(),
    })
    .collect();

    Catalogue::new(
        categories,
        vec![
            test_product("s1", "shaker", "media/s1.mp4"),
            test_product("s2", "shaker", "media/s2.jpg"),
            test_product("s3", "shaker", "media/s3.png"),
            test_product("t1", "stand", "media/t1.jpg"),
        ],
    )
    .expect("fixture catalogue is valid")
}

/// Gallery state sized to `width` x `height`
pub fn create_test_state(width: u16, height: u16) -> AppState {
    let mut state = AppState::new(test_catalogue(), Settings::default());
    vitrine_app::handler::update(&mut state, Message::Resize { width, height });
    state
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terminal_creation() {
        let term = TestTerminal::new();
        assert_eq!(term.area().width, TEST_WIDTH);
        assert_eq!(term.area().height, TEST_HEIGHT);
    }

    #[test]
    fn test_compact_terminal() {
        let term = TestTerminal::compact();
        assert_eq!(term.area(), Rect::new(0, 0, COMPACT_WIDTH, COMPACT_HEIGHT));
    }

    #[test]
    fn test_buffer_contains() {
        use ratatui::widgets::Paragraph;

        let mut term = TestTerminal::with_size(20, 5);
        term.render_widget(Paragraph::new("Hello World"), term.area());

        assert!(term.buffer_contains("Hello World"));
        assert!(!term.buffer_contains("Goodbye"));
        assert!(term.line_contains(0, "Hello"));
        assert_eq!(term.cell_at(0, 0), Some("H"));
        assert_eq!(term.cell_at(99, 0), None);
    }

    #[test]
    fn test_fixture_state_is_sized() {
        let state = create_test_state(COMPACT_WIDTH, COMPACT_HEIGHT);
        assert!(state.layout_mode().is_carousel());
        // 4 products + the placeholder under "all"
        assert_eq!(state.total_slots(), 5);
    }
}
