//! One-shot "swipe to see more" affordance

use crate::viewport::LayoutMode;

/// Swipe hint lifecycle. `Dismissed` is terminal for the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SwipeHint {
    #[default]
    Visible,
    Dismissed,
}

impl SwipeHint {
    pub fn is_visible(self) -> bool {
        self == SwipeHint::Visible
    }

    /// A scroll was observed on the carousel container.
    ///
    /// Returns `true` only for the scroll that dismissed the hint.
    pub fn on_scroll(&mut self) -> bool {
        let was_visible = self.is_visible();
        *self = SwipeHint::Dismissed;
        was_visible
    }

    /// Whether the hint is drawn: still visible, in carousel mode, and there
    /// is something to swipe to.
    pub fn should_render(self, total_slots: usize, mode: LayoutMode) -> bool {
        self.is_visible() && total_slots > 1 && mode.is_carousel()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_visible() {
        assert!(SwipeHint::default().is_visible());
    }

    #[test]
    fn test_first_scroll_dismisses() {
        let mut hint = SwipeHint::default();
        assert!(hint.on_scroll());
        assert!(!hint.is_visible());
    }

    #[test]
    fn test_stays_dismissed() {
        let mut hint = SwipeHint::default();
        hint.on_scroll();
        assert!(!hint.on_scroll());
        assert!(!hint.on_scroll());
        assert_eq!(hint, SwipeHint::Dismissed);
    }

    #[test]
    fn test_render_needs_more_than_one_slot() {
        let hint = SwipeHint::default();
        assert!(!hint.should_render(0, LayoutMode::Carousel));
        assert!(!hint.should_render(1, LayoutMode::Carousel));
        assert!(hint.should_render(2, LayoutMode::Carousel));
    }

    #[test]
    fn test_render_only_in_carousel() {
        let hint = SwipeHint::default();
        assert!(!hint.should_render(5, LayoutMode::Grid { columns: 2 }));
    }

    #[test]
    fn test_dismissed_never_renders() {
        let mut hint = SwipeHint::default();
        hint.on_scroll();
        assert!(!hint.should_render(5, LayoutMode::Carousel));
    }
}
