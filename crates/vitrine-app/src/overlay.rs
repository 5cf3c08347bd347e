//! Detail overlay (the Selected-Product slot)
//!
//! Only the gallery update function opens or closes the overlay; cards ask
//! for a selection by producing a `SelectProduct` message.

use vitrine_core::{MediaStatus, ProductId};

/// The overlay currently shown
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpenOverlay {
    pub product_id: ProductId,
    /// Load status of the overlay's own full-size media element
    pub media: MediaStatus,
}

/// At most one overlay; opening another one replaces it
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DetailOverlay {
    open: Option<OpenOverlay>,
}

impl DetailOverlay {
    pub fn is_open(&self) -> bool {
        self.open.is_some()
    }

    pub fn current(&self) -> Option<&OpenOverlay> {
        self.open.as_ref()
    }

    pub fn selected(&self) -> Option<&ProductId> {
        self.open.as_ref().map(|o| &o.product_id)
    }

    /// Show `product_id`. Returns the product that was replaced, if any.
    pub fn open(&mut self, product_id: ProductId) -> Option<ProductId> {
        self.open
            .replace(OpenOverlay {
                product_id,
                media: MediaStatus::Loading,
            })
            .map(|previous| previous.product_id)
    }

    /// Dismiss the overlay. Returns the product that was shown.
    pub fn close(&mut self) -> Option<ProductId> {
        self.open.take().map(|o| o.product_id)
    }

    /// Overlay media for `product_id` finished loading.
    ///
    /// Signals for a product that is no longer shown, or repeated signals,
    /// return `false`.
    pub fn mark_media_ready(&mut self, product_id: &ProductId) -> bool {
        match self.open.as_mut() {
            Some(open) if &open.product_id == product_id => open.media.mark_ready(),
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_and_close() {
        let mut overlay = DetailOverlay::default();
        assert!(!overlay.is_open());

        assert_eq!(overlay.open("p1".into()), None);
        assert_eq!(overlay.selected(), Some(&ProductId::new("p1")));

        assert_eq!(overlay.close(), Some(ProductId::new("p1")));
        assert!(!overlay.is_open());
        assert_eq!(overlay.close(), None);
    }

    #[test]
    fn test_second_open_replaces() {
        let mut overlay = DetailOverlay::default();
        overlay.open("p1".into());
        assert_eq!(overlay.open("p2".into()), Some(ProductId::new("p1")));
        assert_eq!(overlay.selected(), Some(&ProductId::new("p2")));
    }

    #[test]
    fn test_replacing_resets_media_status() {
        let mut overlay = DetailOverlay::default();
        overlay.open("p1".into());
        assert!(overlay.mark_media_ready(&"p1".into()));

        overlay.open("p2".into());
        assert_eq!(overlay.current().unwrap().media, MediaStatus::Loading);
    }

    #[test]
    fn test_stale_media_signal_ignored() {
        let mut overlay = DetailOverlay::default();
        overlay.open("p1".into());
        overlay.open("p2".into());

        assert!(!overlay.mark_media_ready(&"p1".into()));
        assert_eq!(overlay.current().unwrap().media, MediaStatus::Loading);
        assert!(overlay.mark_media_ready(&"p2".into()));
        assert!(!overlay.mark_media_ready(&"p2".into()));
    }
}
