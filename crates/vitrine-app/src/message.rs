//! Message types for the application (TEA pattern)

use vitrine_core::{CategoryId, ProductId};

use crate::card::PressToken;
use crate::input_key::InputKey;

/// Which media element finished loading
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum MediaTarget {
    /// The ambient media of a gallery card
    Card(ProductId),
    /// The full-size media of the detail overlay showing this product
    Overlay(ProductId),
}

impl MediaTarget {
    pub fn product_id(&self) -> &ProductId {
        match self {
            MediaTarget::Card(id) | MediaTarget::Overlay(id) => id,
        }
    }
}

/// All possible messages/actions in the application
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    /// Keyboard event from the frontend
    Key(InputKey),

    /// Tick event for periodic updates (spinner animation)
    Tick,

    /// Quit the application (q, Ctrl+C, signal handler)
    Quit,

    /// Viewport size changed
    Resize { width: u16, height: u16 },

    // ─────────────────────────────────────────────────────────
    // Category Filter
    // ─────────────────────────────────────────────────────────
    /// A category control was chosen
    SelectCategory { id: CategoryId },
    /// Select the next category control (wraps)
    NextCategory,
    /// Select the previous category control (wraps)
    PreviousCategory,

    // ─────────────────────────────────────────────────────────
    // Carousel / Grid Navigation
    // ─────────────────────────────────────────────────────────
    /// The carousel's scroll container scrolled by `delta` slots
    CarouselScrolled { delta: i32 },
    /// Move focus by `delta` slots within the grid
    MoveFocus { delta: i32 },
    /// Focus a slot directly (pointer down on a slot)
    FocusSlot { index: usize },

    // ─────────────────────────────────────────────────────────
    // Card Gestures
    // ─────────────────────────────────────────────────────────
    /// Pointer down / touch start on a card
    PressStart { product_id: ProductId },
    /// Pointer up / touch end on a card
    PressEnd { product_id: ProductId },
    /// Pointer left the card / touch moved
    PressCancel { product_id: ProductId },
    /// The long-press timer armed with `token` elapsed
    PressTimerFired {
        product_id: ProductId,
        token: PressToken,
    },
    /// Keyboard tap on the focused card (Enter)
    ActivateFocused,
    /// Keyboard press toggle on the focused card (Space)
    TogglePressFocused,

    // ─────────────────────────────────────────────────────────
    // Media
    // ─────────────────────────────────────────────────────────
    /// A media element finished loading
    MediaLoaded { target: MediaTarget },

    // ─────────────────────────────────────────────────────────
    // Detail Overlay
    // ─────────────────────────────────────────────────────────
    /// Open the detail overlay for a product (replaces an open one)
    SelectProduct { product_id: ProductId },
    /// Dismiss the detail overlay
    CloseDetail,
    /// Hand the product shown in the overlay to the order context
    AddToOrder,
}
