//! Domain events emitted by the Engine for external consumers
//!
//! Events are broadcast after each message processing cycle via
//! `Engine::subscribe()`, so subscribers see a consistent view of state
//! changes.

use vitrine_core::{CategoryId, ProductId};

use crate::card::PreviewView;
use crate::message::MediaTarget;

/// Domain events emitted by the Engine for external consumers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineEvent {
    // ─────────────────────────────────────────────────────────
    // Gallery
    // ─────────────────────────────────────────────────────────
    /// The active category changed
    CategoryChanged { from: CategoryId, to: CategoryId },

    /// The swipe hint was dismissed (at most once per session)
    SwipeHintDismissed,

    /// A card switched between ambient and full-detail framing
    PreviewChanged {
        product_id: ProductId,
        view: PreviewView,
    },

    /// A media element became ready
    MediaReady { target: MediaTarget },

    // ─────────────────────────────────────────────────────────
    // Detail Overlay
    // ─────────────────────────────────────────────────────────
    /// The detail overlay opened, possibly replacing another product
    DetailOpened {
        product_id: ProductId,
        replaced: Option<ProductId>,
    },

    /// The detail overlay was dismissed
    DetailClosed { product_id: ProductId },

    /// A product was handed to the order context
    OrderRequested { product_id: ProductId },

    // ─────────────────────────────────────────────────────────
    // Lifecycle
    // ─────────────────────────────────────────────────────────
    /// Engine is shutting down
    Shutdown,
}

impl EngineEvent {
    /// Event type name, for logging and filtering
    pub fn event_type(&self) -> &'static str {
        match self {
            EngineEvent::CategoryChanged { .. } => "category_changed",
            EngineEvent::SwipeHintDismissed => "swipe_hint_dismissed",
            EngineEvent::PreviewChanged { .. } => "preview_changed",
            EngineEvent::MediaReady { .. } => "media_ready",
            EngineEvent::DetailOpened { .. } => "detail_opened",
            EngineEvent::DetailClosed { .. } => "detail_closed",
            EngineEvent::OrderRequested { .. } => "order_requested",
            EngineEvent::Shutdown => "shutdown",
        }
    }
}
