//! Handler module - TEA update function and event handlers
//!
//! Organized into submodules:
//! - `update`: Main update() function and message dispatch
//! - `keys`: Key event handlers (gallery vs detail overlay)
//! - `gesture`: Card press / release / cancel / timer handlers
//! - `navigation`: Category selection, focus, carousel scroll, resize
//! - `media`: Media load requests and ready signals
//! - `overlay`: Detail overlay and order hand-off

pub(crate) mod gesture;
pub(crate) mod keys;
pub(crate) mod media;
pub(crate) mod navigation;
pub(crate) mod overlay;
pub(crate) mod update;


use std::time::Duration;

use vitrine_core::{MediaRef, Product, ProductId};

use crate::card::PressToken;
use crate::message::{MediaTarget, Message};
use crate::state::AppState;

// Re-export main entry point
pub use update::update;

#[cfg(test)]
pub(crate) use keys::handle_key;

/// Actions that the event loop should perform after update
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateAction {
    /// Arm the long-press timer of a card. Replaces any timer already armed
    /// for the same card.
    SchedulePressTimer {
        product_id: ProductId,
        token: PressToken,
        delay: Duration,
    },

    /// Abort the long-press timer of a card, if one is running
    CancelPressTimer { product_id: ProductId },

    /// Resolve a media reference in the background; success is reported as
    /// `Message::MediaLoaded { target }`
    ResolveMedia { target: MediaTarget, media: MediaRef },

    /// Hand a product to the order context
    SubmitOrder { product: Box<Product> },
}

/// Result of processing a message
#[derive(Debug, Default)]
pub struct UpdateResult {
    /// Optional follow-up message to process
    pub message: Option<Message>,
    /// Actions for the event loop to perform, in order
    pub actions: Vec<UpdateAction>,
}

impl UpdateResult {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn message(msg: Message) -> Self {
        Self {
            message: Some(msg),
            actions: Vec::new(),
        }
    }

    pub fn action(action: UpdateAction) -> Self {
        Self::actions(vec![action])
    }

    pub fn actions(actions: Vec<UpdateAction>) -> Self {
        Self {
            message: None,
            actions,
        }
    }

    /// Attach a follow-up message
    pub fn with_message(mut self, msg: Message) -> Self {
        self.message = Some(msg);
        self
    }
}

/// Actions needed right after the gallery is created: media requests for the
/// cards mounted by the initial category
pub fn startup(state: &mut AppState) -> UpdateResult {
    UpdateResult::actions(media::request_media(state))
}
