//! Main update function - handles state transitions (TEA pattern)

use crate::message::Message;
use crate::state::{AppPhase, AppState};
use vitrine_core::prelude::*;

use super::{gesture, keys::handle_key, media, navigation, overlay, UpdateResult};

/// Process a message and update state
/// Returns optional follow-up message and actions
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::Quit => {
            info!("Quit requested");
            state.phase = AppPhase::Quitting;
            UpdateResult::none()
        }

        Message::Key(key) => {
            if let Some(msg) = handle_key(state, key) {
                UpdateResult::message(msg)
            } else {
                UpdateResult::none()
            }
        }

        Message::Tick => {
            state.animation_frame = state.animation_frame.wrapping_add(1);
            UpdateResult::none()
        }

        Message::Resize { width, height } => navigation::handle_resize(state, width, height),

        // ─────────────────────────────────────────────────────────
        // Category Filter
        // ─────────────────────────────────────────────────────────
        Message::SelectCategory { id } => navigation::handle_select_category(state, id),
        Message::NextCategory => navigation::handle_cycle_category(state, 1),
        Message::PreviousCategory => navigation::handle_cycle_category(state, -1),

        // ─────────────────────────────────────────────────────────
        // Carousel / Grid Navigation
        // ─────────────────────────────────────────────────────────
        Message::CarouselScrolled { delta } => navigation::handle_carousel_scrolled(state, delta),
        Message::MoveFocus { delta } => navigation::handle_move_focus(state, delta),
        Message::FocusSlot { index } => navigation::handle_focus_slot(state, index),

        // ─────────────────────────────────────────────────────────
        // Card Gestures
        // ─────────────────────────────────────────────────────────
        Message::PressStart { product_id } => gesture::handle_press_start(state, product_id),
        Message::PressEnd { product_id } => gesture::handle_press_end(state, product_id),
        Message::PressCancel { product_id } => gesture::handle_press_cancel(state, product_id),
        Message::PressTimerFired { product_id, token } => {
            gesture::handle_timer_fired(state, product_id, token)
        }
        Message::ActivateFocused => gesture::handle_activate_focused(state),
        Message::TogglePressFocused => gesture::handle_toggle_press_focused(state),

        // ─────────────────────────────────────────────────────────
        // Media
        // ─────────────────────────────────────────────────────────
        Message::MediaLoaded { target } => media::handle_media_loaded(state, target),

        // ─────────────────────────────────────────────────────────
        // Detail Overlay
        // ─────────────────────────────────────────────────────────
        Message::SelectProduct { product_id } => overlay::handle_select_product(state, product_id),
        Message::CloseDetail => overlay::handle_close_detail(state),
        Message::AddToOrder => overlay::handle_add_to_order(state),
    }
}
