//! Category selection, focus movement, carousel scrolling and resize

use vitrine_core::prelude::*;
use vitrine_core::CategoryId;

use crate::message::Message;
use crate::state::AppState;
use crate::viewport::Viewport;

use super::{gesture::cancel_active_presses, media::request_media, UpdateAction, UpdateResult};

/// Switch the active category.
///
/// Undeclared ids are ignored so the active category is always one of the
/// catalogue's. Cards that leave the visible set are unmounted and their
/// pending timers cancelled; focus goes back to the first slot.
pub fn handle_select_category(state: &mut AppState, id: CategoryId) -> UpdateResult {
    if !state.catalogue.has_category(&id) {
        warn!("Ignoring undeclared category '{}'", id);
        return UpdateResult::none();
    }
    if state.active_category == id {
        return UpdateResult::none();
    }

    info!("Category {} -> {}", state.active_category, id);
    state.active_category = id;
    state.focus = 0;

    let mut actions: Vec<UpdateAction> = state
        .reconcile_cards()
        .into_iter()
        .map(|product_id| UpdateAction::CancelPressTimer { product_id })
        .collect();
    actions.extend(request_media(state));

    UpdateResult::actions(actions)
}

/// Select the category `step` controls away from the active one (wraps)
pub fn handle_cycle_category(state: &mut AppState, step: isize) -> UpdateResult {
    let count = state.catalogue.categories.len();
    if count == 0 {
        return UpdateResult::none();
    }
    let current = state.active_category_index() as isize;
    let next = (current + step).rem_euclid(count as isize) as usize;

    let id = state.catalogue.categories[next].id.clone();
    UpdateResult::message(Message::SelectCategory { id })
}

/// The carousel container scrolled by `delta` slots
pub fn handle_carousel_scrolled(state: &mut AppState, delta: i32) -> UpdateResult {
    if state.swipe_hint.on_scroll() {
        debug!("Swipe hint dismissed");
    }

    // A moving touch is never a press
    let mut actions = cancel_active_presses(state, None);
    move_focus(state, delta);
    actions.extend(request_media(state));

    UpdateResult::actions(actions)
}

/// Move focus by `delta` slots (grid navigation)
pub fn handle_move_focus(state: &mut AppState, delta: i32) -> UpdateResult {
    move_focus(state, delta);
    UpdateResult::actions(request_media(state))
}

/// Focus a slot directly
pub fn handle_focus_slot(state: &mut AppState, index: usize) -> UpdateResult {
    if index >= state.total_slots() {
        return UpdateResult::none();
    }
    state.focus = index;
    UpdateResult::actions(request_media(state))
}

/// The viewport changed size; the layout mode may have changed with it
pub fn handle_resize(state: &mut AppState, width: u16, height: u16) -> UpdateResult {
    let before = state.layout_mode();
    state.viewport = Viewport::new(width, height);
    let after = state.layout_mode();
    if before != after {
        debug!("Layout {:?} -> {:?} at {}x{}", before, after, width, height);
    }

    state.clamp_focus();
    UpdateResult::actions(request_media(state))
}

fn move_focus(state: &mut AppState, delta: i32) {
    let total = state.total_slots();
    if total == 0 {
        state.focus = 0;
        return;
    }
    let target = state.focus as i64 + i64::from(delta);
    state.focus = target.clamp(0, total as i64 - 1) as usize;
}
