//! Card gesture handlers: press start / end / cancel and the long-press timer

use vitrine_core::prelude::*;
use vitrine_core::ProductId;

use crate::card::{PressToken, ReleaseOutcome, LONG_PRESS_THRESHOLD};
use crate::message::Message;
use crate::state::AppState;

use super::{UpdateAction, UpdateResult};

/// Pointer down / touch start on a card
pub fn handle_press_start(state: &mut AppState, product_id: ProductId) -> UpdateResult {
    if state.overlay.is_open() {
        debug!("Ignoring press on {} while the detail overlay is open", product_id);
        return UpdateResult::none();
    }
    if state.card(&product_id).is_none() {
        debug!("Ignoring press on unmounted card {}", product_id);
        return UpdateResult::none();
    }

    // A single pointer presses one card at a time
    let mut actions = cancel_active_presses(state, Some(&product_id));

    let token = state.allocate_press_token();
    let Some(card) = state.card_mut(&product_id) else {
        return UpdateResult::actions(actions);
    };
    let armed = card.press_start(token);

    if armed.replaced_pending {
        actions.push(UpdateAction::CancelPressTimer {
            product_id: product_id.clone(),
        });
    }
    trace!("Press armed on {} (token {})", product_id, token.value());
    actions.push(UpdateAction::SchedulePressTimer {
        product_id,
        token: armed.token,
        delay: LONG_PRESS_THRESHOLD,
    });

    UpdateResult::actions(actions)
}

/// Pointer up / touch end on a card
pub fn handle_press_end(state: &mut AppState, product_id: ProductId) -> UpdateResult {
    let Some(card) = state.card_mut(&product_id) else {
        return UpdateResult::none();
    };

    match card.press_end() {
        ReleaseOutcome::Tap => {
            debug!("Tap on {}", product_id);
            UpdateResult::action(UpdateAction::CancelPressTimer {
                product_id: product_id.clone(),
            })
            .with_message(Message::SelectProduct { product_id })
        }
        ReleaseOutcome::PreviewEnded => {
            debug!("Full-detail preview of {} ended", product_id);
            // The timer may not have fired yet when the release crossed the threshold
            UpdateResult::action(UpdateAction::CancelPressTimer { product_id })
        }
        ReleaseOutcome::Ignored => UpdateResult::none(),
    }
}

/// Pointer left the card or the touch moved
pub fn handle_press_cancel(state: &mut AppState, product_id: ProductId) -> UpdateResult {
    let Some(card) = state.card_mut(&product_id) else {
        return UpdateResult::none();
    };

    match card.press_cancel() {
        Some(_) => {
            debug!("Press on {} cancelled", product_id);
            UpdateResult::action(UpdateAction::CancelPressTimer { product_id })
        }
        None => UpdateResult::none(),
    }
}

/// The long-press timer armed with `token` elapsed
pub fn handle_timer_fired(
    state: &mut AppState,
    product_id: ProductId,
    token: PressToken,
) -> UpdateResult {
    match state.card_mut(&product_id).map(|card| card.timer_fired(token)) {
        Some(true) => debug!("Full-detail preview of {}", product_id),
        Some(false) => trace!("Stale press timer {} for {}", token.value(), product_id),
        None => trace!("Press timer for unmounted card {}", product_id),
    }
    UpdateResult::none()
}

/// Keyboard tap on the focused card
pub fn handle_activate_focused(state: &mut AppState) -> UpdateResult {
    if state.overlay.is_open() {
        return UpdateResult::none();
    }
    match state.focused_product_id() {
        Some(product_id) => UpdateResult::message(Message::SelectProduct { product_id }),
        None => UpdateResult::none(),
    }
}

/// Keyboard press toggle: the first toggle presses, the second releases
pub fn handle_toggle_press_focused(state: &mut AppState) -> UpdateResult {
    let Some(product_id) = state.focused_product_id() else {
        return UpdateResult::none();
    };
    let pressed = state
        .card(&product_id)
        .map(|card| card.is_pressed())
        .unwrap_or(false);

    if pressed {
        UpdateResult::message(Message::PressEnd { product_id })
    } else {
        UpdateResult::message(Message::PressStart { product_id })
    }
}

/// Cancel every press in progress (except on `keep`), returning the timer
/// cancellations this requires
pub(crate) fn cancel_active_presses(
    state: &mut AppState,
    keep: Option<&ProductId>,
) -> Vec<UpdateAction> {
    let mut actions = Vec::new();
    for (id, card) in state.cards.iter_mut() {
        if Some(id) == keep || !card.is_pressed() {
            continue;
        }
        if card.press_cancel().is_some() {
            actions.push(UpdateAction::CancelPressTimer {
                product_id: id.clone(),
            });
        }
    }
    actions
}
