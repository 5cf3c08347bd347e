//! Detail overlay handlers and the order hand-off

use vitrine_core::prelude::*;
use vitrine_core::ProductId;

use crate::message::MediaTarget;
use crate::state::AppState;

use super::{gesture::cancel_active_presses, UpdateAction, UpdateResult};

/// Open the detail overlay for `product_id`, replacing any open one
pub fn handle_select_product(state: &mut AppState, product_id: ProductId) -> UpdateResult {
    let Some(media) = state.product(&product_id).map(|p| p.media.clone()) else {
        warn!("Ignoring selection of unknown product {}", product_id);
        return UpdateResult::none();
    };

    // Cards are inert behind the overlay
    let mut actions = cancel_active_presses(state, None);

    match state.overlay.open(product_id.clone()) {
        Some(previous) => info!("Detail overlay {} replaced by {}", previous, product_id),
        None => info!("Detail overlay opened for {}", product_id),
    }

    actions.push(UpdateAction::ResolveMedia {
        target: MediaTarget::Overlay(product_id),
        media,
    });
    UpdateResult::actions(actions)
}

/// Dismiss the detail overlay
pub fn handle_close_detail(state: &mut AppState) -> UpdateResult {
    if let Some(product_id) = state.overlay.close() {
        info!("Detail overlay closed ({})", product_id);
    }
    UpdateResult::none()
}

/// Hand the product shown in the overlay to the order context
pub fn handle_add_to_order(state: &mut AppState) -> UpdateResult {
    let Some(product) = state.selected_product().cloned() else {
        return UpdateResult::none();
    };

    state.orders_requested += 1;
    UpdateResult::action(UpdateAction::SubmitOrder {
        product: Box::new(product),
    })
}
