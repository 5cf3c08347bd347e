//! Media load requests and ready signals

use vitrine_core::prelude::*;

use crate::message::MediaTarget;
use crate::state::AppState;

use super::{UpdateAction, UpdateResult};

/// Resolve requests for every mounted card whose media is now due
pub(crate) fn request_media(state: &mut AppState) -> Vec<UpdateAction> {
    state
        .take_media_to_request()
        .into_iter()
        .filter_map(|id| {
            let media = state.product(&id)?.media.clone();
            Some(UpdateAction::ResolveMedia {
                target: MediaTarget::Card(id),
                media,
            })
        })
        .collect()
}

/// A media element finished loading. Repeated or stale signals are no-ops.
pub fn handle_media_loaded(state: &mut AppState, target: MediaTarget) -> UpdateResult {
    let changed = match &target {
        MediaTarget::Card(id) => match state.card_mut(id) {
            Some(card) => card.mark_media_ready(),
            None => {
                trace!("Media loaded for unmounted card {}", id);
                false
            }
        },
        MediaTarget::Overlay(id) => state.overlay.mark_media_ready(id),
    };

    if changed {
        debug!("Media ready: {:?}", target);
    }
    UpdateResult::none()
}
