//! Message processing
//!
//! Runs the TEA update function and dispatches the resulting actions,
//! following chained messages until the update settles.

use tokio::sync::mpsc;

use crate::actions::{handle_action, PressTimers, Services};
use crate::handler::{self, UpdateResult};
use crate::media_source::MediaSource;
use crate::message::Message;
use crate::state::AppState;

/// Process a message through the TEA update function
pub fn process_message<S>(
    state: &mut AppState,
    message: Message,
    msg_tx: &mpsc::Sender<Message>,
    timers: &mut PressTimers,
    services: &Services<S>,
) where
    S: MediaSource + Send + Sync + 'static,
{
    let mut msg = Some(message);
    while let Some(m) = msg {
        let result = handler::update(state, m);
        msg = dispatch(result, msg_tx, timers, services);
    }
}

/// Dispatch the actions of `result`, returning its follow-up message
pub fn dispatch<S>(
    result: UpdateResult,
    msg_tx: &mpsc::Sender<Message>,
    timers: &mut PressTimers,
    services: &Services<S>,
) -> Option<Message>
where
    S: MediaSource + Send + Sync + 'static,
{
    for action in result.actions {
        handle_action(action, msg_tx, timers, services);
    }
    result.message
}
