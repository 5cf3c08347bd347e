//! Action handlers: UpdateAction dispatch and background task spawning

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::Instant;
use tracing::{trace, warn};
use vitrine_core::{MediaRef, ProductId};

use crate::card::PressToken;
use crate::media_source::MediaSource;
use crate::message::{MediaTarget, Message};
use crate::order::OrderContext;
use crate::UpdateAction;

/// External collaborators the dispatcher hands work to
pub struct Services<S> {
    pub media: Arc<S>,
    pub orders: Arc<dyn OrderContext>,
}

impl<S> Services<S> {
    pub fn new(media: S, orders: Arc<dyn OrderContext>) -> Self {
        Self {
            media: Arc::new(media),
            orders,
        }
    }
}

impl<S> Clone for Services<S> {
    fn clone(&self) -> Self {
        Self {
            media: Arc::clone(&self.media),
            orders: Arc::clone(&self.orders),
        }
    }
}

/// Long-press timer tasks, at most one per card
#[derive(Debug, Default)]
pub struct PressTimers {
    handles: HashMap<ProductId, JoinHandle<()>>,
}

impl PressTimers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Arm a timer that sends `PressTimerFired` after `delay`.
    ///
    /// The deadline is taken now, not when the task first runs. A timer
    /// already armed for the same card is aborted.
    pub fn schedule(
        &mut self,
        product_id: ProductId,
        token: PressToken,
        delay: Duration,
        msg_tx: mpsc::Sender<Message>,
    ) {
        self.handles.retain(|_, handle| !handle.is_finished());
        if let Some(previous) = self.handles.remove(&product_id) {
            previous.abort();
        }

        let deadline = Instant::now() + delay;
        let id = product_id.clone();
        let handle = tokio::spawn(async move {
            tokio::time::sleep_until(deadline).await;
            if msg_tx
                .send(Message::PressTimerFired {
                    product_id: id,
                    token,
                })
                .await
                .is_err()
            {
                trace!("Press timer fired after the message loop closed");
            }
        });
        self.handles.insert(product_id, handle);
    }

    /// Abort the timer of `product_id`. Returns `true` if one was running.
    pub fn cancel(&mut self, product_id: &ProductId) -> bool {
        match self.handles.remove(product_id) {
            Some(handle) => {
                let running = !handle.is_finished();
                handle.abort();
                running
            }
            None => false,
        }
    }

    /// Abort every timer. Returns how many were still running.
    pub fn cancel_all(&mut self) -> usize {
        self.handles
            .drain()
            .map(|(_, handle)| {
                let running = !handle.is_finished();
                handle.abort();
                usize::from(running)
            })
            .sum()
    }

    /// Number of timers that have not fired yet
    pub fn pending_count(&self) -> usize {
        self.handles.values().filter(|h| !h.is_finished()).count()
    }

    pub fn is_pending(&self, product_id: &ProductId) -> bool {
        self.handles
            .get(product_id)
            .is_some_and(|h| !h.is_finished())
    }
}

/// Execute an action, spawning background work where needed
pub fn handle_action<S>(
    action: UpdateAction,
    msg_tx: &mpsc::Sender<Message>,
    timers: &mut PressTimers,
    services: &Services<S>,
) where
    S: MediaSource + Send + Sync + 'static,
{
    match action {
        UpdateAction::SchedulePressTimer {
            product_id,
            token,
            delay,
        } => {
            timers.schedule(product_id, token, delay, msg_tx.clone());
        }

        UpdateAction::CancelPressTimer { product_id } => {
            if timers.cancel(&product_id) {
                trace!("Cancelled press timer for {}", product_id);
            }
        }

        UpdateAction::ResolveMedia { target, media } => {
            spawn_media_resolution(target, media, Arc::clone(&services.media), msg_tx.clone());
        }

        UpdateAction::SubmitOrder { product } => {
            services.orders.add_product(&product);
        }
    }
}

fn spawn_media_resolution<S>(
    target: MediaTarget,
    media: MediaRef,
    source: Arc<S>,
    msg_tx: mpsc::Sender<Message>,
) where
    S: MediaSource + Send + Sync + 'static,
{
    tokio::spawn(async move {
        match source.resolve(&media).await {
            Ok(()) => {
                let _ = msg_tx.send(Message::MediaLoaded { target }).await;
            }
            Err(e) => {
                // The element stays in its loading state
                warn!("Media for {:?} unavailable: {}", target, e);
            }
        }
    });
}
