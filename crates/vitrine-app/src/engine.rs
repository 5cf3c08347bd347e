//! Engine - orchestration state shared by the TUI and headless drivers
//!
//! The Engine owns the gallery state, the message channel, the long-press
//! timers and the external services, and broadcasts [`EngineEvent`]s derived
//! from before/after state snapshots.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::{broadcast, mpsc};
use vitrine_core::prelude::*;
use vitrine_core::{CategoryId, MediaStatus, ProductId};

use crate::actions::{PressTimers, Services};
use crate::card::PreviewView;
use crate::engine_event::EngineEvent;
use crate::handler;
use crate::media_source::{FsMediaSource, MediaSource};
use crate::message::{MediaTarget, Message};
use crate::order::OrderContext;
use crate::process;
use crate::state::AppState;

/// Lightweight snapshot of state for change detection.
///
/// Captured before message processing, compared after to detect
/// what changed and emit appropriate EngineEvents.
#[derive(Debug, Clone)]
struct StateSnapshot {
    active_category: CategoryId,
    hint_visible: bool,
    cards: HashMap<ProductId, (PreviewView, MediaStatus)>,
    overlay: Option<(ProductId, MediaStatus)>,
    orders_requested: usize,
}

impl StateSnapshot {
    fn capture(state: &AppState) -> Self {
        Self {
            active_category: state.active_category.clone(),
            hint_visible: state.swipe_hint.is_visible(),
            cards: state
                .cards
                .iter()
                .map(|(id, card)| (id.clone(), (card.view(), card.media())))
                .collect(),
            overlay: state
                .overlay
                .current()
                .map(|o| (o.product_id.clone(), o.media)),
            orders_requested: state.orders_requested,
        }
    }
}

/// Orchestration engine for the gallery.
///
/// Encapsulates:
/// - TEA state management
/// - Message channel
/// - Long-press timer tasks
/// - Media source and order context
/// - Event broadcasting for external consumers
pub struct Engine<S = FsMediaSource> {
    /// TEA application state (the Model)
    pub state: AppState,

    /// Sender half of the unified message channel.
    /// Clone this to give to input sources (signal handler, event reader).
    pub msg_tx: mpsc::Sender<Message>,

    /// Receiver half of the unified message channel.
    pub msg_rx: mpsc::Receiver<Message>,

    timers: PressTimers,

    services: Services<S>,

    event_tx: broadcast::Sender<EngineEvent>,
}

impl<S> Engine<S>
where
    S: MediaSource + Send + Sync + 'static,
{
    /// Create an engine around an initial gallery state.
    ///
    /// Must be called inside a tokio runtime: media requests for the initial
    /// cards are dispatched immediately.
    pub fn new(mut state: AppState, media: S, orders: Arc<dyn OrderContext>) -> Self {
        let (msg_tx, msg_rx) = mpsc::channel::<Message>(256);
        let (event_tx, _) = broadcast::channel(256);
        let mut timers = PressTimers::new();
        let services = Services::new(media, orders);

        let startup = handler::startup(&mut state);
        if let Some(msg) = process::dispatch(startup, &msg_tx, &mut timers, &services) {
            let _ = msg_tx.try_send(msg);
        }

        info!(
            "Engine started: {} products, category '{}'",
            state.catalogue.products.len(),
            state.active_category
        );

        Self {
            state,
            msg_tx,
            msg_rx,
            timers,
            services,
            event_tx,
        }
    }

    /// Subscribe to engine events.
    ///
    /// If the subscriber falls behind, older events are dropped
    /// (`broadcast::error::RecvError::Lagged`).
    pub fn subscribe(&self) -> broadcast::Receiver<EngineEvent> {
        self.event_tx.subscribe()
    }

    /// Process a single message through the TEA update cycle and emit events
    /// for the resulting state changes.
    pub fn process_message(&mut self, msg: Message) {
        let pre = StateSnapshot::capture(&self.state);

        process::process_message(
            &mut self.state,
            msg,
            &self.msg_tx,
            &mut self.timers,
            &self.services,
        );

        let post = StateSnapshot::capture(&self.state);
        self.emit_events(&pre, &post);
    }

    /// Drain and process all pending messages from the channel.
    ///
    /// Returns the number of messages processed.
    pub fn drain_pending_messages(&mut self) -> usize {
        let mut count = 0;
        while let Ok(msg) = self.msg_rx.try_recv() {
            self.process_message(msg);
            count += 1;
        }
        count
    }

    /// Process messages read from an input source.
    ///
    /// Background messages queued while the input was being read (timer
    /// fires, media results) are processed before each input message, so a
    /// release never overtakes a long-press timer that already elapsed.
    pub fn process_input(&mut self, messages: impl IntoIterator<Item = Message>) {
        for msg in messages {
            self.drain_pending_messages();
            self.process_message(msg);
        }
    }

    /// Wait for the next message from background tasks or input sources
    pub async fn next_message(&mut self) -> Option<Message> {
        self.msg_rx.recv().await
    }

    /// Get a clone of the message sender for spawning input sources.
    pub fn msg_sender(&self) -> mpsc::Sender<Message> {
        self.msg_tx.clone()
    }

    /// Check if the application should quit.
    pub fn should_quit(&self) -> bool {
        self.state.should_quit()
    }

    /// Number of long-press timers that have not fired yet
    pub fn pending_timer_count(&self) -> usize {
        self.timers.pending_count()
    }

    /// Initiate shutdown: abort all timers and notify subscribers.
    pub fn shutdown(&mut self) {
        self.emit(EngineEvent::Shutdown);
        let aborted = self.timers.cancel_all();
        if aborted > 0 {
            debug!("Aborted {} pending press timer(s)", aborted);
        }
        info!(
            "Engine stopped ({} order request(s) this session)",
            self.state.orders_requested
        );
    }

    /// Compare pre/post snapshots and emit the corresponding events
    fn emit_events(&self, pre: &StateSnapshot, post: &StateSnapshot) {
        if pre.active_category != post.active_category {
            self.emit(EngineEvent::CategoryChanged {
                from: pre.active_category.clone(),
                to: post.active_category.clone(),
            });
        }

        if pre.hint_visible && !post.hint_visible {
            self.emit(EngineEvent::SwipeHintDismissed);
        }

        for (id, (view, media)) in &post.cards {
            let (pre_view, pre_media) = pre
                .cards
                .get(id)
                .copied()
                .unwrap_or((PreviewView::Ambient, MediaStatus::Loading));

            if *view != pre_view {
                self.emit(EngineEvent::PreviewChanged {
                    product_id: id.clone(),
                    view: *view,
                });
            }
            if media.is_ready() && !pre_media.is_ready() {
                self.emit(EngineEvent::MediaReady {
                    target: MediaTarget::Card(id.clone()),
                });
            }
        }

        let pre_overlay = pre.overlay.as_ref().map(|(id, _)| id);
        let post_overlay = post.overlay.as_ref().map(|(id, _)| id);
        if pre_overlay != post_overlay {
            match post_overlay {
                Some(product_id) => self.emit(EngineEvent::DetailOpened {
                    product_id: product_id.clone(),
                    replaced: pre_overlay.cloned(),
                }),
                None => {
                    if let Some(product_id) = pre_overlay {
                        self.emit(EngineEvent::DetailClosed {
                            product_id: product_id.clone(),
                        });
                    }
                }
            }
        }

        if let Some((id, media)) = &post.overlay {
            let was_ready = matches!(&pre.overlay, Some((pre_id, m)) if pre_id == id && m.is_ready());
            if media.is_ready() && !was_ready {
                self.emit(EngineEvent::MediaReady {
                    target: MediaTarget::Overlay(id.clone()),
                });
            }
        }

        if post.orders_requested > pre.orders_requested {
            if let Some(product_id) = post_overlay {
                self.emit(EngineEvent::OrderRequested {
                    product_id: product_id.clone(),
                });
            }
        }
    }

    /// Emit a single EngineEvent to all subscribers.
    ///
    /// send() fails only when there are no receivers.
    fn emit(&self, event: EngineEvent) {
        trace!("Engine event: {}", event.event_type());
        let _ = self.event_tx.send(event);
    }
}
