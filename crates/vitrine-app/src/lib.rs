//! vitrine-app - Gallery state and orchestration for Vitrine
//!
//! This crate implements the TEA (The Elm Architecture) pattern for the
//! product gallery: the explicit gallery state, the update function, the
//! long-press timers, media resolution and the order hand-off, wrapped by the
//! [`Engine`] that frontends drive.

pub mod actions;
pub mod card;
pub mod config;
pub mod engine;
pub mod engine_event;
pub mod handler;
pub mod input_key;
pub mod media_source;
pub mod message;
pub mod order;
pub mod overlay;
pub mod process;
pub mod signals;
pub mod state;
pub mod swipe_hint;
pub mod viewport;

#[cfg(test)]
pub(crate) mod test_support;

// Re-export primary types
pub use card::{CardPreview, PressPhase, PressToken, PreviewView, LONG_PRESS_THRESHOLD};
pub use engine::Engine;
pub use engine_event::EngineEvent;
pub use handler::{UpdateAction, UpdateResult};
pub use media_source::{FsMediaSource, LocalMediaSource, MediaSource};
pub use message::{MediaTarget, Message};
pub use order::{OrderContext, RecordingOrderContext};
pub use state::{AppPhase, AppState};
pub use viewport::{LayoutMode, Viewport};
