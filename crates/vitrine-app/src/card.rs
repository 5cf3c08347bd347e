//! Card preview state machine
//!
//! Each visible card owns one [`CardPreview`]. The press gesture is an explicit
//! machine:
//!
//! ```text
//!            press_start                 timer_fired(token)
//!   Idle ─────────────────▶ Pressing ─────────────────────▶ FullDetail
//!    ▲                        │  press_end  => Tap               │
//!    │                        │  press_cancel                    │ press_end / press_cancel
//!    └────────────────────────┴──────────────────────────────────┘
//! ```
//!
//! Every exit from `Pressing` invalidates the armed token, so a timer that
//! fires after release or cancellation is ignored even if its message was
//! already queued. A release at or past the threshold is a long press even
//! when the timer message has not been processed yet. Media load status is
//! tracked independently.

use std::time::Duration;

use tokio::time::Instant;
use vitrine_core::MediaStatus;

/// Sustained press needed before the full-detail view is shown
pub const LONG_PRESS_THRESHOLD: Duration = Duration::from_millis(400);

/// Identity of one armed long-press timer.
///
/// Allocated from a counter owned by the gallery, so tokens are never reused
/// by a card that is unmounted and mounted again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PressToken(u64);

impl PressToken {
    pub fn new(value: u64) -> Self {
        Self(value)
    }

    pub fn value(self) -> u64 {
        self.0
    }
}

/// Gesture phase of a card
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PressPhase {
    #[default]
    Idle,
    /// Press in progress, long-press timer armed with `token`
    Pressing {
        token: PressToken,
        started_at: Instant,
    },
    /// Sustained press: showing the uncropped framing
    FullDetail,
}

/// Which framing of the media is shown
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreviewView {
    /// Default cropped framing
    Ambient,
    /// Uncropped inspection framing
    FullDetail,
}

/// Result of arming a press
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PressArmed {
    pub token: PressToken,
    /// A previous press was still active and has been ended without selecting
    pub replaced_pending: bool,
}

/// What a release means for the gesture
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReleaseOutcome {
    /// Released before the threshold: select the product
    Tap,
    /// Released at or after the threshold: back to ambient, no selection
    PreviewEnded,
    /// No press was active
    Ignored,
}

/// Per-card interaction state
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CardPreview {
    press: PressPhase,
    media: MediaStatus,
    media_requested: bool,
}

impl CardPreview {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> PressPhase {
        self.press
    }

    pub fn view(&self) -> PreviewView {
        match self.press {
            PressPhase::FullDetail => PreviewView::FullDetail,
            PressPhase::Idle | PressPhase::Pressing { .. } => PreviewView::Ambient,
        }
    }

    pub fn is_full_detail(&self) -> bool {
        self.view() == PreviewView::FullDetail
    }

    /// Whether a press (armed or sustained) is in progress
    pub fn is_pressed(&self) -> bool {
        self.press != PressPhase::Idle
    }

    /// Token of the armed timer, if one is pending
    pub fn pending_token(&self) -> Option<PressToken> {
        match self.press {
            PressPhase::Pressing { token, .. } => Some(token),
            _ => None,
        }
    }

    pub fn has_pending_timer(&self) -> bool {
        self.pending_token().is_some()
    }

    /// Pointer-down / touch-start. Arms a timer with `token`.
    pub fn press_start(&mut self, token: PressToken) -> PressArmed {
        self.press_start_at(token, Instant::now())
    }

    pub fn press_start_at(&mut self, token: PressToken, now: Instant) -> PressArmed {
        let replaced_pending = self.has_pending_timer();
        self.press = PressPhase::Pressing {
            token,
            started_at: now,
        };
        PressArmed {
            token,
            replaced_pending,
        }
    }

    /// Pointer-up / touch-end
    pub fn press_end(&mut self) -> ReleaseOutcome {
        self.press_end_at(Instant::now())
    }

    pub fn press_end_at(&mut self, now: Instant) -> ReleaseOutcome {
        let outcome = match self.press {
            PressPhase::Pressing { started_at, .. }
                if now.saturating_duration_since(started_at) >= LONG_PRESS_THRESHOLD =>
            {
                ReleaseOutcome::PreviewEnded
            }
            PressPhase::Pressing { .. } => ReleaseOutcome::Tap,
            PressPhase::FullDetail => ReleaseOutcome::PreviewEnded,
            PressPhase::Idle => ReleaseOutcome::Ignored,
        };
        self.press = PressPhase::Idle;
        outcome
    }

    /// Pointer left the card or the touch moved.
    ///
    /// Returns the token of the timer that was pending, if any.
    pub fn press_cancel(&mut self) -> Option<PressToken> {
        let pending = self.pending_token();
        self.press = PressPhase::Idle;
        pending
    }

    /// The long-press timer for `token` elapsed.
    ///
    /// Returns `true` when the card entered the full-detail view. Stale tokens
    /// (released, cancelled or re-armed presses) leave the card untouched.
    pub fn timer_fired(&mut self, token: PressToken) -> bool {
        match self.press {
            PressPhase::Pressing { token: armed, .. } if armed == token => {
                self.press = PressPhase::FullDetail;
                true
            }
            _ => false,
        }
    }

    pub fn media(&self) -> MediaStatus {
        self.media
    }

    pub fn is_media_ready(&self) -> bool {
        self.media.is_ready()
    }

    /// Media finished loading. Returns `false` for repeated signals.
    pub fn mark_media_ready(&mut self) -> bool {
        self.media.mark_ready()
    }

    pub fn media_requested(&self) -> bool {
        self.media_requested
    }

    /// Record that a load has been requested. Returns `false` if it already was.
    pub fn mark_media_requested(&mut self) -> bool {
        !std::mem::replace(&mut self.media_requested, true)
    }
}
