//! Media references and still/motion classification
//!
//! A [`MediaRef`] is an opaque string (file path, URL or inline `data:` URI).
//! [`MediaRef::kind`] is the only place that decides how a reference is
//! rendered; renderers match on the returned [`MediaKind`] instead of
//! re-inspecting the string.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// File extensions rendered as motion media (matched case-insensitively at the end).
static MOTION_EXTENSION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\.(mp4|webm|ogg|mov)$").expect("Invalid motion extension regex")
});

/// Inline motion data prefix
const MOTION_DATA_PREFIX: &str = "data:video";

/// Opaque reference to a product's primary media
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MediaRef(String);

impl MediaRef {
    pub fn new(reference: impl Into<String>) -> Self {
        Self(reference.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Classify this reference as still or motion media
    pub fn kind(&self) -> MediaKind {
        classify(&self.0)
    }

    /// Whether this is an inline `data:` URI
    pub fn is_inline(&self) -> bool {
        self.0.starts_with("data:")
    }
}

impl fmt::Display for MediaRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for MediaRef {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// How a media reference is rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    /// Still image, decoded lazily once near the viewport
    Still,
    /// Motion video, auto-played muted in a loop
    Motion,
}

impl MediaKind {
    /// Rendering hints the frontend applies for this kind
    pub fn hints(self) -> RenderHints {
        match self {
            MediaKind::Still => RenderHints {
                autoplay: false,
                muted: false,
                looping: false,
                lazy: true,
            },
            MediaKind::Motion => RenderHints {
                autoplay: true,
                muted: true,
                looping: true,
                lazy: false,
            },
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            MediaKind::Still => "still",
            MediaKind::Motion => "motion",
        }
    }
}

/// Playback/loading hints derived from [`MediaKind`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderHints {
    pub autoplay: bool,
    pub muted: bool,
    pub looping: bool,
    /// Deferred until the item is near the viewport
    pub lazy: bool,
}

/// Classify a raw media reference.
///
/// Motion when the reference ends in `mp4`, `webm`, `ogg` or `mov`
/// (any case) or starts with `data:video`; still otherwise.
pub fn classify(reference: &str) -> MediaKind {
    if reference.starts_with(MOTION_DATA_PREFIX) || MOTION_EXTENSION.is_match(reference) {
        MediaKind::Motion
    } else {
        MediaKind::Still
    }
}

/// Load status of one rendered media element
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MediaStatus {
    /// Not yet decoded; rendered degraded with a spinner
    #[default]
    Loading,
    /// First frame / image decoded
    Ready,
}

impl MediaStatus {
    pub fn is_ready(self) -> bool {
        self == MediaStatus::Ready
    }

    /// Mark the media ready. Returns `false` when it already was.
    pub fn mark_ready(&mut self) -> bool {
        if self.is_ready() {
            return false;
        }
        *self = MediaStatus::Ready;
        true
    }
}
