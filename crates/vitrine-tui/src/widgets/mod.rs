//! Custom widget components

mod detail_overlay;
mod header;
mod media;
pub mod modal_overlay;
mod placeholder_card;
mod product_card;
mod status_bar;
mod swipe_hint;

pub use detail_overlay::DetailOverlay;
pub use header::CategoryBar;
pub use media::{describe_hints, MediaArea};
pub use placeholder_card::PlaceholderCard;
pub use product_card::ProductCard;
pub use status_bar::StatusBar;
pub use swipe_hint::{PagerDots, SwipeHint};
