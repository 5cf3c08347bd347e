//! # vitrine-core - Core Domain Types
//!
//! Foundation crate for Vitrine. Provides the catalogue model, the category
//! filter, media classification, error handling and logging setup.
//!
//! This crate has **zero internal dependencies** -- it only depends on external
//! crates (serde, toml, thiserror, regex, tracing).
//!
//! ## Public API
//!
//! ### Catalogue (`catalogue`)
//! - [`Product`] - An immutable catalogue item
//! - [`Category`] - A filter control (id + label)
//! - [`CategoryId`] - Category identifier with the reserved `all` / `future` values
//! - [`Catalogue`] - Validated, ordered products and categories
//!
//! ### Filtering (`filter`)
//! - [`filter()`] - Visible products for the active category
//! - [`shows_placeholder_slot()`] - Whether the "coming soon" slot is appended
//! - [`visible_slots()`] - Products followed by the optional placeholder
//!
//! ### Media (`media`)
//! - [`MediaRef`] - Opaque media reference
//! - [`MediaKind`] - Still vs motion classification
//! - [`MediaStatus`] - Loading / ready status of one media element
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Error enum for catalogue, config, terminal and media failures
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//! - [`ResultExt`] - Logs what was being attempted when an error passes through
//!
//! ## Prelude
//!
//! Import commonly used types with:
//! ```rust
//! use vitrine_core::prelude::*;
//! ```

pub mod catalogue;
pub mod error;
pub mod filter;
pub mod logging;
pub mod media;

/// Prelude for common imports used throughout all Vitrine crates
pub mod prelude {
    pub use super::error::{Error, Result, ResultExt};
    pub use tracing::{debug, error, info, instrument, trace, warn};
}

// Re-export commonly used types at crate root for convenience
pub use catalogue::{Catalogue, Category, CategoryId, CraftParams, Product, ProductId};
pub use error::{Error, Result, ResultExt};
pub use filter::{filter, shows_placeholder_slot, total_slots, visible_slots, Slot};
pub use media::{classify, MediaKind, MediaRef, MediaStatus, RenderHints};
