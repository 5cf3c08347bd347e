//! Error type shared by the Vitrine crates

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Terminal setup, signal registration or the error reporter failed
    #[error("Terminal error: {message}")]
    Terminal { message: String },

    #[error("Catalogue file not found: {path}")]
    CatalogueNotFound { path: PathBuf },

    #[error("Invalid catalogue: {message}")]
    CatalogueInvalid { message: String },

    #[error("Configuration error: {message}")]
    Config { message: String },

    /// The element stays in its loading state
    #[error("Media reference could not be resolved: {reference}")]
    MediaUnresolved { reference: String },
}

impl Error {
    pub fn terminal(message: impl Into<String>) -> Self {
        Self::Terminal {
            message: message.into(),
        }
    }

    pub fn catalogue_not_found(path: impl Into<PathBuf>) -> Self {
        Self::CatalogueNotFound { path: path.into() }
    }

    pub fn catalogue_invalid(message: impl Into<String>) -> Self {
        Self::CatalogueInvalid {
            message: message.into(),
        }
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    pub fn media_unresolved(reference: impl Into<String>) -> Self {
        Self::MediaUnresolved {
            reference: reference.into(),
        }
    }
}

/// Log a failure with what was being attempted, keeping the original error
pub trait ResultExt<T> {
    fn context(self, context: impl Into<String>) -> Result<T>;
}

impl<T, E: Into<Error>> ResultExt<T> for std::result::Result<T, E> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| {
            let err = e.into();
            tracing::error!("{}: {}", context.into(), err);
            err
        })
    }
}
