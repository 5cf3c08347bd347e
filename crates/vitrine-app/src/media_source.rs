//! Media resolution
//!
//! Decides whether a product's media reference can be shown. A terminal cannot
//! decode images or video, so "loading" a media element means resolving its
//! reference; success is reported to the update loop as `MediaLoaded`.

use std::path::{Path, PathBuf};

use url::Url;
use vitrine_core::prelude::*;
use vitrine_core::MediaRef;

/// Resolves media references for cards and the detail overlay
#[trait_variant::make(MediaSource: Send)]
pub trait LocalMediaSource {
    /// Resolve `media`. `Ok` means the element is ready to show.
    async fn resolve(&self, media: &MediaRef) -> Result<()>;
}

/// Resolves file paths relative to a root directory (the catalogue's directory)
#[derive(Debug, Clone)]
pub struct FsMediaSource {
    root: PathBuf,
}

impl FsMediaSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn path_for(&self, reference: &str) -> PathBuf {
        let path = Path::new(reference);
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.root.join(path)
        }
    }
}

impl Default for FsMediaSource {
    fn default() -> Self {
        Self::new(".")
    }
}

impl MediaSource for FsMediaSource {
    async fn resolve(&self, media: &MediaRef) -> Result<()> {
        let reference = media.as_str();

        if media.is_inline() {
            // data:<header>,<payload>
            return if reference.contains(',') {
                Ok(())
            } else {
                Err(Error::media_unresolved(reference))
            };
        }

        if reference.starts_with("http://") || reference.starts_with("https://") {
            return Url::parse(reference)
                .map(|_| ())
                .map_err(|e| Error::media_unresolved(format!("{reference}: {e}")));
        }

        let path = self.path_for(reference);
        match tokio::fs::metadata(&path).await {
            Ok(meta) if meta.is_file() => {
                trace!("Resolved media {:?}", path);
                Ok(())
            }
            _ => Err(Error::media_unresolved(path.display().to_string())),
        }
    }
}
