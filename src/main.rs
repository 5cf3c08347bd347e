//! Vitrine - a terminal gallery for a catalogue of custom-made pieces
//!
//! This is the binary entry point. All logic lives in the workspace crates.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use clap::Parser;
use tracing::{debug, error, info};
use vitrine_app::config::{self, Settings};
use vitrine_app::{FsMediaSource, RecordingOrderContext};
use vitrine_core::{Catalogue, Error, Result, ResultExt};

/// Vitrine - browse a catalogue of custom-made pieces in the terminal
#[derive(Parser, Debug, Default)]
#[command(name = "vitrine")]
#[command(about = "Browse a catalogue of custom-made pieces in the terminal", long_about = None)]
struct Args {
    /// Catalogue file (TOML); the built-in catalogue is used when omitted
    #[arg(long, value_name = "PATH")]
    catalogue: Option<PathBuf>,

    /// Config file (defaults to <config_dir>/vitrine/config.toml)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Category selected at startup
    #[arg(long, value_name = "ID")]
    category: Option<String>,

    /// Do not capture the mouse (disables press-and-hold previews)
    #[arg(long)]
    no_mouse: bool,

    /// Write a default config file and exit
    #[arg(long)]
    init_config: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    color_eyre::install().map_err(|e| Error::terminal(e.to_string()))?;

    let config_path = args.config.clone().or_else(config::default_config_path);

    if args.init_config {
        let path = config_path.ok_or_else(|| Error::config("No config directory available"))?;
        config::init_config_file(&path).context(format!("Writing {}", path.display()))?;
        eprintln!("Config written to {}", path.display());
        return Ok(());
    }

    // Logging goes to a file, the TUI owns stdout
    vitrine_core::logging::init()?;

    info!("═══════════════════════════════════════════════════════");
    info!("Vitrine starting");
    info!("═══════════════════════════════════════════════════════");

    let mut settings = config_path
        .as_deref()
        .map(config::load_settings)
        .unwrap_or_default();
    apply_args(&mut settings, &args);

    let (catalogue, media_root) = load_catalogue(settings.gallery.catalogue.as_deref())?;
    info!("Media root: {}", media_root.display());

    let orders = Arc::new(RecordingOrderContext::new());
    let result = vitrine_tui::run(
        catalogue,
        settings,
        FsMediaSource::new(media_root),
        orders.clone(),
    )
    .await;

    if let Err(ref e) = result {
        error!("Application error: {:?}", e);
    }

    info!("Vitrine exiting ({} order requests)", orders.len());
    result
}

/// Command-line flags override the config file
fn apply_args(settings: &mut Settings, args: &Args) {
    if let Some(path) = &args.catalogue {
        settings.gallery.catalogue = Some(path.clone());
    }
    if let Some(category) = &args.category {
        settings.gallery.initial_category = Some(category.clone());
    }
    if args.no_mouse {
        settings.ui.mouse = false;
    }
}

/// Load the catalogue and the directory its media paths are relative to
fn load_catalogue(path: Option<&Path>) -> Result<(Catalogue, PathBuf)> {
    match path {
        Some(path) => {
            let catalogue = Catalogue::load(path)?;
            let root = path
                .parent()
                .filter(|p| !p.as_os_str().is_empty())
                .map(Path::to_path_buf)
                .unwrap_or_else(|| PathBuf::from("."));
            Ok((catalogue, root))
        }
        None => {
            debug!("Using the built-in catalogue");
            let root = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
            Ok((Catalogue::builtin()?, root))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_args_override_settings() {
        let mut settings = Settings::default();
        let args = Args {
            catalogue: Some(PathBuf::from("/tmp/pieces.toml")),
            category: Some("stand".into()),
            no_mouse: true,
            ..Default::default()
        };

        apply_args(&mut settings, &args);

        assert_eq!(
            settings.gallery.catalogue,
            Some(PathBuf::from("/tmp/pieces.toml"))
        );
        assert_eq!(settings.gallery.initial_category.as_deref(), Some("stand"));
        assert!(!settings.ui.mouse);
    }

    #[test]
    fn test_absent_args_keep_settings() {
        let mut settings = Settings::default();
        settings.gallery.initial_category = Some("shaker".into());

        apply_args(&mut settings, &Args::default());

        assert_eq!(settings.gallery.initial_category.as_deref(), Some("shaker"));
        assert!(settings.ui.mouse);
    }

    #[test]
    fn test_args_parse_flags() {
        let args = Args::parse_from(["vitrine", "--category", "future", "--no-mouse"]);
        assert_eq!(args.category.as_deref(), Some("future"));
        assert!(args.no_mouse);
        assert!(!args.init_config);
    }

    #[test]
    fn test_load_catalogue_roots_media_next_to_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("catalogue.toml");
        std::fs::write(
            &path,
            r#"
[[categories]]
id = "all"
label = "All"

[[categories]]
id = "misc"
label = "Misc"

[[products]]
id = "one"
archive_id = "NO.001"
code_name = "One"
category = "misc"
media = "media/one.jpg"
"#,
        )
        .unwrap();

        let (catalogue, root) = load_catalogue(Some(&path)).unwrap();
        assert_eq!(catalogue.products.len(), 1);
        assert_eq!(root, dir.path());
    }

    #[test]
    fn test_load_missing_catalogue_fails() {
        let dir = TempDir::new().unwrap();
        assert!(load_catalogue(Some(&dir.path().join("missing.toml"))).is_err());
    }

    #[test]
    fn test_builtin_catalogue_when_no_path() {
        let (catalogue, _root) = load_catalogue(None).unwrap();
        assert!(!catalogue.products.is_empty());
    }
}
