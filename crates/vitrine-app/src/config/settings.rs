//! Settings parser for `config.toml`

use super::types::Settings;
use std::path::{Path, PathBuf};
use vitrine_core::prelude::*;

const CONFIG_FILENAME: &str = "config.toml";
const CONFIG_DIR: &str = "vitrine";

/// Default location: `<config_dir>/vitrine/config.toml`
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(CONFIG_DIR).join(CONFIG_FILENAME))
}

/// Load settings from a config file.
///
/// A missing file or one that fails to parse yields the defaults; parse
/// failures are logged.
pub fn load_settings(config_path: &Path) -> Settings {
    if !config_path.exists() {
        debug!("No config file at {:?}, using defaults", config_path);
        return Settings::default();
    }

    match std::fs::read_to_string(config_path) {
        Ok(content) => match toml::from_str(&content) {
            Ok(settings) => {
                debug!("Loaded settings from {:?}", config_path);
                settings
            }
            Err(e) => {
                warn!("Failed to parse {:?}: {}", config_path, e);
                Settings::default()
            }
        },
        Err(e) => {
            warn!("Failed to read {:?}: {}", config_path, e);
            Settings::default()
        }
    }
}

/// Write a commented default config file if none exists yet
pub fn init_config_file(config_path: &Path) -> Result<()> {
    if let Some(parent) = config_path.parent() {
        if !parent.exists() {
            std::fs::create_dir_all(parent)
                .map_err(|e| Error::config(format!("Failed to create config dir: {}", e)))?;
        }
    }

    if !config_path.exists() {
        let default_content = r#"# Vitrine Configuration

[gallery]
# initial_category = "all"
# catalogue = "/path/to/catalogue.toml"   # Omit to use the built-in catalogue

[layout]
carousel_max_width = 80   # Narrower terminals show the swipe carousel
wide_min_width = 160      # Wider terminals show four grid columns instead of two

[ui]
mouse = true              # Needed for press-and-hold previews
tick_rate_ms = 50
icons = "unicode"         # or "nerd_fonts"
"#;
        std::fs::write(config_path, default_content)
            .map_err(|e| Error::config(format!("Failed to write config.toml: {}", e)))?;
        info!("Wrote default config to {:?}", config_path);
    }

    Ok(())
}
