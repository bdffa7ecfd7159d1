//! Configuration loading
//!
//! Reads `~/.config/stopchat/config.toml`. A missing file is not an error; a
//! malformed one falls back to defaults and reports a warning that the UI shows
//! in the status line.

mod types;

use std::fs;
use std::path::{Path, PathBuf};

pub use types::{
    ChatConfig, ClipboardBackend, ClipboardConfig, Config, ServerConfig, DEFAULT_BASE_URL,
    DEFAULT_FAILURE_MESSAGE,
};

const CONFIG_DIR: &str = "stopchat";
const CONFIG_FILE: &str = "config.toml";

/// Outcome of loading the configuration
#[derive(Debug, Clone)]
pub struct ConfigResult {
    pub config: Config,
    /// Set when a config file existed but could not be used
    pub warning: Option<String>,
}

/// Default location of the config file
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|p| p.join(".config").join(CONFIG_DIR).join(CONFIG_FILE))
}

/// Load configuration from the default location
pub fn load_config() -> ConfigResult {
    match config_path() {
        Some(path) => load_config_from_path(&path),
        None => ConfigResult {
            config: Config::default(),
            warning: None,
        },
    }
}

pub fn load_config_from_path(path: &Path) -> ConfigResult {
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            log::debug!("No config file at {}", path.display());
            return ConfigResult {
                config: Config::default(),
                warning: None,
            };
        }
        Err(e) => {
            return ConfigResult {
                config: Config::default(),
                warning: Some(format!("Failed to read {}: {}", path.display(), e)),
            };
        }
    };

    match toml::from_str::<Config>(&contents) {
        Ok(config) => ConfigResult {
            config,
            warning: None,
        },
        Err(e) => {
            log::warn!("Invalid config {}: {}", path.display(), e);
            ConfigResult {
                config: Config::default(),
                warning: Some(format!("Invalid config, using defaults: {}", e.message())),
            }
        }
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;
