//! User configuration
//!
//! Loaded from `comboline/config.toml` under the platform config directory.
//! A missing file means defaults; a malformed one means defaults plus a
//! warning for the host to show.

mod types;

use std::fs;
use std::path::{Path, PathBuf};

pub use types::{Config, MatchConfig, RemoteConfig, WidgetConfig};

/// Loaded configuration and the problem met while loading, if any
#[derive(Debug, Clone, Default)]
pub struct ConfigResult {
    pub config: Config,
    pub warning: Option<String>,
}

pub fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("comboline").join("config.toml"))
}

pub fn load_config() -> ConfigResult {
    match config_path() {
        Some(path) => load_config_from_path(&path),
        None => ConfigResult::default(),
    }
}

pub fn load_config_from_path(path: &Path) -> ConfigResult {
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => return ConfigResult::default(),
        Err(err) => {
            return ConfigResult {
                config: Config::default(),
                warning: Some(format!("Could not read {}: {}", path.display(), err)),
            };
        }
    };

    match toml::from_str::<Config>(&contents) {
        Ok(config) => ConfigResult {
            config,
            warning: None,
        },
        Err(err) => {
            log::warn!("invalid config {}: {}", path.display(), err);
            ConfigResult {
                config: Config::default(),
                warning: Some(format!("Invalid config, using defaults: {}", err.message())),
            }
        }
    }
}
