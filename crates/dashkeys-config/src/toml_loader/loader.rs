//! Core TOML config loading: read from path or platform default.

use crate::schema::DashkeysConfig;
use crate::validation;
use dashkeys_common::ConfigError;
use std::path::Path;
use tracing::{info, warn};

use super::paths::{create_default_config, default_config_path};

/// Parse a TOML document into a config, filling missing fields with defaults.
pub fn parse_str(content: &str) -> Result<DashkeysConfig, ConfigError> {
    toml::from_str(content).map_err(|e| ConfigError::ParseError(format!("failed to parse TOML: {e}")))
}

/// Load config from a specific TOML file path.
///
/// After loading, the config is validated; if validation fails, a warning
/// is logged and the parsed config is returned as-is.
pub fn load_from_path(path: &Path) -> Result<DashkeysConfig, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::FileNotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path)
        .map_err(|e| ConfigError::ParseError(format!("failed to read {}: {e}", path.display())))?;

    let config = parse_str(&content)?;

    if let Err(e) = validation::validate(&config) {
        warn!("config validation warning: {e}; using parsed config as-is");
    }

    info!("loaded config from {}", path.display());
    Ok(config)
}

/// Load config from the platform-specific default path.
///
/// On Linux: `~/.config/dashkeys/config.toml`
/// On macOS: `~/Library/Application Support/dashkeys/config.toml`
///
/// If the file does not exist, creates a commented default and returns defaults.
pub fn load_default() -> Result<DashkeysConfig, ConfigError> {
    let path = default_config_path()?;

    match load_from_path(&path) {
        Ok(config) => Ok(config),
        Err(ConfigError::FileNotFound(_)) => {
            info!("no config found at {}, creating default", path.display());
            create_default_config(&path)?;
            Ok(DashkeysConfig::default())
        }
        Err(e) => Err(e),
    }
}
