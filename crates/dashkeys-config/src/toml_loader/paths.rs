//! Config path resolution and default file creation.

use dashkeys_common::ConfigError;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::info;

use super::template::default_config_toml;

const APP_DIR: &str = "dashkeys";
const CONFIG_FILE: &str = "config.toml";

/// `<platform config dir>/dashkeys/config.toml`.
pub fn default_config_path() -> Result<PathBuf, ConfigError> {
    dirs::config_dir()
        .map(|dir| dir.join(APP_DIR).join(CONFIG_FILE))
        .ok_or_else(|| ConfigError::ParseError("no platform config directory".into()))
}

/// Write the commented default config to `path`. An existing file is left
/// untouched.
pub fn create_default_config(path: &Path) -> Result<(), ConfigError> {
    let io_err = |what: &str, e: std::io::Error| {
        ConfigError::ParseError(format!("{what} {}: {e}", path.display()))
    };

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| io_err("cannot create directory for", e))?;
    }

    let mut file = match OpenOptions::new().write(true).create_new(true).open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == std::io::ErrorKind::AlreadyExists => return Ok(()),
        Err(e) => return Err(io_err("cannot create", e)),
    };
    file.write_all(default_config_toml().as_bytes())
        .map_err(|e| io_err("cannot write", e))?;

    info!("created default config at {}", path.display());
    Ok(())
}
