use std::path::PathBuf;

use dashkeys_common::PlatformError;

pub(super) const APP_NAME: &str = "dashkeys";

/// File holding persisted dashboard state when the file backend is used.
pub(super) const STORAGE_FILE: &str = "storage.json";

/// Platform configuration directory for dashkeys.
///
/// - macOS: `~/Library/Application Support/dashkeys`
/// - Linux: `$XDG_CONFIG_HOME/dashkeys` (defaults to `~/.config/dashkeys`)
/// - Windows: `%APPDATA%\dashkeys`
pub fn config_dir() -> Result<PathBuf, PlatformError> {
    Ok(dirs::config_dir()
        .ok_or_else(|| PlatformError::PathError("could not determine config directory".into()))?
        .join(APP_NAME))
}

/// Platform data directory for dashkeys.
///
/// - Linux: `$XDG_DATA_HOME/dashkeys` (defaults to `~/.local/share/dashkeys`)
pub fn data_dir() -> Result<PathBuf, PlatformError> {
    Ok(dirs::data_dir()
        .ok_or_else(|| PlatformError::PathError("could not determine data directory".into()))?
        .join(APP_NAME))
}

/// Default location of the persisted key-value store.
pub fn storage_file() -> Result<PathBuf, PlatformError> {
    Ok(data_dir()?.join(STORAGE_FILE))
}
