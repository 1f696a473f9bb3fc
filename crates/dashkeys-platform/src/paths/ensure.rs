use std::fs;

use dashkeys_common::PlatformError;

use super::resolve::{config_dir, data_dir};

/// Creates the config and data directories if they do not already exist.
pub fn ensure_dirs() -> Result<(), PlatformError> {
    fs::create_dir_all(config_dir()?).map_err(|e| PlatformError::PathError(e.to_string()))?;
    fs::create_dir_all(data_dir()?).map_err(|e| PlatformError::PathError(e.to_string()))?;
    Ok(())
}
