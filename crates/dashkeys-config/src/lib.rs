//! dashkeys configuration system.
//!
//! TOML-based configuration for shortcut chords, storage, theme selection
//! and logging. Every section has defaults so partial configs work out of
//! the box.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use dashkeys_config::load_config;
//!
//! let config = load_config(None).expect("failed to load config");
//! println!("{:?}", config.keybinds.focus_search);
//! ```

pub mod keybinds;
pub mod schema;
pub mod toml_loader;
pub mod validation;

pub use schema::{DashkeysConfig, CONFIG_SCHEMA_VERSION};

use dashkeys_common::ConfigError;
use std::path::Path;

/// Load config from an explicit path, or from the platform default path.
///
/// An explicit path must exist. The default path is created with a
/// commented template when missing.
pub fn load_config(path: Option<&Path>) -> Result<DashkeysConfig, ConfigError> {
    match path {
        Some(path) => toml_loader::load_from_path(path),
        None => toml_loader::load_default(),
    }
}

/// Serialize a config to a pretty-printed JSON string.
pub fn config_to_json(config: &DashkeysConfig) -> String {
    serde_json::to_string_pretty(config)
        .unwrap_or_else(|e| format!("{{\"error\": \"failed to serialize config: {e}\"}}"))
}
