//! Configuration schema types for dashkeys.
//!
//! All structs use `serde(default)` so partial configs work correctly.

mod keybind_config;
mod system;
mod theme;

pub use keybind_config::*;
pub use system::*;
pub use theme::*;

use serde::{Deserialize, Serialize};

/// Current config schema version.
pub const CONFIG_SCHEMA_VERSION: u32 = 1;

/// Root configuration for dashkeys.
///
/// Only override what you want to change.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashkeysConfig {
    pub keybinds: KeybindConfig,
    pub storage: StorageConfig,
    pub theme: ThemeConfig,
    pub logging: LoggingConfig,
}
