//! Theme selection configuration.

use serde::{Deserialize, Serialize};

/// Theme selection configuration.
///
/// Leaving `name` unset defers to the stored preference and then to the
/// system color scheme.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    pub name: Option<String>,
    /// Fallback for the system color scheme when the host cannot report it.
    pub prefers_dark: bool,
}
