//! Keyboard shortcut configuration types.
//!
//! Named `keybind_config` to avoid clash with the crate-level `keybinds` module.

use serde::{Deserialize, Serialize};

/// Keyboard shortcuts configuration.
///
/// Each command takes a list of chords so platform pairs ("Ctrl+K" and
/// "Cmd+K") can share one command. Format: "Modifier+Key" where Modifier is
/// one of: Ctrl, Cmd, Alt, Shift. Multiple modifiers: "Ctrl+Shift+T".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeybindConfig {
    pub go_to_todos: Vec<String>,
    pub go_to_analytics: Vec<String>,
    pub go_to_widgets: Vec<String>,
    pub go_to_profile: Vec<String>,
    pub go_to_settings: Vec<String>,
    pub focus_search: Vec<String>,
    pub show_shortcuts: Vec<String>,
    pub toggle_sidebar: Vec<String>,
    pub toggle_theme: Vec<String>,
    pub close_modal: Vec<String>,
}

fn chords(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| (*s).to_string()).collect()
}

impl Default for KeybindConfig {
    fn default() -> Self {
        Self {
            go_to_todos: chords(&["Alt+1"]),
            go_to_analytics: chords(&["Alt+2"]),
            go_to_widgets: chords(&["Alt+3"]),
            go_to_profile: chords(&["Alt+4"]),
            go_to_settings: chords(&["Alt+5"]),
            focus_search: chords(&["Ctrl+K", "Cmd+K"]),
            show_shortcuts: chords(&["Ctrl+/", "Cmd+/"]),
            toggle_sidebar: chords(&["Ctrl+\\", "Cmd+\\"]),
            toggle_theme: chords(&["Ctrl+Shift+T", "Cmd+Shift+T"]),
            close_modal: chords(&["Escape"]),
        }
    }
}
