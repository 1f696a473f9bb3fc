//! Keybind validation utilities.

use crate::schema::KeybindConfig;
use dashkeys_common::ConfigError;
use std::collections::HashMap;

/// Returns all keybinds as `(name, chords)` pairs in overlay order.
pub fn all_keybinds(config: &KeybindConfig) -> Vec<(&'static str, &[String])> {
    vec![
        ("go_to_todos", config.go_to_todos.as_slice()),
        ("go_to_analytics", config.go_to_analytics.as_slice()),
        ("go_to_widgets", config.go_to_widgets.as_slice()),
        ("go_to_profile", config.go_to_profile.as_slice()),
        ("go_to_settings", config.go_to_settings.as_slice()),
        ("focus_search", config.focus_search.as_slice()),
        ("show_shortcuts", config.show_shortcuts.as_slice()),
        ("toggle_sidebar", config.toggle_sidebar.as_slice()),
        ("toggle_theme", config.toggle_theme.as_slice()),
        ("close_modal", config.close_modal.as_slice()),
    ]
}

/// Validate that no chord is assigned to two different commands.
///
/// Textual check only: strings are compared case-insensitively, so
/// "Shift+Ctrl+T" vs "Ctrl+Shift+T" and "Esc" vs "Escape" pass here. The
/// platform crate compares parsed chords when it installs the defaults.
pub fn validate_no_duplicates(config: &KeybindConfig) -> Result<(), ConfigError> {
    let mut seen: HashMap<String, &str> = HashMap::new();

    for (name, chords) in all_keybinds(config) {
        for chord in chords {
            let key = chord.trim().to_lowercase();
            match seen.get(&key) {
                Some(existing) if *existing != name => {
                    return Err(ConfigError::ValidationError(format!(
                        "duplicate keybind '{chord}': assigned to both '{existing}' and '{name}'"
                    )));
                }
                _ => {
                    seen.insert(key, name);
                }
            }
        }
    }

    Ok(())
}

/// Validate that every configured chord string is non-empty.
pub fn validate_not_empty(config: &KeybindConfig) -> Result<(), ConfigError> {
    for (name, chords) in all_keybinds(config) {
        if chords.iter().any(|c| c.trim().is_empty()) {
            return Err(ConfigError::ValidationError(format!(
                "empty keybind in '{name}'"
            )));
        }
    }
    Ok(())
}
