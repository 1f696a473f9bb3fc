use dashkeys_common::PlatformError;

use super::types::{KeyBind, Modifier};

/// Parses a human-readable keybind string like `"Ctrl+K"`, `"cmd+shift+t"`,
/// or `"Option+Period"` into a [`KeyBind`].
///
/// Normalization rules:
/// - `"Ctrl"` / `"Control"` -> `Ctrl`
/// - `"Cmd"` / `"Command"` / `"Meta"` / `"Super"` / `"Win"` -> `Cmd`
/// - `"Alt"` / `"Option"` / `"Opt"` -> `Alt`
/// - `"Shift"` -> `Shift`
///
/// The last token becomes the key. A trailing `"++"` binds the plus key.
pub fn parse_keybind(s: &str) -> Result<KeyBind, PlatformError> {
    let s = s.trim();
    if s.is_empty() {
        return Err(PlatformError::InvalidChord("empty keybind string".into()));
    }

    let (head, key_token) = split_key(s);
    let mut modifiers = Vec::new();

    for token in head {
        let token = token.trim();
        match normalize_modifier(token) {
            Some(modifier) => {
                if !modifiers.contains(&modifier) {
                    modifiers.push(modifier);
                }
            }
            None => {
                return Err(PlatformError::InvalidChord(format!(
                    "unrecognized modifier '{token}' in '{s}'"
                )));
            }
        }
    }

    let key_token = key_token.trim();
    if key_token.is_empty() {
        return Err(PlatformError::InvalidChord(format!(
            "keybind '{s}' has no key component"
        )));
    }
    if normalize_modifier(key_token).is_some() {
        return Err(PlatformError::InvalidChord(format!(
            "keybind '{s}' is a bare modifier"
        )));
    }

    modifiers.sort();
    Ok(KeyBind {
        modifiers,
        key: normalize_key_name(key_token),
    })
}

/// Splits off the key token, treating a trailing `+` as the plus key.
fn split_key(s: &str) -> (Vec<&str>, &str) {
    if s == "+" {
        return (Vec::new(), "+");
    }
    if let Some(head) = s.strip_suffix("++") {
        let modifiers = if head.is_empty() { Vec::new() } else { head.split('+').collect() };
        return (modifiers, "+");
    }
    match s.rsplit_once('+') {
        Some((head, key)) => (head.split('+').collect(), key),
        None => (Vec::new(), s),
    }
}

pub(super) fn normalize_modifier(token: &str) -> Option<Modifier> {
    match token.to_lowercase().as_str() {
        "ctrl" | "control" => Some(Modifier::Ctrl),
        "cmd" | "command" | "meta" | "super" | "win" => Some(Modifier::Cmd),
        "alt" | "option" | "opt" => Some(Modifier::Alt),
        "shift" => Some(Modifier::Shift),
        _ => None,
    }
}

pub(super) fn normalize_key_name(token: &str) -> String {
    let lower = token.to_lowercase();
    match lower.as_str() {
        "period" => ".".into(),
        "comma" => ",".into(),
        "slash" => "/".into(),
        "backslash" => "\\".into(),
        "plus" => "+".into(),
        "space" | "spacebar" => "Space".into(),
        "enter" | "return" => "Enter".into(),
        "escape" | "esc" => "Escape".into(),
        "tab" => "Tab".into(),
        "backspace" => "Backspace".into(),
        "delete" | "del" => "Delete".into(),
        "up" | "arrowup" => "Up".into(),
        "down" | "arrowdown" => "Down".into(),
        "left" | "arrowleft" => "Left".into(),
        "right" | "arrowright" => "Right".into(),
        "home" => "Home".into(),
        "end" => "End".into(),
        "pageup" => "PageUp".into(),
        "pagedown" => "PageDown".into(),
        _ => {
            let mut chars = token.chars();
            match chars.next() {
                Some(c) if chars.as_str().is_empty() => c.to_uppercase().collect(),
                Some(c) => {
                    let upper: String = c.to_uppercase().collect();
                    format!("{upper}{}", chars.as_str())
                }
                None => String::new(),
            }
        }
    }
}
