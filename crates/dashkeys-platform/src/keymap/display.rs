use super::types::KeyBind;

/// Canonical `+`-joined form of a keybind (`"Ctrl+Shift+T"`).
///
/// Modifiers appear in their declaration order regardless of how the
/// keybind was written.
pub fn keybind_to_display(kb: &KeyBind) -> String {
    keycaps(kb).join("+")
}

/// The individual key caps of a keybind, modifiers first.
///
/// Used by the shortcuts overlay, which draws one cap per segment.
pub fn keycaps(kb: &KeyBind) -> Vec<String> {
    let mut modifiers = kb.modifiers.clone();
    modifiers.sort();
    modifiers.dedup();

    let mut caps: Vec<String> = modifiers.iter().map(|m| m.name().to_string()).collect();
    caps.push(kb.key.clone());
    caps
}
