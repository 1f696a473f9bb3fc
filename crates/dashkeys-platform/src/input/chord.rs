use std::fmt;
use std::str::FromStr;

use dashkeys_common::PlatformError;

use crate::keymap::{keybind_to_display, parse_keybind, KeyBind, Modifier};

use super::key_event::KeyEvent;

pub(super) const MOD_CTRL: u8 = 0b0001;
pub(super) const MOD_CMD: u8 = 0b0010;
pub(super) const MOD_ALT: u8 = 0b0100;
pub(super) const MOD_SHIFT: u8 = 0b1000;

/// Key values that are modifiers on their own and never form a chord.
const BARE_MODIFIERS: [&str; 4] = ["Control", "Meta", "Alt", "Shift"];

/// A canonical key combination, used as the registry lookup key.
///
/// Modifiers are stored as a bitmask so two chords compare equal no matter
/// which order the modifiers were written or pressed in. `Display` renders
/// the canonical string (`"Ctrl+Cmd+Alt+Shift+K"` order).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Chord {
    /// Bitmask: Ctrl=1, Cmd=2, Alt=4, Shift=8.
    pub mods: u8,
    /// Normalized key name (e.g. "K", "Escape", "Up", "/").
    pub key: String,
}

impl Chord {
    /// Build from a parsed [`KeyBind`].
    pub fn from_keybind(kb: &KeyBind) -> Self {
        let mut mods = 0u8;
        for m in &kb.modifiers {
            mods |= modifier_bit(*m);
        }
        Self {
            mods,
            key: kb.key.clone(),
        }
    }

    /// Build from raw modifier flags and an already-normalized key name.
    pub fn from_parts(ctrl: bool, meta: bool, alt: bool, shift: bool, key: impl Into<String>) -> Self {
        let mut mods = 0u8;
        if ctrl {
            mods |= MOD_CTRL;
        }
        if meta {
            mods |= MOD_CMD;
        }
        if alt {
            mods |= MOD_ALT;
        }
        if shift {
            mods |= MOD_SHIFT;
        }
        Self {
            mods,
            key: key.into(),
        }
    }

    /// Reconstruct a [`KeyBind`] with modifiers in canonical order.
    pub fn to_keybind(&self) -> KeyBind {
        let modifiers = Modifier::ALL
            .iter()
            .copied()
            .filter(|m| self.has(*m))
            .collect();
        KeyBind {
            modifiers,
            key: self.key.clone(),
        }
    }

    pub fn has(&self, modifier: Modifier) -> bool {
        self.mods & modifier_bit(modifier) != 0
    }

    /// Whether this is the plain Escape key.
    pub fn is_escape(&self) -> bool {
        self.mods == 0 && self.key == "Escape"
    }

    /// A synthetic key event that normalizes back to this chord.
    pub fn to_event(&self) -> KeyEvent {
        let key = match self.key.as_str() {
            "Space" => " ".to_string(),
            other => other.to_string(),
        };
        KeyEvent {
            key,
            ctrl: self.has(Modifier::Ctrl),
            meta: self.has(Modifier::Cmd),
            alt: self.has(Modifier::Alt),
            shift: self.has(Modifier::Shift),
            ..Default::default()
        }
    }
}

fn modifier_bit(modifier: Modifier) -> u8 {
    match modifier {
        Modifier::Ctrl => MOD_CTRL,
        Modifier::Cmd => MOD_CMD,
        Modifier::Alt => MOD_ALT,
        Modifier::Shift => MOD_SHIFT,
    }
}

impl fmt::Display for Chord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&keybind_to_display(&self.to_keybind()))
    }
}

impl FromStr for Chord {
    type Err = PlatformError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_keybind(s).map(|kb| Chord::from_keybind(&kb))
    }
}

/// Convert a key event into its canonical [`Chord`].
///
/// Returns `None` for a bare modifier press and for events without key
/// information. Pure; the event is not modified.
pub fn normalize(event: &KeyEvent) -> Option<Chord> {
    if event.key.is_empty() || BARE_MODIFIERS.contains(&event.key.as_str()) {
        return None;
    }
    Some(Chord::from_parts(
        event.ctrl,
        event.meta,
        event.alt,
        event.shift,
        normalize_key(&event.key),
    ))
}

/// Normalize a host key value to the name used in chords.
///
/// Space and the arrow keys are renamed; everything else has its first
/// character upper-cased and the rest left alone.
pub fn normalize_key(key: &str) -> String {
    match key {
        " " => "Space".to_string(),
        "ArrowUp" => "Up".to_string(),
        "ArrowDown" => "Down".to_string(),
        "ArrowLeft" => "Left".to_string(),
        "ArrowRight" => "Right".to_string(),
        _ => {
            let mut chars = key.chars();
            match chars.next() {
                Some(c) => {
                    let upper: String = c.to_uppercase().collect();
                    format!("{upper}{}", chars.as_str())
                }
                None => String::new(),
            }
        }
    }
}
