use serde::{Deserialize, Serialize};

/// A keyboard modifier key.
///
/// Declaration order is the canonical order modifiers appear in a chord.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Modifier {
    /// Control key on all platforms.
    Ctrl,
    /// Command key on macOS (the event's `meta` flag elsewhere).
    Cmd,
    /// Alt key (Option on macOS).
    Alt,
    /// Shift key.
    Shift,
}

impl Modifier {
    pub const ALL: [Modifier; 4] = [Modifier::Ctrl, Modifier::Cmd, Modifier::Alt, Modifier::Shift];

    pub fn name(&self) -> &'static str {
        match self {
            Modifier::Ctrl => "Ctrl",
            Modifier::Cmd => "Cmd",
            Modifier::Alt => "Alt",
            Modifier::Shift => "Shift",
        }
    }
}

/// A key binding consisting of zero or more modifiers and a key name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyBind {
    pub modifiers: Vec<Modifier>,
    pub key: String,
}
