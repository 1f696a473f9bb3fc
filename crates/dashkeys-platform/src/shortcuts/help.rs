//! Model of the keyboard-shortcuts help overlay.

use std::fmt::Write as _;

use crate::input::Chord;
use crate::keymap::keycaps;

use super::registry::ShortcutRegistry;

/// A titled list of chords to show together.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HelpGroup {
    pub title: String,
    pub chords: Vec<Chord>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HelpEntry {
    pub chord: Chord,
    pub description: String,
    pub keycaps: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HelpSection {
    pub title: String,
    pub entries: Vec<HelpEntry>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShortcutHelp {
    pub sections: Vec<HelpSection>,
}

impl ShortcutHelp {
    /// Build the overlay from what is registered right now. Chords in a
    /// group that have no binding are left out; empty sections are kept so
    /// the layout stays stable.
    pub fn from_registry(registry: &ShortcutRegistry, groups: &[HelpGroup]) -> Self {
        let sections = groups
            .iter()
            .map(|group| HelpSection {
                title: group.title.clone(),
                entries: group
                    .chords
                    .iter()
                    .filter_map(|chord| registry.lookup(chord))
                    .map(|binding| HelpEntry {
                        chord: binding.chord.clone(),
                        description: binding.description.clone(),
                        keycaps: keycaps(&binding.chord.to_keybind()),
                    })
                    .collect(),
            })
            .collect();
        Self { sections }
    }

    /// A single "Shortcuts" section listing every binding in registration order.
    pub fn flat(registry: &ShortcutRegistry) -> Self {
        let group = HelpGroup {
            title: "Shortcuts".into(),
            chords: registry.list().map(|b| b.chord.clone()).collect(),
        };
        Self::from_registry(registry, &[group])
    }

    pub fn len(&self) -> usize {
        self.sections.iter().map(|s| s.entries.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Plain-text rendering, one `[Key] [Caps]  description` line per entry.
    pub fn render_text(&self) -> String {
        let mut out = String::from("Keyboard Shortcuts\n");
        for section in &self.sections {
            let _ = writeln!(out, "\n{}", section.title);
            let caps: Vec<String> = section
                .entries
                .iter()
                .map(|e| e.keycaps.iter().map(|k| format!("[{k}]")).collect::<String>())
                .collect();
            let width = caps.iter().map(|c| c.chars().count()).max().unwrap_or(0);
            for (entry, caps) in section.entries.iter().zip(caps) {
                let _ = writeln!(out, "  {caps:<width$}  {}", entry.description);
            }
        }
        out
    }
}
