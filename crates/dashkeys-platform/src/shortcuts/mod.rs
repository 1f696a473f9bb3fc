//! Shortcut registry, input guard, default bindings, and the help overlay.

mod defaults;
mod guard;
mod help;
mod registry;

pub use defaults::{
    chord_conflicts, command_action, command_table, describe, help_groups, install_defaults,
    ChordConflict,
};
pub use guard::InputGuard;
pub use help::{HelpEntry, HelpGroup, HelpSection, ShortcutHelp};
pub use registry::{Binding, SharedRegistry, ShortcutAction, ShortcutRegistry};
