//! Default dashboard shortcuts, built from the `[keybinds]` config section.

use std::collections::HashMap;
use std::rc::Rc;

use dashkeys_common::{AppEvent, Command, EventBus, View};
use dashkeys_config::schema::KeybindConfig;

use crate::input::Chord;
use crate::keymap::Modifier;
use crate::navigation::NavigationBridge;

use super::guard::InputGuard;
use super::help::HelpGroup;
use super::registry::{ShortcutAction, ShortcutRegistry};

/// Every configured chord list paired with the command it triggers.
pub fn command_table(config: &KeybindConfig) -> Vec<(&[String], Command)> {
    vec![
        (config.go_to_todos.as_slice(), Command::GoTo(View::Todos)),
        (config.go_to_analytics.as_slice(), Command::GoTo(View::Analytics)),
        (config.go_to_widgets.as_slice(), Command::GoTo(View::Widgets)),
        (config.go_to_profile.as_slice(), Command::GoTo(View::Profile)),
        (config.go_to_settings.as_slice(), Command::GoTo(View::Settings)),
        (config.focus_search.as_slice(), Command::FocusSearch),
        (config.show_shortcuts.as_slice(), Command::ShowShortcuts),
        (config.toggle_sidebar.as_slice(), Command::ToggleSidebar),
        (config.toggle_theme.as_slice(), Command::ToggleTheme),
        (config.close_modal.as_slice(), Command::CloseModals),
    ]
}

/// The action a command runs: one broadcast on the bus.
pub fn command_action(command: Command, bus: &EventBus) -> ShortcutAction {
    let event = match command {
        Command::GoTo(view) => {
            let bridge = NavigationBridge::new(bus.clone());
            return Rc::new(move || bridge.navigate(view.path()));
        }
        Command::FocusSearch => AppEvent::FocusSearch,
        Command::ShowShortcuts => AppEvent::ShowShortcuts,
        Command::ToggleSidebar => AppEvent::ToggleSidebar {
            source: "keyboard".into(),
        },
        Command::ToggleTheme => AppEvent::ToggleTheme,
        Command::CloseModals => AppEvent::CloseModals,
    };
    let bus = bus.clone();
    Rc::new(move || {
        bus.publish(event.clone());
    })
}

/// Overlay description for a chord: the command label, with " (Mac)" on
/// the Cmd variant of a platform pair.
pub fn describe(command: Command, chord: &Chord) -> String {
    if chord.has(Modifier::Cmd) {
        format!("{} (Mac)", command.label())
    } else {
        command.label().to_string()
    }
}

/// Two commands configured with spellings of the same chord.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChordConflict {
    pub chord: Chord,
    /// The command that keeps the chord (earlier in command order).
    pub kept: Command,
    pub dropped: Command,
}

/// Chords claimed by more than one command once parsed, so
/// `Shift+Ctrl+T` and `Ctrl+Shift+T` collide. Unparsable entries are
/// ignored here.
pub fn chord_conflicts(config: &KeybindConfig) -> Vec<ChordConflict> {
    let mut owners: HashMap<Chord, Command> = HashMap::new();
    let mut conflicts = Vec::new();

    for (chords, command) in command_table(config) {
        for chord in chords.iter().filter_map(|s| s.parse::<Chord>().ok()) {
            match owners.get(&chord) {
                Some(&owner) if owner != command => conflicts.push(ChordConflict {
                    chord,
                    kept: owner,
                    dropped: command,
                }),
                Some(_) => {}
                None => {
                    owners.insert(chord, command);
                }
            }
        }
    }

    conflicts
}

/// Register every configured default shortcut.
///
/// Unparsable chords are logged and skipped. A chord already taken by an
/// earlier command stays with that command and the later entry is logged
/// and skipped. Configured focus-search chords are added to the guard's
/// allow-list so search stays reachable while typing. Returns the number
/// of bindings registered.
pub fn install_defaults(
    registry: &mut ShortcutRegistry,
    guard: &mut InputGuard,
    config: &KeybindConfig,
    bus: &EventBus,
) -> usize {
    let mut owners: HashMap<Chord, Command> = HashMap::new();

    for (chords, command) in command_table(config) {
        let action = command_action(command, bus);
        for binding_str in chords {
            let chord = match binding_str.parse::<Chord>() {
                Ok(chord) => chord,
                Err(e) => {
                    tracing::warn!("invalid keybind '{binding_str}': {e}");
                    continue;
                }
            };
            if let Some(&owner) = owners.get(&chord) {
                if owner != command {
                    tracing::warn!(
                        chord = %chord,
                        kept = owner.label(),
                        dropped = command.label(),
                        "keybind '{binding_str}' conflicts with an earlier binding"
                    );
                }
                continue;
            }
            if command == Command::FocusSearch {
                guard.allow(chord.clone());
            }
            let description = describe(command, &chord);
            registry.register_action(chord.clone(), Rc::clone(&action), description);
            owners.insert(chord, command);
        }
    }

    owners.len()
}

/// Overlay sections (`Navigation`, `Actions`, `General`) for the configured
/// chords, in command order.
pub fn help_groups(config: &KeybindConfig) -> Vec<HelpGroup> {
    let mut groups: Vec<HelpGroup> = Vec::new();

    for (chords, command) in command_table(config) {
        let parsed = chords.iter().filter_map(|s| s.parse::<Chord>().ok());
        match groups.iter().position(|g| g.title == command.group()) {
            Some(i) => groups[i].chords.extend(parsed),
            None => groups.push(HelpGroup {
                title: command.group().to_string(),
                chords: parsed.collect(),
            }),
        }
    }

    groups
}
