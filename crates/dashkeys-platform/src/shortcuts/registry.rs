use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

use crate::input::Chord;

/// A parameter-free shortcut callback.
///
/// Reference-counted so a dispatch can hold on to the callback while the
/// registry is mutated from inside it.
pub type ShortcutAction = Rc<dyn Fn()>;

/// Registry handle shared by every component that contributes shortcuts.
pub type SharedRegistry = Rc<RefCell<ShortcutRegistry>>;

/// A registered chord with its action and overlay description.
#[derive(Clone)]
pub struct Binding {
    pub chord: Chord,
    pub action: ShortcutAction,
    pub description: String,
}

impl Binding {
    pub fn invoke(&self) {
        (self.action)()
    }
}

impl fmt::Debug for Binding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Binding")
            .field("chord", &self.chord.to_string())
            .field("description", &self.description)
            .finish_non_exhaustive()
    }
}

/// Maps chords to [`Binding`]s, one binding per chord.
///
/// Registration order is preserved for [`list`](Self::list); re-registering
/// a chord replaces its binding in place.
#[derive(Default)]
pub struct ShortcutRegistry {
    bindings: Vec<Binding>,
    index: HashMap<Chord, usize>,
}

impl ShortcutRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap a fresh registry for sharing.
    pub fn shared() -> SharedRegistry {
        Rc::new(RefCell::new(Self::new()))
    }

    /// Bind `chord` to `action`. An existing binding for the same chord is
    /// silently overwritten.
    pub fn register<F>(&mut self, chord: Chord, action: F, description: impl Into<String>)
    where
        F: Fn() + 'static,
    {
        self.register_action(chord, Rc::new(action), description);
    }

    /// Like [`register`](Self::register) for an already shared action.
    pub fn register_action(
        &mut self,
        chord: Chord,
        action: ShortcutAction,
        description: impl Into<String>,
    ) {
        let binding = Binding {
            chord: chord.clone(),
            action,
            description: description.into(),
        };

        match self.index.get(&chord) {
            Some(&slot) => {
                tracing::debug!(chord = %chord, "shortcut rebound");
                self.bindings[slot] = binding;
            }
            None => {
                self.index.insert(chord, self.bindings.len());
                self.bindings.push(binding);
            }
        }
    }

    /// Remove the binding for `chord`. No-op if absent.
    pub fn unregister(&mut self, chord: &Chord) {
        let Some(slot) = self.index.remove(chord) else {
            return;
        };
        self.bindings.remove(slot);
        for position in self.index.values_mut() {
            if *position > slot {
                *position -= 1;
            }
        }
    }

    pub fn lookup(&self, chord: &Chord) -> Option<&Binding> {
        self.index.get(chord).map(|&slot| &self.bindings[slot])
    }

    pub fn contains(&self, chord: &Chord) -> bool {
        self.index.contains_key(chord)
    }

    /// All bindings in registration order (for the shortcuts overlay).
    pub fn list(&self) -> impl Iterator<Item = &Binding> {
        self.bindings.iter()
    }

    /// Number of registered bindings.
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    /// Whether the registry has no bindings.
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}
