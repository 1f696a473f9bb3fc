use std::cell::Cell;
use std::rc::Rc;

use crate::input::{normalize, KeyEvent};
use crate::shortcuts::{InputGuard, SharedRegistry};
use crate::transient::TransientLayer;

use super::types::DispatchOutcome;

/// The single global keydown listener.
///
/// Normalizes each event, gives Escape to open transient UI first, applies
/// the input guard, and runs the matching binding.
pub struct Dispatcher {
    registry: SharedRegistry,
    transients: Rc<dyn TransientLayer>,
    guard: InputGuard,
    enabled: Cell<bool>,
}

impl Dispatcher {
    pub fn new(registry: SharedRegistry, transients: Rc<dyn TransientLayer>) -> Self {
        Self {
            registry,
            transients,
            guard: InputGuard::default(),
            enabled: Cell::new(true),
        }
    }

    pub fn with_guard(mut self, guard: InputGuard) -> Self {
        self.guard = guard;
        self
    }

    pub fn guard(&self) -> &InputGuard {
        &self.guard
    }

    pub fn guard_mut(&mut self) -> &mut InputGuard {
        &mut self.guard
    }

    pub fn registry(&self) -> &SharedRegistry {
        &self.registry
    }

    pub fn enable(&self) {
        self.enabled.set(true);
    }

    pub fn disable(&self) {
        self.enabled.set(false);
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled.get()
    }

    /// Dispatch one keydown.
    ///
    /// On a match the event's default is prevented and propagation stopped
    /// before the action runs. A panicking action is not caught.
    pub fn dispatch(&self, event: &mut KeyEvent) -> DispatchOutcome {
        if !self.enabled.get() {
            return DispatchOutcome::Disabled;
        }

        let Some(chord) = normalize(event) else {
            return DispatchOutcome::Ignored;
        };

        // At most one outcome per Escape press: open transient UI wins over
        // a registered Escape binding.
        if chord.is_escape() && self.transients.has_open_transient() {
            if let Some(id) = self.transients.close_topmost() {
                event.prevent_default();
                event.stop_propagation();
                tracing::debug!(%id, "escape closed transient");
                return DispatchOutcome::ClosedTransient(id);
            }
        }

        if self.guard.should_suppress(&event.focus, &chord) {
            tracing::trace!(chord = %chord, "suppressed in text entry");
            return DispatchOutcome::Suppressed(chord);
        }

        // Clone out of the registry so the action may mutate it.
        let binding = self.registry.borrow().lookup(&chord).cloned();
        match binding {
            Some(binding) => {
                event.prevent_default();
                event.stop_propagation();
                tracing::debug!(chord = %chord, description = %binding.description, "shortcut");
                binding.invoke();
                DispatchOutcome::Invoked(chord)
            }
            None => {
                tracing::trace!(chord = %chord, "no binding");
                DispatchOutcome::Unmatched(chord)
            }
        }
    }
}
