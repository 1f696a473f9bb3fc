//! Open transient UI (modals, dropdowns, overlays) and the Escape
//! precedence contract the dispatcher relies on.

use std::cell::RefCell;
use std::fmt;

/// Identifies one opened transient UI element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TransientId(pub u64);

impl fmt::Display for TransientId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// What the dispatcher needs to know about open transient UI.
///
/// Implementations may track a stack or query live elements; either way
/// Escape must close the most recently opened element only.
pub trait TransientLayer {
    fn has_open_transient(&self) -> bool;

    /// Close the most recently opened element, returning its id.
    fn close_topmost(&self) -> Option<TransientId>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransientEntry {
    pub id: TransientId,
    pub name: String,
}

/// Push-on-open, pop-on-close stack of transient UI.
#[derive(Debug, Default)]
pub struct TransientStack {
    entries: Vec<TransientEntry>,
    next_id: u64,
}

impl TransientStack {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a newly opened element on top of the stack.
    pub fn open(&mut self, name: impl Into<String>) -> TransientId {
        self.next_id += 1;
        let id = TransientId(self.next_id);
        let name = name.into();
        tracing::debug!(%id, name = %name, "transient opened");
        self.entries.push(TransientEntry { id, name });
        id
    }

    /// Close a specific element (outside click, close button). Returns
    /// `false` when it was not open.
    pub fn close(&mut self, id: TransientId) -> bool {
        match self.entries.iter().position(|e| e.id == id) {
            Some(pos) => {
                self.entries.remove(pos);
                true
            }
            None => false,
        }
    }

    /// Close the most recent element opened under `name`.
    pub fn close_named(&mut self, name: &str) -> Option<TransientId> {
        let pos = self.entries.iter().rposition(|e| e.name == name)?;
        Some(self.entries.remove(pos).id)
    }

    pub fn pop(&mut self) -> Option<TransientEntry> {
        self.entries.pop()
    }

    pub fn top(&self) -> Option<&TransientEntry> {
        self.entries.last()
    }

    pub fn is_open(&self, id: TransientId) -> bool {
        self.entries.iter().any(|e| e.id == id)
    }

    pub fn is_name_open(&self, name: &str) -> bool {
        self.entries.iter().any(|e| e.name == name)
    }

    /// Open elements, oldest first.
    pub fn entries(&self) -> &[TransientEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl TransientLayer for RefCell<TransientStack> {
    fn has_open_transient(&self) -> bool {
        !self.borrow().is_empty()
    }

    fn close_topmost(&self) -> Option<TransientId> {
        let entry = self.borrow_mut().pop()?;
        tracing::debug!(id = %entry.id, name = %entry.name, "transient closed");
        Some(entry.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_assigns_increasing_ids() {
        let mut stack = TransientStack::new();
        let a = stack.open("dropdown");
        let b = stack.open("modal");
        assert!(a < b);
        assert_eq!(stack.len(), 2);
        assert_eq!(stack.top().unwrap().id, b);
    }

    #[test]
    fn close_topmost_closes_most_recent_only() {
        let layer = RefCell::new(TransientStack::new());
        let a = layer.borrow_mut().open("a");
        let b = layer.borrow_mut().open("b");

        assert_eq!(layer.close_topmost(), Some(b));
        assert!(layer.borrow().is_open(a));
        assert!(layer.has_open_transient());

        assert_eq!(layer.close_topmost(), Some(a));
        assert!(!layer.has_open_transient());
        assert_eq!(layer.close_topmost(), None);
    }

    #[test]
    fn close_by_id_out_of_order() {
        let mut stack = TransientStack::new();
        let a = stack.open("a");
        let b = stack.open("b");

        assert!(stack.close(a));
        assert!(!stack.close(a));
        assert_eq!(stack.top().unwrap().id, b);
    }

    #[test]
    fn close_named_picks_latest() {
        let mut stack = TransientStack::new();
        stack.open("menu");
        let second = stack.open("menu");
        stack.open("help");

        assert_eq!(stack.close_named("menu"), Some(second));
        assert!(stack.is_name_open("menu"));
        assert_eq!(stack.close_named("missing"), None);
    }

    #[test]
    fn transient_id_display() {
        assert_eq!(TransientId(3).to_string(), "#3");
    }
}
