use crate::input::{Chord, FocusContext};

/// Keeps shortcuts from hijacking typing.
///
/// While a text-entry control has focus only allow-listed chords reach the
/// registry.
#[derive(Debug, Clone)]
pub struct InputGuard {
    allowed: Vec<Chord>,
}

impl InputGuard {
    pub fn new(allowed: Vec<Chord>) -> Self {
        Self { allowed }
    }

    /// Add a chord to the allow-list (e.g. a reconfigured search chord).
    pub fn allow(&mut self, chord: Chord) {
        if !self.allowed.contains(&chord) {
            self.allowed.push(chord);
        }
    }

    pub fn allowed(&self) -> &[Chord] {
        &self.allowed
    }

    pub fn should_suppress(&self, focus: &FocusContext, chord: &Chord) -> bool {
        focus.is_text_entry() && !self.allowed.contains(chord)
    }
}

impl Default for InputGuard {
    /// Escape plus both focus-search chords.
    fn default() -> Self {
        Self::new(vec![
            Chord::from_parts(false, false, false, false, "Escape"),
            Chord::from_parts(true, false, false, false, "K"),
            Chord::from_parts(false, true, false, false, "K"),
        ])
    }
}
