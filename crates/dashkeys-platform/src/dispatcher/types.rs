use crate::input::Chord;
use crate::transient::TransientId;

/// What a single keydown dispatch did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DispatchOutcome {
    /// The dispatcher is disabled; the event passed through untouched.
    Disabled,
    /// The event did not form a chord (bare modifier, no key).
    Ignored,
    /// Escape closed the top-most transient UI.
    ClosedTransient(TransientId),
    /// Focus is in a text field and the chord is not allow-listed.
    Suppressed(Chord),
    /// A binding matched and its action ran.
    Invoked(Chord),
    /// No binding for the chord; the event proceeds normally.
    Unmatched(Chord),
}

impl DispatchOutcome {
    /// Whether the event was consumed (default prevented, propagation stopped).
    pub fn consumed(&self) -> bool {
        matches!(
            self,
            DispatchOutcome::ClosedTransient(_) | DispatchOutcome::Invoked(_)
        )
    }

    pub fn chord(&self) -> Option<&Chord> {
        match self {
            DispatchOutcome::Suppressed(c)
            | DispatchOutcome::Invoked(c)
            | DispatchOutcome::Unmatched(c) => Some(c),
            _ => None,
        }
    }
}

impl std::fmt::Display for DispatchOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DispatchOutcome::Disabled => write!(f, "disabled"),
            DispatchOutcome::Ignored => write!(f, "ignored"),
            DispatchOutcome::ClosedTransient(id) => write!(f, "closed transient {id}"),
            DispatchOutcome::Suppressed(c) => write!(f, "suppressed {c}"),
            DispatchOutcome::Invoked(c) => write!(f, "invoked {c}"),
            DispatchOutcome::Unmatched(c) => write!(f, "unmatched {c}"),
        }
    }
}
