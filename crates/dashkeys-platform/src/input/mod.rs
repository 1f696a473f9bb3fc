//! Key events and chord normalization.
//!
//! The host binding layer turns its native keydown into a [`KeyEvent`];
//! [`normalize`] maps it to the canonical [`Chord`] the registry is keyed by.

mod chord;
mod key_event;

pub use chord::{normalize, normalize_key, Chord};
pub use key_event::{FocusContext, FocusKind, KeyEvent};
