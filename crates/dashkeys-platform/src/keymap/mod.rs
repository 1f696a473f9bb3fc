//! Keybind strings: parsing config/CLI chord text into [`KeyBind`] values and
//! rendering them back for display.

mod display;
mod parse;
mod types;

pub use display::{keybind_to_display, keycaps};
pub use parse::parse_keybind;
pub use types::{KeyBind, Modifier};
