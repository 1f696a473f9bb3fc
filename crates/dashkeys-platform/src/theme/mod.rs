//! Light/dark theming over CSS custom properties.

mod palettes;
mod service;
mod sink;

pub use palettes::{built_in, is_built_in, Palette, BUILT_IN_THEMES, DARK, LIGHT};
pub use service::{ListenerId, ThemeService};
pub use sink::{CssVariableSink, RootStyle};
