use serde::{Deserialize, Serialize};

use super::View;

/// Every command a default shortcut can trigger.
///
/// The default-shortcut installer maps configured chords to a `Command`,
/// and each command publishes one [`AppEvent`](crate::AppEvent).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Command {
    // -- Navigation --
    GoTo(View),

    // -- Actions --
    FocusSearch,
    ShowShortcuts,
    ToggleSidebar,
    ToggleTheme,

    // -- General --
    CloseModals,
}
