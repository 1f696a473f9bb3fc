use serde::{Deserialize, Serialize};

mod command_enum;
mod labels;

pub use command_enum::*;

/// The fixed top-level dashboard views reachable by shortcut.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum View {
    Todos,
    Analytics,
    Widgets,
    Profile,
    Settings,
}

impl View {
    pub const ALL: [View; 5] = [
        View::Todos,
        View::Analytics,
        View::Widgets,
        View::Profile,
        View::Settings,
    ];

    /// Route path the view is mounted at.
    pub fn path(&self) -> &'static str {
        match self {
            View::Todos => "/todos",
            View::Analytics => "/analytics",
            View::Widgets => "/widgets",
            View::Profile => "/profile",
            View::Settings => "/settings",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            View::Todos => "Todos",
            View::Analytics => "Analytics",
            View::Widgets => "Widgets",
            View::Profile => "Profile",
            View::Settings => "Settings",
        }
    }
}
