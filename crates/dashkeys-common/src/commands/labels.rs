use super::{Command, View};

impl Command {
    /// Human-readable description shown in the shortcuts overlay.
    pub fn label(&self) -> &'static str {
        match self {
            Command::GoTo(View::Todos) => "Go to Todos",
            Command::GoTo(View::Analytics) => "Go to Analytics",
            Command::GoTo(View::Widgets) => "Go to Widgets",
            Command::GoTo(View::Profile) => "Go to Profile",
            Command::GoTo(View::Settings) => "Go to Settings",
            Command::FocusSearch => "Focus search",
            Command::ShowShortcuts => "Show keyboard shortcuts",
            Command::ToggleSidebar => "Toggle sidebar",
            Command::ToggleTheme => "Toggle theme",
            Command::CloseModals => "Close modal/dropdown",
        }
    }

    /// Overlay section the command is listed under.
    pub fn group(&self) -> &'static str {
        match self {
            Command::GoTo(_) => "Navigation",
            Command::CloseModals => "General",
            _ => "Actions",
        }
    }

    /// All commands in overlay order.
    pub fn all() -> Vec<Command> {
        let mut commands: Vec<Command> = View::ALL.iter().map(|v| Command::GoTo(*v)).collect();
        commands.extend([
            Command::FocusSearch,
            Command::ShowShortcuts,
            Command::ToggleSidebar,
            Command::ToggleTheme,
            Command::CloseModals,
        ]);
        commands
    }
}
