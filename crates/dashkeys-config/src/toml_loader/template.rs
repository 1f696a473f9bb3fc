//! Default TOML config template with inline documentation comments.

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> String {
    r##"# dashkeys configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.

[keybinds]
# Each command takes a list of chords. Modifiers: Ctrl, Cmd, Alt, Shift.
# go_to_todos = ["Alt+1"]
# go_to_analytics = ["Alt+2"]
# go_to_widgets = ["Alt+3"]
# go_to_profile = ["Alt+4"]
# go_to_settings = ["Alt+5"]
# focus_search = ["Ctrl+K", "Cmd+K"]      # also allowed while typing
# show_shortcuts = ["Ctrl+/", "Cmd+/"]
# toggle_sidebar = ["Ctrl+\\", "Cmd+\\"]
# toggle_theme = ["Ctrl+Shift+T", "Cmd+Shift+T"]
# close_modal = ["Escape"]

[storage]
# prefix = "dashboard"
# in_memory = false
# path = "/path/to/storage.json"

[theme]
# name = "dark"           # light | dark | any imported custom theme
# prefers_dark = false

[logging]
# level = "info"          # error | warn | info | debug | trace
"##
    .to_string()
}
