//! Built-in light and dark palettes.

use std::collections::BTreeMap;

/// CSS custom property name to value.
pub type Palette = BTreeMap<String, String>;

pub const LIGHT: &str = "light";
pub const DARK: &str = "dark";

/// Built-in theme names. These cannot be removed.
pub const BUILT_IN_THEMES: &[&str] = &[LIGHT, DARK];

const LIGHT_VARIABLES: &[(&str, &str)] = &[
    // Primary
    ("--color-primary", "#2196F3"),
    ("--color-primary-dark", "#1976D2"),
    ("--color-primary-light", "#64B5F6"),
    ("--color-accent", "#FF4081"),
    // Background
    ("--color-background", "#FFFFFF"),
    ("--color-surface", "#F5F5F5"),
    ("--color-surface-variant", "#FAFAFA"),
    // Text
    ("--color-text-primary", "#212121"),
    ("--color-text-secondary", "#757575"),
    ("--color-text-disabled", "#BDBDBD"),
    // Sidebar
    ("--sidebar-bg", "#FAFAFA"),
    ("--sidebar-text", "#424242"),
    ("--sidebar-hover", "#E0E0E0"),
    ("--sidebar-active", "#2196F3"),
    ("--sidebar-active-text", "#FFFFFF"),
    ("--sidebar-border", "#E0E0E0"),
    // Header
    ("--header-bg", "#FFFFFF"),
    ("--header-text", "#212121"),
    ("--header-shadow", "0 2px 4px rgba(0,0,0,0.1)"),
    // Components
    ("--button-bg", "#2196F3"),
    ("--button-text", "#FFFFFF"),
    ("--button-hover", "#1976D2"),
    ("--input-border", "#BDBDBD"),
    ("--input-focus", "#2196F3"),
    // Status
    ("--color-success", "#4CAF50"),
    ("--color-warning", "#FF9800"),
    ("--color-error", "#F44336"),
    ("--color-info", "#2196F3"),
    // Effects
    ("--shadow-sm", "0 1px 3px rgba(0,0,0,0.12)"),
    ("--shadow-md", "0 4px 6px rgba(0,0,0,0.16)"),
    ("--shadow-lg", "0 10px 20px rgba(0,0,0,0.19)"),
    ("--border-radius", "4px"),
    ("--border-radius-lg", "8px"),
    ("--transition-fast", "150ms ease-in-out"),
    ("--transition-normal", "250ms ease-in-out"),
    ("--transition-slow", "350ms ease-in-out"),
];

const DARK_VARIABLES: &[(&str, &str)] = &[
    ("--color-primary", "#64B5F6"),
    ("--color-primary-dark", "#42A5F5"),
    ("--color-primary-light", "#90CAF9"),
    ("--color-accent", "#FF4081"),
    ("--color-background", "#121212"),
    ("--color-surface", "#1E1E1E"),
    ("--color-surface-variant", "#2C2C2C"),
    ("--color-text-primary", "#FFFFFF"),
    ("--color-text-secondary", "#B0B0B0"),
    ("--color-text-disabled", "#666666"),
    ("--sidebar-bg", "#1A1A1A"),
    ("--sidebar-text", "#E0E0E0"),
    ("--sidebar-hover", "#2C2C2C"),
    ("--sidebar-active", "#64B5F6"),
    ("--sidebar-active-text", "#000000"),
    ("--sidebar-border", "#2C2C2C"),
    ("--header-bg", "#1E1E1E"),
    ("--header-text", "#FFFFFF"),
    ("--header-shadow", "0 2px 4px rgba(0,0,0,0.3)"),
    ("--button-bg", "#64B5F6"),
    ("--button-text", "#000000"),
    ("--button-hover", "#42A5F5"),
    ("--input-border", "#666666"),
    ("--input-focus", "#64B5F6"),
    ("--color-success", "#66BB6A"),
    ("--color-warning", "#FFA726"),
    ("--color-error", "#EF5350"),
    ("--color-info", "#64B5F6"),
    ("--shadow-sm", "0 1px 3px rgba(0,0,0,0.24)"),
    ("--shadow-md", "0 4px 6px rgba(0,0,0,0.32)"),
    ("--shadow-lg", "0 10px 20px rgba(0,0,0,0.38)"),
    ("--border-radius", "4px"),
    ("--border-radius-lg", "8px"),
    ("--transition-fast", "150ms ease-in-out"),
    ("--transition-normal", "250ms ease-in-out"),
    ("--transition-slow", "350ms ease-in-out"),
];

fn to_palette(variables: &[(&str, &str)]) -> Palette {
    variables
        .iter()
        .map(|(name, value)| (name.to_string(), value.to_string()))
        .collect()
}

/// Palette of a built-in theme.
pub fn built_in(name: &str) -> Option<Palette> {
    match name {
        LIGHT => Some(to_palette(LIGHT_VARIABLES)),
        DARK => Some(to_palette(DARK_VARIABLES)),
        _ => None,
    }
}

pub fn is_built_in(name: &str) -> bool {
    BUILT_IN_THEMES.contains(&name)
}
