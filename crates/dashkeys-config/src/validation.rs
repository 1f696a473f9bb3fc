//! Full configuration validation.
//!
//! Collects every problem into a single `ConfigError`.

use crate::keybinds;
use crate::schema::DashkeysConfig;
use dashkeys_common::ConfigError;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &DashkeysConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    if let Err(e) = keybinds::validate_no_duplicates(&config.keybinds) {
        errors.push(e.to_string());
    }
    if let Err(e) = keybinds::validate_not_empty(&config.keybinds) {
        errors.push(e.to_string());
    }

    if config.storage.prefix.trim().is_empty() {
        errors.push("storage.prefix must not be empty".into());
    }
    if matches!(config.storage.path.as_deref(), Some(p) if p.trim().is_empty()) {
        errors.push("storage.path must not be empty when set".into());
    }
    if matches!(config.theme.name.as_deref(), Some(n) if n.trim().is_empty()) {
        errors.push("theme.name must not be empty when set".into());
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{KeybindConfig, StorageConfig, ThemeConfig};

    #[test]
    fn default_config_is_valid() {
        assert!(validate(&DashkeysConfig::default()).is_ok());
    }

    #[test]
    fn collects_multiple_errors() {
        let config = DashkeysConfig {
            keybinds: KeybindConfig {
                toggle_theme: vec!["Escape".into()],
                ..Default::default()
            },
            storage: StorageConfig {
                prefix: "".into(),
                ..Default::default()
            },
            ..Default::default()
        };
        let err = validate(&config).unwrap_err().to_string();
        assert!(err.contains("duplicate keybind"));
        assert!(err.contains("storage.prefix"));
    }

    #[test]
    fn blank_theme_name_rejected() {
        let config = DashkeysConfig {
            theme: ThemeConfig {
                name: Some(" ".into()),
                ..Default::default()
            },
            ..Default::default()
        };
        assert!(validate(&config).is_err());
    }
}
