use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("config parse error: {0}")]
    ParseError(String),

    #[error("config validation error: {0}")]
    ValidationError(String),
}

#[derive(Debug, thiserror::Error)]
pub enum PlatformError {
    #[error("invalid chord: {0}")]
    InvalidChord(String),

    #[error("invalid route pattern: {0}")]
    InvalidRoute(String),

    #[error("unknown theme: {0}")]
    UnknownTheme(String),

    #[error("invalid theme {name}: {reason}")]
    InvalidTheme { name: String, reason: String },

    #[error("theme is built in and cannot be removed: {0}")]
    ProtectedTheme(String),

    #[error("storage error: {0}")]
    Storage(String),

    #[error("path error: {0}")]
    PathError(String),
}

#[derive(Debug, thiserror::Error)]
pub enum DashkeysError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Platform(#[from] PlatformError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("script error on line {line}: {message}")]
    Script { line: usize, message: String },

    #[error("{0}")]
    Other(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_error_display() {
        let err = ConfigError::FileNotFound(PathBuf::from("/tmp/missing.toml"));
        assert_eq!(err.to_string(), "config file not found: /tmp/missing.toml");

        let err = ConfigError::ParseError("unexpected token".into());
        assert_eq!(err.to_string(), "config parse error: unexpected token");

        let err = ConfigError::ValidationError("duplicate keybind".into());
        assert_eq!(err.to_string(), "config validation error: duplicate keybind");
    }

    #[test]
    fn platform_error_display() {
        let err = PlatformError::InvalidChord("Ctrl+".into());
        assert_eq!(err.to_string(), "invalid chord: Ctrl+");

        let err = PlatformError::UnknownTheme("solarized".into());
        assert_eq!(err.to_string(), "unknown theme: solarized");

        let err = PlatformError::ProtectedTheme("light".into());
        assert_eq!(
            err.to_string(),
            "theme is built in and cannot be removed: light"
        );
    }

    #[test]
    fn dashkeys_error_from_config() {
        let config_err = ConfigError::ParseError("bad toml".into());
        let err: DashkeysError = config_err.into();
        assert!(matches!(err, DashkeysError::Config(_)));
        assert!(err.to_string().contains("bad toml"));
    }

    #[test]
    fn dashkeys_error_from_platform() {
        let platform_err = PlatformError::Storage("quota exceeded".into());
        let err: DashkeysError = platform_err.into();
        assert!(matches!(err, DashkeysError::Platform(_)));
        assert!(err.to_string().contains("quota exceeded"));
    }

    #[test]
    fn dashkeys_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err: DashkeysError = io_err.into();
        assert!(matches!(err, DashkeysError::Io(_)));
        assert!(err.to_string().contains("file missing"));
    }

    #[test]
    fn script_error_names_line() {
        let err = DashkeysError::Script {
            line: 4,
            message: "unknown step".into(),
        };
        assert_eq!(err.to_string(), "script error on line 4: unknown step");
    }
}
