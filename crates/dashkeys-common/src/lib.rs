pub mod commands;
pub mod errors;
pub mod events;

pub use commands::{Command, View};
pub use errors::{ConfigError, DashkeysError, PlatformError};
pub use events::{AppEvent, EventBus};

pub type Result<T> = std::result::Result<T, DashkeysError>;
