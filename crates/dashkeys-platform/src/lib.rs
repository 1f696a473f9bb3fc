pub mod dispatcher;
pub mod input;
pub mod keymap;
pub mod navigation;
pub mod paths;
pub mod router;
pub mod shortcuts;
pub mod storage;
pub mod theme;
pub mod transient;

pub use dispatcher::{DispatchOutcome, Dispatcher};
pub use input::{normalize, Chord, FocusContext, FocusKind, KeyEvent};
pub use keymap::{parse_keybind, KeyBind, Modifier};
pub use navigation::NavigationBridge;
pub use paths::{config_dir, data_dir, ensure_dirs, storage_file};
pub use router::{RouteMatch, Router, RouterOutlet};
pub use shortcuts::{
    install_defaults, Binding, InputGuard, SharedRegistry, ShortcutHelp, ShortcutRegistry,
};
pub use storage::{FileBackend, MemoryBackend, StorageBackend, StorageService};
pub use theme::{CssVariableSink, RootStyle, ThemeService};
pub use transient::{TransientId, TransientLayer, TransientStack};
