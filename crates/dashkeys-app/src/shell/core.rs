//! DashboardShell struct definition and constructor.

use std::cell::RefCell;
use std::rc::Rc;

use tokio::sync::broadcast;

use dashkeys_common::{AppEvent, DashkeysError, EventBus};
use dashkeys_config::DashkeysConfig;
use dashkeys_platform::shortcuts::{help_groups, install_defaults, InputGuard, SharedRegistry};
use dashkeys_platform::{
    Dispatcher, RootStyle, Router, RouterOutlet, ShortcutHelp, ShortcutRegistry, StorageService,
    ThemeService, TransientStack,
};

/// Transient name used for the shortcuts help overlay.
pub const HELP_OVERLAY: &str = "shortcuts-help";

/// The dashboard as seen from the keyboard: the shortcut layer plus the
/// state its events drive.
pub struct DashboardShell {
    pub(super) config: DashkeysConfig,
    pub(super) events: broadcast::Receiver<AppEvent>,
    pub(super) registry: SharedRegistry,
    pub(super) transients: Rc<RefCell<TransientStack>>,
    pub(super) dispatcher: Dispatcher,
    pub(super) outlet: RouterOutlet,
    pub(super) theme: ThemeService,

    // Component state driven by bus events
    pub(super) sidebar_open: bool,
    pub(super) search_focused: bool,
}

impl DashboardShell {
    pub fn new(config: DashkeysConfig, storage: Rc<StorageService>) -> Result<Self, DashkeysError> {
        let bus = EventBus::default();
        let events = bus.subscribe();

        let registry = ShortcutRegistry::shared();
        let mut guard = InputGuard::default();
        let installed = install_defaults(
            &mut registry.borrow_mut(),
            &mut guard,
            &config.keybinds,
            &bus,
        );
        tracing::info!("Shortcut registry loaded ({installed} bindings)");

        let transients = Rc::new(RefCell::new(TransientStack::new()));
        let dispatcher =
            Dispatcher::new(Rc::clone(&registry), transients.clone()).with_guard(guard);

        let outlet = RouterOutlet::new(Router::dashboard()?);
        let theme = ThemeService::new(storage, RootStyle::new()).with_bus(bus);

        Ok(Self {
            config,
            events,
            registry,
            transients,
            dispatcher,
            outlet,
            theme,
            sidebar_open: true,
            search_focused: false,
        })
    }

    /// Apply the starting theme and route to the landing page.
    pub fn init(&mut self, url_theme: Option<&str>, prefers_dark: bool) -> String {
        let theme = self.theme.init(url_theme, prefers_dark);
        self.outlet.navigate("/");
        self.pump_events();
        theme
    }

    pub fn registry(&self) -> &SharedRegistry {
        &self.registry
    }

    pub fn transients(&self) -> &Rc<RefCell<TransientStack>> {
        &self.transients
    }

    pub fn outlet(&self) -> &RouterOutlet {
        &self.outlet
    }

    pub fn theme(&self) -> &ThemeService {
        &self.theme
    }

    pub fn sidebar_open(&self) -> bool {
        self.sidebar_open
    }

    pub fn search_focused(&self) -> bool {
        self.search_focused
    }

    /// The shortcuts overlay for the bindings currently registered.
    pub fn help(&self) -> ShortcutHelp {
        ShortcutHelp::from_registry(&self.registry.borrow(), &help_groups(&self.config.keybinds))
    }
}
