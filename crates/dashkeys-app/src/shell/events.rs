//! Bus events applied to shell state.

use tokio::sync::broadcast::error::TryRecvError;

use dashkeys_common::AppEvent;
use dashkeys_platform::{DispatchOutcome, KeyEvent};

use super::core::{DashboardShell, HELP_OVERLAY};

impl DashboardShell {
    /// Dispatch one keydown, then apply whatever its action published.
    pub fn press(&mut self, mut event: KeyEvent) -> DispatchOutcome {
        let outcome = self.dispatcher.dispatch(&mut event);
        self.pump_events();
        outcome
    }

    /// Drain pending bus events into shell state.
    pub(super) fn pump_events(&mut self) {
        loop {
            match self.events.try_recv() {
                Ok(event) => self.handle_event(event),
                Err(TryRecvError::Lagged(n)) => {
                    tracing::warn!("Event bus lagged, {n} events dropped");
                }
                Err(_) => break,
            }
        }
    }

    fn handle_event(&mut self, event: AppEvent) {
        tracing::trace!(?event, "bus event");
        match event {
            AppEvent::Navigate { .. } => {
                self.outlet.handle(&event);
            }
            AppEvent::FocusSearch => {
                self.search_focused = true;
            }
            AppEvent::ShowShortcuts => {
                let mut transients = self.transients.borrow_mut();
                if !transients.is_name_open(HELP_OVERLAY) {
                    transients.open(HELP_OVERLAY);
                }
            }
            AppEvent::ToggleSidebar { source } => {
                self.sidebar_open = !self.sidebar_open;
                tracing::debug!(%source, open = self.sidebar_open, "sidebar toggled");
            }
            AppEvent::ToggleTheme => {
                self.theme.toggle();
            }
            AppEvent::CloseModals => {
                self.search_focused = false;
            }
            AppEvent::ThemeChanged { name } => {
                tracing::debug!(theme = %name, "theme changed");
            }
            AppEvent::Unknown => {}
        }
    }
}
