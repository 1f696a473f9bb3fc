use dashkeys_common::AppEvent;

use super::table::{RouteMatch, Router};

/// Renders whatever view the current location resolves to.
///
/// Consumes `Navigate` events from the bus; the history is kept so the
/// shell can report where a session went.
#[derive(Debug)]
pub struct RouterOutlet {
    router: Router,
    location: Option<RouteMatch>,
    history: Vec<String>,
}

impl RouterOutlet {
    pub fn new(router: Router) -> Self {
        Self {
            router,
            location: None,
            history: Vec::new(),
        }
    }

    /// Resolve `path` and make it the current location. A path that no
    /// route matches leaves the location unchanged.
    pub fn navigate(&mut self, path: &str) -> Option<&RouteMatch> {
        let Some(resolved) = self.router.resolve(path) else {
            tracing::warn!(path, "no route matches");
            return None;
        };
        tracing::info!(path, view = %resolved.view, "navigated");
        self.history.push(path.to_string());
        self.location = Some(resolved);
        self.location.as_ref()
    }

    /// Apply a bus event. Returns `true` when the location changed.
    pub fn handle(&mut self, event: &AppEvent) -> bool {
        match event {
            AppEvent::Navigate { path } => self.navigate(path).is_some(),
            _ => false,
        }
    }

    pub fn location(&self) -> Option<&RouteMatch> {
        self.location.as_ref()
    }

    pub fn current_view(&self) -> Option<&str> {
        self.location.as_ref().map(|m| m.view.as_str())
    }

    pub fn history(&self) -> &[String] {
        &self.history
    }

    pub fn router(&self) -> &Router {
        &self.router
    }

    pub fn router_mut(&mut self) -> &mut Router {
        &mut self.router
    }
}
