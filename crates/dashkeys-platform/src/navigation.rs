//! Navigation bridge: turns "go to path" requests into broadcast events.
//!
//! The bridge does not know about routes. Whatever outlet subscribes to the
//! bus (see [`RouterOutlet`](crate::router::RouterOutlet)) decides what a
//! path means.

use dashkeys_common::{AppEvent, EventBus};

#[derive(Clone)]
pub struct NavigationBridge {
    bus: EventBus,
}

impl NavigationBridge {
    pub fn new(bus: EventBus) -> Self {
        Self { bus }
    }

    /// Broadcast exactly one `Navigate { path }` event. The path is not
    /// validated; with no subscriber the call has no effect.
    pub fn navigate(&self, path: &str) {
        let receivers = self.bus.publish(AppEvent::Navigate {
            path: path.to_string(),
        });
        tracing::debug!(path, receivers, "navigate");
    }
}
