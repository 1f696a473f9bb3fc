use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;

/// Broadcast notifications exchanged between the shortcut layer and the
/// dashboard components that own the affected state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum AppEvent {
    Navigate { path: String },
    FocusSearch,
    ShowShortcuts,
    ToggleSidebar { source: String },
    ToggleTheme,
    CloseModals,
    ThemeChanged { name: String },
    #[serde(other)]
    Unknown,
}

/// Fire-and-forget fan-out of [`AppEvent`]s.
///
/// Publishing never blocks and never fails; with no subscriber attached the
/// event is dropped.
#[derive(Clone)]
pub struct EventBus {
    sender: broadcast::Sender<AppEvent>,
}

impl EventBus {
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<AppEvent> {
        self.sender.subscribe()
    }

    /// Returns the number of subscribers that will see the event.
    pub fn publish(&self, event: AppEvent) -> usize {
        self.sender.send(event).unwrap_or(0)
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new(64)
    }
}
