/// What kind of element currently holds keyboard focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusKind {
    /// A text-entry control (`input`, `textarea`, `select`).
    TextEntry,
    /// Anything else, including no focused element.
    #[default]
    Other,
}

/// Focus information supplied by the host binding layer with each key event.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FocusContext {
    pub kind: FocusKind,
    /// Tag name of the focused element, when known.
    pub tag: Option<String>,
}

impl FocusContext {
    /// Classify a focused element by its tag name (case-insensitive).
    pub fn from_tag(tag: &str) -> Self {
        let lower = tag.to_ascii_lowercase();
        let kind = match lower.as_str() {
            "input" | "textarea" | "select" => FocusKind::TextEntry,
            _ => FocusKind::Other,
        };
        Self {
            kind,
            tag: Some(lower),
        }
    }

    pub fn text_entry() -> Self {
        Self::from_tag("input")
    }

    pub fn is_text_entry(&self) -> bool {
        self.kind == FocusKind::TextEntry
    }
}

/// A keydown event as delivered by the host.
///
/// `default_prevented` and `propagation_stopped` are written by the
/// dispatcher when a shortcut consumes the event.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyEvent {
    /// Key value as reported by the host (`"k"`, `"Escape"`, `" "`, `"ArrowUp"`).
    pub key: String,
    pub ctrl: bool,
    /// Command key on macOS.
    pub meta: bool,
    pub alt: bool,
    pub shift: bool,
    pub focus: FocusContext,
    pub default_prevented: bool,
    pub propagation_stopped: bool,
}

impl KeyEvent {
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            ..Default::default()
        }
    }

    pub fn ctrl(mut self) -> Self {
        self.ctrl = true;
        self
    }

    pub fn meta(mut self) -> Self {
        self.meta = true;
        self
    }

    pub fn alt(mut self) -> Self {
        self.alt = true;
        self
    }

    pub fn shift(mut self) -> Self {
        self.shift = true;
        self
    }

    pub fn with_focus(mut self, focus: FocusContext) -> Self {
        self.focus = focus;
        self
    }

    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    pub fn stop_propagation(&mut self) {
        self.propagation_stopped = true;
    }
}
