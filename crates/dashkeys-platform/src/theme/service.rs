use std::collections::BTreeMap;
use std::rc::Rc;

use dashkeys_common::{AppEvent, EventBus, PlatformError};

use super::palettes::{self, Palette, BUILT_IN_THEMES, DARK, LIGHT};
use super::sink::{CssVariableSink, RootStyle};
use crate::storage::StorageService;

/// Storage key of the persisted theme choice.
const THEME_KEY: &str = "theme";
/// Storage key prefix of persisted custom palettes.
const CUSTOM_PREFIX: &str = "custom_theme_";
/// Root attribute carrying the active theme name.
const THEME_ATTRIBUTE: &str = "data-theme";

/// Handle returned by [`ThemeService::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

type ThemeListener = Box<dyn Fn(&str)>;

/// Holds the known palettes, applies one to a [`CssVariableSink`], and
/// remembers the choice in storage.
pub struct ThemeService<S: CssVariableSink = RootStyle> {
    themes: BTreeMap<String, Palette>,
    current: Option<String>,
    storage: Rc<StorageService>,
    sink: S,
    bus: Option<EventBus>,
    listeners: Vec<(ListenerId, ThemeListener)>,
    next_listener: u64,
}

impl<S: CssVariableSink> ThemeService<S> {
    pub fn new(storage: Rc<StorageService>, sink: S) -> Self {
        let themes = BUILT_IN_THEMES
            .iter()
            .filter_map(|name| palettes::built_in(name).map(|p| (name.to_string(), p)))
            .collect();
        Self {
            themes,
            current: None,
            storage,
            sink,
            bus: None,
            listeners: Vec::new(),
            next_listener: 0,
        }
    }

    /// Also announce changes as [`AppEvent::ThemeChanged`].
    pub fn with_bus(mut self, bus: EventBus) -> Self {
        self.bus = Some(bus);
        self
    }

    /// Theme to start with: a known `url_theme`, then the stored choice,
    /// then the system preference.
    pub fn preferred_theme(&self, url_theme: Option<&str>, prefers_dark: bool) -> String {
        if let Some(name) = url_theme.filter(|n| self.themes.contains_key(*n)) {
            return name.to_string();
        }
        let saved: Option<String> = self.storage.get(THEME_KEY, None);
        if let Some(name) = saved.filter(|n| self.themes.contains_key(n)) {
            return name;
        }
        let fallback = if prefers_dark { DARK } else { LIGHT };
        fallback.to_string()
    }

    /// Load stored custom palettes and apply the preferred theme.
    pub fn init(&mut self, url_theme: Option<&str>, prefers_dark: bool) -> String {
        self.load_custom_themes();
        let name = self.preferred_theme(url_theme, prefers_dark);
        if let Err(e) = self.apply(&name) {
            tracing::error!(error = %e, "initial theme not applied");
        }
        name
    }

    /// Set every variable of `name` on the sink, tag the root, persist the
    /// choice and notify subscribers.
    pub fn apply(&mut self, name: &str) -> Result<(), PlatformError> {
        let palette = self
            .themes
            .get(name)
            .ok_or_else(|| PlatformError::UnknownTheme(name.to_string()))?;

        for (property, value) in palette {
            self.sink.set_property(property, value);
        }
        self.sink.set_attribute(THEME_ATTRIBUTE, name);
        self.storage.set(THEME_KEY, name);
        self.current = Some(name.to_string());
        tracing::info!(theme = name, "theme applied");

        for (_, listener) in &self.listeners {
            listener(name);
        }
        if let Some(bus) = &self.bus {
            bus.publish(AppEvent::ThemeChanged {
                name: name.to_string(),
            });
        }
        Ok(())
    }

    /// Switch light to dark; anything else goes to light.
    pub fn toggle(&mut self) -> String {
        let next = if self.current.as_deref() == Some(LIGHT) {
            DARK
        } else {
            LIGHT
        };
        if let Err(e) = self.apply(next) {
            tracing::error!(error = %e, "toggle failed");
        }
        next.to_string()
    }

    pub fn current(&self) -> Option<&str> {
        self.current.as_deref()
    }

    pub fn palette(&self, name: &str) -> Option<&Palette> {
        self.themes.get(name)
    }

    /// Register (or overwrite) a palette and persist it.
    pub fn add_custom_theme(&mut self, name: &str, palette: Palette) {
        if self.themes.contains_key(name) {
            tracing::warn!(theme = name, "theme already exists and will be overwritten");
        }
        self.storage.set(&format!("{CUSTOM_PREFIX}{name}"), &palette);
        self.themes.insert(name.to_string(), palette);
    }

    pub fn remove_custom_theme(&mut self, name: &str) -> Result<(), PlatformError> {
        if palettes::is_built_in(name) {
            return Err(PlatformError::ProtectedTheme(name.to_string()));
        }
        self.themes.remove(name);
        self.storage.remove(&format!("{CUSTOM_PREFIX}{name}"));
        Ok(())
    }

    /// Pick up custom palettes persisted by earlier sessions. Returns how
    /// many were loaded.
    pub fn load_custom_themes(&mut self) -> usize {
        let mut loaded = 0;
        for (key, value) in self.storage.get_all() {
            let Some(name) = key.strip_prefix(CUSTOM_PREFIX) else {
                continue;
            };
            match serde_json::from_value::<Palette>(value) {
                Ok(palette) => {
                    self.themes.insert(name.to_string(), palette);
                    loaded += 1;
                }
                Err(e) => tracing::warn!(theme = name, error = %e, "stored theme skipped"),
            }
        }
        loaded
    }

    /// Built-in themes first, then custom ones by name.
    pub fn available_themes(&self) -> Vec<&str> {
        let mut names: Vec<&str> = BUILT_IN_THEMES
            .iter()
            .copied()
            .filter(|n| self.themes.contains_key(*n))
            .collect();
        names.extend(
            self.themes
                .keys()
                .map(String::as_str)
                .filter(|n| !palettes::is_built_in(n)),
        );
        names
    }

    pub fn export_theme(&self, name: &str) -> Option<String> {
        let palette = self.themes.get(name)?;
        serde_json::to_string_pretty(palette).ok()
    }

    /// Parse a palette exported by [`Self::export_theme`] and add it.
    pub fn import_theme(&mut self, name: &str, json: &str) -> Result<(), PlatformError> {
        let palette: Palette =
            serde_json::from_str(json).map_err(|e| PlatformError::InvalidTheme {
                name: name.to_string(),
                reason: e.to_string(),
            })?;
        self.add_custom_theme(name, palette);
        Ok(())
    }

    pub fn subscribe<F>(&mut self, listener: F) -> ListenerId
    where
        F: Fn(&str) + 'static,
    {
        self.next_listener += 1;
        let id = ListenerId(self.next_listener);
        self.listeners.push((id, Box::new(listener)));
        id
    }

    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(l, _)| *l != id);
        before != self.listeners.len()
    }

    /// Follow a system color-scheme change, unless a theme was chosen and
    /// stored. Returns the theme applied, if any.
    pub fn system_preference_changed(&mut self, prefers_dark: bool) -> Option<String> {
        if self.storage.has(THEME_KEY) {
            return None;
        }
        let name = if prefers_dark { DARK } else { LIGHT };
        self.apply(name).ok()?;
        Some(name.to_string())
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }
}
