//! Namespaced, JSON-encoded persistence for dashboard state.
//!
//! Every key is stored as `{prefix}_{key}` on a [`StorageBackend`]. Reads
//! and writes never fail outward: errors are logged and reported as the
//! caller's default or `false`.

mod backend;

use std::path::PathBuf;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};

use dashkeys_common::PlatformError;
use dashkeys_config::schema::StorageConfig;

pub use backend::{FileBackend, MemoryBackend, StorageBackend};

pub struct StorageService {
    prefix: String,
    backend: Box<dyn StorageBackend>,
}

impl StorageService {
    pub fn new(prefix: impl Into<String>, backend: Box<dyn StorageBackend>) -> Self {
        Self {
            prefix: prefix.into(),
            backend,
        }
    }

    pub fn in_memory(prefix: impl Into<String>) -> Self {
        Self::new(prefix, Box::new(MemoryBackend::new()))
    }

    /// Build the service described by `[storage]` in the config file.
    pub fn from_config(config: &StorageConfig) -> Result<Self, PlatformError> {
        if config.in_memory {
            return Ok(Self::in_memory(&config.prefix));
        }
        let path = match &config.path {
            Some(path) => PathBuf::from(path),
            None => crate::paths::storage_file()?,
        };
        Ok(Self::new(&config.prefix, Box::new(FileBackend::open(path)?)))
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    fn full_key(&self, key: &str) -> String {
        format!("{}_{}", self.prefix, key)
    }

    fn key_prefix(&self) -> String {
        format!("{}_", self.prefix)
    }

    /// Stored value for `key`, or `default` when it is missing, empty, or
    /// does not decode as `T`.
    pub fn get<T: DeserializeOwned>(&self, key: &str, default: T) -> T {
        let raw = match self.backend.read(&self.full_key(key)) {
            Ok(Some(raw)) if !raw.is_empty() => raw,
            Ok(_) => return default,
            Err(e) => {
                tracing::error!(key, error = %e, "storage read failed");
                return default;
            }
        };
        match serde_json::from_str(&raw) {
            Ok(value) => value,
            Err(e) => {
                tracing::error!(key, error = %e, "stored value did not decode");
                default
            }
        }
    }

    pub fn set<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> bool {
        let json = match serde_json::to_string(value) {
            Ok(json) => json,
            Err(e) => {
                tracing::error!(key, error = %e, "value did not encode");
                return false;
            }
        };
        match self.backend.write(&self.full_key(key), &json) {
            Ok(()) => true,
            Err(e) => {
                tracing::error!(key, error = %e, "storage write failed");
                false
            }
        }
    }

    pub fn remove(&self, key: &str) -> bool {
        match self.backend.delete(&self.full_key(key)) {
            Ok(()) => true,
            Err(e) => {
                tracing::error!(key, error = %e, "storage remove failed");
                false
            }
        }
    }

    pub fn has(&self, key: &str) -> bool {
        matches!(self.backend.read(&self.full_key(key)), Ok(Some(_)))
    }

    /// Remove every key under this service's prefix. Other namespaces on the
    /// same backend are left alone.
    pub fn clear(&self) -> bool {
        let result = self.backend.keys().and_then(|keys| {
            let prefix = self.key_prefix();
            keys.iter()
                .filter(|k| k.starts_with(&prefix))
                .try_for_each(|k| self.backend.delete(k))
        });
        match result {
            Ok(()) => true,
            Err(e) => {
                tracing::error!(error = %e, "storage clear failed");
                false
            }
        }
    }

    /// Everything under this prefix, keyed without it. Values that are not
    /// valid JSON come back as strings.
    pub fn get_all(&self) -> Map<String, Value> {
        let keys = match self.backend.keys() {
            Ok(keys) => keys,
            Err(e) => {
                tracing::error!(error = %e, "storage keys failed");
                return Map::new();
            }
        };
        let prefix = self.key_prefix();
        let mut items = Map::new();
        for key in keys {
            let Some(clean) = key.strip_prefix(&prefix) else {
                continue;
            };
            let Ok(Some(raw)) = self.backend.read(&key) else {
                continue;
            };
            let value: Value = serde_json::from_str(&raw).unwrap_or(Value::String(raw));
            items.insert(clean.to_string(), value);
        }
        items
    }
}

impl std::fmt::Debug for StorageService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StorageService")
            .field("prefix", &self.prefix)
            .finish_non_exhaustive()
    }
}
