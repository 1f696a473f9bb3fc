use std::cell::RefCell;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use dashkeys_common::PlatformError;

/// Raw string key-value store underneath [`super::StorageService`].
pub trait StorageBackend {
    fn read(&self, key: &str) -> Result<Option<String>, PlatformError>;
    fn write(&self, key: &str, value: &str) -> Result<(), PlatformError>;
    fn delete(&self, key: &str) -> Result<(), PlatformError>;
    fn keys(&self) -> Result<Vec<String>, PlatformError>;
}

/// Process-local store. Contents are lost on exit.
#[derive(Debug, Default)]
pub struct MemoryBackend {
    items: RefCell<BTreeMap<String, String>>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StorageBackend for MemoryBackend {
    fn read(&self, key: &str) -> Result<Option<String>, PlatformError> {
        Ok(self.items.borrow().get(key).cloned())
    }

    fn write(&self, key: &str, value: &str) -> Result<(), PlatformError> {
        self.items
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn delete(&self, key: &str) -> Result<(), PlatformError> {
        self.items.borrow_mut().remove(key);
        Ok(())
    }

    fn keys(&self) -> Result<Vec<String>, PlatformError> {
        Ok(self.items.borrow().keys().cloned().collect())
    }
}

/// Store backed by one JSON object file. Every mutation rewrites the file.
#[derive(Debug)]
pub struct FileBackend {
    path: PathBuf,
    items: RefCell<BTreeMap<String, String>>,
}

impl FileBackend {
    /// Open the store at `path`. A missing file starts empty and is created
    /// on the first write.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, PlatformError> {
        let path = path.into();
        let items = if path.exists() {
            let content = fs::read_to_string(&path)
                .map_err(|e| PlatformError::Storage(format!("{}: {e}", path.display())))?;
            if content.trim().is_empty() {
                BTreeMap::new()
            } else {
                serde_json::from_str(&content)
                    .map_err(|e| PlatformError::Storage(format!("{}: {e}", path.display())))?
            }
        } else {
            BTreeMap::new()
        };
        tracing::debug!(path = %path.display(), entries = items.len(), "storage opened");
        Ok(Self {
            path,
            items: RefCell::new(items),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write `items` to disk. The in-memory map is only replaced by the
    /// caller once this succeeds.
    fn flush(&self, items: &BTreeMap<String, String>) -> Result<(), PlatformError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| PlatformError::Storage(e.to_string()))?;
        }
        let json =
            serde_json::to_string_pretty(items).map_err(|e| PlatformError::Storage(e.to_string()))?;
        fs::write(&self.path, json)
            .map_err(|e| PlatformError::Storage(format!("{}: {e}", self.path.display())))
    }

    fn commit<F>(&self, change: F) -> Result<(), PlatformError>
    where
        F: FnOnce(&mut BTreeMap<String, String>) -> bool,
    {
        let mut candidate = self.items.borrow().clone();
        if !change(&mut candidate) {
            return Ok(());
        }
        self.flush(&candidate)?;
        *self.items.borrow_mut() = candidate;
        Ok(())
    }
}

impl StorageBackend for FileBackend {
    fn read(&self, key: &str) -> Result<Option<String>, PlatformError> {
        Ok(self.items.borrow().get(key).cloned())
    }

    fn write(&self, key: &str, value: &str) -> Result<(), PlatformError> {
        self.commit(|items| {
            items.insert(key.to_string(), value.to_string());
            true
        })
    }

    fn delete(&self, key: &str) -> Result<(), PlatformError> {
        self.commit(|items| items.remove(key).is_some())
    }

    fn keys(&self) -> Result<Vec<String>, PlatformError> {
        Ok(self.items.borrow().keys().cloned().collect())
    }
}
