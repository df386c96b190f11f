//! Keyed autosave storage for in-progress form data
//!
//! `DraftStore` never reports failures to its caller: unreadable or corrupt
//! entries come back as the supplied default, and failed writes are logged and
//! dropped so the in-memory value stays authoritative for the session.

use crate::error::StorageError;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

/// String-keyed persistence backend
pub trait Storage: Send {
    /// Read the raw value stored under `key`, if any
    fn read(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Replace the raw value stored under `key`
    fn write(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// One `<key>.json` file per key inside a directory
#[derive(Debug, Clone)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl Storage for FileStorage {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        let path = self.path_for(key);
        match fs::read_to_string(&path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(source) => Err(StorageError::Read { path, source }),
        }
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        let path = self.path_for(key);
        fs::create_dir_all(&self.dir).map_err(|source| StorageError::Write {
            path: path.clone(),
            source,
        })?;
        fs::write(&path, value).map_err(|source| StorageError::Write { path, source })
    }
}

/// In-process storage. Clones share the same entries.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    entries: Arc<Mutex<HashMap<String, String>>>,
    /// Maximum value size in bytes; larger writes fail like a full quota
    quota: Option<usize>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_quota(quota: usize) -> Self {
        Self {
            quota: Some(quota),
            ..Self::default()
        }
    }

    /// Raw stored value, bypassing deserialization
    pub fn raw(&self, key: &str) -> Option<String> {
        self.entries
            .lock()
            .ok()
            .and_then(|entries| entries.get(key).cloned())
    }

    /// Put a raw value in place, bypassing serialization
    pub fn insert_raw(&self, key: &str, value: &str) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.insert(key.to_string(), value.to_string());
        }
    }
}

impl Storage for MemoryStorage {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.raw(key))
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        if self.quota.is_some_and(|quota| value.len() > quota) {
            return Err(StorageError::QuotaExceeded(key.to_string()));
        }
        self.insert_raw(key, value);
        Ok(())
    }
}

/// Generic keyed autosave over a `Storage` backend
pub struct DraftStore {
    storage: Box<dyn Storage>,
}

impl DraftStore {
    pub fn new(storage: impl Storage + 'static) -> Self {
        Self {
            storage: Box::new(storage),
        }
    }

    /// Load the value under `key`, or `default` if it is missing or unreadable
    pub fn get<T: DeserializeOwned>(&self, key: &str, default: T) -> T {
        let raw = match self.storage.read(key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return default,
            Err(e) => {
                tracing::warn!("Draft read failed, using defaults: {e}");
                return default;
            }
        };

        match serde_json::from_str(&raw) {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!("Discarding corrupt draft under {key}: {e}");
                default
            }
        }
    }

    /// Serialize `value` and persist it under `key`. Failures are swallowed.
    pub fn set<T: Serialize>(&mut self, key: &str, value: &T) {
        let raw = match serde_json::to_string(value) {
            Ok(raw) => raw,
            Err(e) => {
                tracing::warn!("Could not serialize draft for {key}: {e}");
                return;
            }
        };

        if let Err(e) = self.storage.write(key, &raw) {
            tracing::warn!("Draft write failed, keeping in-memory value: {e}");
        }
    }
}
