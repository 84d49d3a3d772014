use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use thiserror::Error;

use dashtour_core::model::{CameraPrefs, ProgressSnapshot};

/// Errors surfaced by storage adapters.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StorageError {
    #[error("not found")]
    NotFound,

    #[error("connection error: {0}")]
    Connection(String),

    #[error("serialization error: {0}")]
    Serialization(String),
}

/// Well-known storage keys.
///
/// Absence of a key always means the default: no recorded progress,
/// camera required.
pub mod keys {
    pub const TUTORIAL_PROGRESS: &str = "tutorial_progress";
    pub const FALLBACK_MODE: &str = "fallback_mode";
    pub const TEST_MODE: &str = "test_mode";

    /// Sentinel value stored for boolean mode keys.
    pub const SENTINEL_TRUE: &str = "true";
}

/// Repository contract for the coarse tutorial progress snapshot.
///
/// Last-writer-wins, no locking: single-user, single-window assumption.
#[async_trait]
pub trait ProgressRepository: Send + Sync {
    /// Fetch the persisted snapshot, or `None` when nothing was saved yet.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` on backend failures.
    async fn load_progress(&self) -> Result<Option<ProgressSnapshot>, StorageError>;

    /// Persist or replace the snapshot.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the snapshot cannot be stored.
    async fn save_progress(&self, snapshot: &ProgressSnapshot) -> Result<(), StorageError>;

    /// Remove any persisted snapshot (used by "restart tutorial").
    ///
    /// # Errors
    ///
    /// Returns `StorageError` on backend failures.
    async fn clear_progress(&self) -> Result<(), StorageError>;
}

/// Repository contract for sticky camera mode preferences.
#[async_trait]
pub trait CameraPrefsRepository: Send + Sync {
    /// Fetch the persisted preferences; missing keys map to defaults.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` on backend failures.
    async fn load_prefs(&self) -> Result<CameraPrefs, StorageError>;

    /// Persist the preferences. A false flag removes its sentinel key.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the preferences cannot be stored.
    async fn save_prefs(&self, prefs: &CameraPrefs) -> Result<(), StorageError>;
}

/// Simple in-memory key/value repository for testing and prototyping.
///
/// Values are stored in the same string shapes the SQLite backend uses,
/// so both backends exercise the same serialization paths.
#[derive(Clone, Default)]
pub struct InMemoryRepository {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl InMemoryRepository {
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let guard = self
            .entries
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        Ok(guard.get(key).cloned())
    }

    fn put(&self, key: &str, value: String) -> Result<(), StorageError> {
        let mut guard = self
            .entries
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        guard.insert(key.to_owned(), value);
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        let mut guard = self
            .entries
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        guard.remove(key);
        Ok(())
    }
}

#[async_trait]
impl ProgressRepository for InMemoryRepository {
    async fn load_progress(&self) -> Result<Option<ProgressSnapshot>, StorageError> {
        let Some(raw) = self.get(keys::TUTORIAL_PROGRESS)? else {
            return Ok(None);
        };
        serde_json::from_str(&raw)
            .map(Some)
            .map_err(|e| StorageError::Serialization(e.to_string()))
    }

    async fn save_progress(&self, snapshot: &ProgressSnapshot) -> Result<(), StorageError> {
        let raw = serde_json::to_string(snapshot)
            .map_err(|e| StorageError::Serialization(e.to_string()))?;
        self.put(keys::TUTORIAL_PROGRESS, raw)
    }

    async fn clear_progress(&self) -> Result<(), StorageError> {
        self.remove(keys::TUTORIAL_PROGRESS)
    }
}

#[async_trait]
impl CameraPrefsRepository for InMemoryRepository {
    async fn load_prefs(&self) -> Result<CameraPrefs, StorageError> {
        let fallback_mode =
            self.get(keys::FALLBACK_MODE)?.as_deref() == Some(keys::SENTINEL_TRUE);
        let test_mode = self.get(keys::TEST_MODE)?.as_deref() == Some(keys::SENTINEL_TRUE);
        Ok(CameraPrefs {
            fallback_mode,
            test_mode,
        })
    }

    async fn save_prefs(&self, prefs: &CameraPrefs) -> Result<(), StorageError> {
        if prefs.fallback_mode {
            self.put(keys::FALLBACK_MODE, keys::SENTINEL_TRUE.to_owned())?;
        } else {
            self.remove(keys::FALLBACK_MODE)?;
        }
        if prefs.test_mode {
            self.put(keys::TEST_MODE, keys::SENTINEL_TRUE.to_owned())?;
        } else {
            self.remove(keys::TEST_MODE)?;
        }
        Ok(())
    }
}

/// Aggregates the tutorial's repositories behind trait objects for easy
/// backend swapping.
#[derive(Clone)]
pub struct Storage {
    pub progress: Arc<dyn ProgressRepository>,
    pub camera_prefs: Arc<dyn CameraPrefsRepository>,
}

impl Storage {
    #[must_use]
    pub fn in_memory() -> Self {
        let repo = InMemoryRepository::new();
        let progress: Arc<dyn ProgressRepository> = Arc::new(repo.clone());
        let camera_prefs: Arc<dyn CameraPrefsRepository> = Arc::new(repo);
        Self {
            progress,
            camera_prefs,
        }
    }
}
