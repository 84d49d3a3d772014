use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ProgressError {
    #[error("total module count must be > 0")]
    InvalidTotal,

    #[error("current module {current} exceeds total {total}")]
    CurrentOutOfRange { current: u32, total: u32 },
}

/// Coarse tutorial progress persisted to durable client storage.
///
/// This is the only thing that survives navigating away from a module:
/// per-module step state is deliberately in-memory only.
///
/// Serializes to the storage payload shape:
/// `{"currentModule": 3, "totalModules": 11, "lastUpdated": "..."}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressSnapshot {
    current_module: u32,
    total_modules: u32,
    last_updated: DateTime<Utc>,
}

impl ProgressSnapshot {
    /// Creates a snapshot after completing `current_module` of
    /// `total_modules`.
    ///
    /// # Errors
    ///
    /// Returns `ProgressError` if the total is zero or the current module
    /// number exceeds it. `current_module` 0 means "nothing completed yet".
    pub fn new(
        current_module: u32,
        total_modules: u32,
        last_updated: DateTime<Utc>,
    ) -> Result<Self, ProgressError> {
        if total_modules == 0 {
            return Err(ProgressError::InvalidTotal);
        }
        if current_module > total_modules {
            return Err(ProgressError::CurrentOutOfRange {
                current: current_module,
                total: total_modules,
            });
        }

        Ok(Self {
            current_module,
            total_modules,
            last_updated,
        })
    }

    #[must_use]
    pub fn current_module(&self) -> u32 {
        self.current_module
    }

    #[must_use]
    pub fn total_modules(&self) -> u32 {
        self.total_modules
    }

    #[must_use]
    pub fn last_updated(&self) -> DateTime<Utc> {
        self.last_updated
    }

    /// Progress as a whole percentage, rounded.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn percent_complete(&self) -> u32 {
        let ratio = f64::from(self.current_module) / f64::from(self.total_modules);
        (ratio * 100.0).round() as u32
    }
}

/// Sticky camera mode choices, persisted so a reload never re-prompts.
///
/// Both flags default to false; either being set bypasses live camera
/// acquisition entirely.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CameraPrefs {
    pub fallback_mode: bool,
    pub test_mode: bool,
}

impl CameraPrefs {
    /// Returns true when neither degraded mode is active.
    #[must_use]
    pub fn wants_live_camera(&self) -> bool {
        !self.fallback_mode && !self.test_mode
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::fixed_now;

    #[test]
    fn snapshot_rejects_zero_total() {
        let err = ProgressSnapshot::new(1, 0, fixed_now()).unwrap_err();
        assert_eq!(err, ProgressError::InvalidTotal);
    }

    #[test]
    fn snapshot_rejects_current_beyond_total() {
        let err = ProgressSnapshot::new(12, 11, fixed_now()).unwrap_err();
        assert_eq!(
            err,
            ProgressError::CurrentOutOfRange {
                current: 12,
                total: 11
            }
        );
    }

    #[test]
    fn snapshot_percent_rounds() {
        let snapshot = ProgressSnapshot::new(1, 3, fixed_now()).unwrap();
        assert_eq!(snapshot.percent_complete(), 33);

        let snapshot = ProgressSnapshot::new(3, 3, fixed_now()).unwrap();
        assert_eq!(snapshot.percent_complete(), 100);
    }

    #[test]
    fn snapshot_serializes_to_storage_shape() {
        let snapshot = ProgressSnapshot::new(3, 11, fixed_now()).unwrap();
        let json = serde_json::to_value(&snapshot).unwrap();

        assert_eq!(json["currentModule"], 3);
        assert_eq!(json["totalModules"], 11);
        assert!(json["lastUpdated"].as_str().unwrap().starts_with("2023-11-14T22:13:20"));
    }

    #[test]
    fn snapshot_roundtrips_through_json() {
        let snapshot = ProgressSnapshot::new(5, 11, fixed_now()).unwrap();
        let json = serde_json::to_string(&snapshot).unwrap();
        let back: ProgressSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(back, snapshot);
    }

    #[test]
    fn prefs_default_to_live_camera() {
        let prefs = CameraPrefs::default();
        assert!(prefs.wants_live_camera());

        let prefs = CameraPrefs {
            fallback_mode: true,
            ..CameraPrefs::default()
        };
        assert!(!prefs.wants_live_camera());
    }
}
