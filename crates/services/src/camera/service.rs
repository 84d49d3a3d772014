use std::sync::Arc;

use tracing::warn;

use dashtour_core::model::CameraPrefs;
use storage::repository::CameraPrefsRepository;

use crate::error::CameraError;
use super::capability::CameraAccess;
use super::sequencer::CameraSequencer;

/// UI-facing handle to the camera subsystem.
///
/// Screens get a fresh `CameraSequencer` per mount (the session holding a
/// stream is never shared across components), while the sticky preference
/// operations work without one so the denial screen can flip modes too.
#[derive(Clone)]
pub struct CameraService {
    access: Arc<dyn CameraAccess>,
    prefs: Arc<dyn CameraPrefsRepository>,
}

impl CameraService {
    #[must_use]
    pub fn new(access: Arc<dyn CameraAccess>, prefs: Arc<dyn CameraPrefsRepository>) -> Self {
        Self { access, prefs }
    }

    /// A fresh sequencer for one screen's lifetime.
    #[must_use]
    pub fn sequencer(&self) -> CameraSequencer {
        CameraSequencer::new(Arc::clone(&self.access), Arc::clone(&self.prefs))
    }

    /// Load the sticky preferences, defaulting when storage misbehaves.
    pub async fn load_prefs(&self) -> CameraPrefs {
        match self.prefs.load_prefs().await {
            Ok(prefs) => prefs,
            Err(err) => {
                warn!(error = %err, "camera prefs unavailable, assuming defaults");
                CameraPrefs::default()
            }
        }
    }

    /// Persist camera-free mode.
    ///
    /// # Errors
    ///
    /// Returns `CameraError::Prefs` when the sentinel cannot be stored.
    pub async fn enable_fallback(&self) -> Result<CameraPrefs, CameraError> {
        let mut prefs = self.load_prefs().await;
        prefs.fallback_mode = true;
        self.prefs.save_prefs(&prefs).await?;
        Ok(prefs)
    }

    /// Persist the simulated-camera test mode.
    ///
    /// # Errors
    ///
    /// Returns `CameraError::Prefs` when the sentinel cannot be stored.
    pub async fn enable_test_mode(&self) -> Result<CameraPrefs, CameraError> {
        let mut prefs = self.load_prefs().await;
        prefs.test_mode = true;
        self.prefs.save_prefs(&prefs).await?;
        Ok(prefs)
    }

    /// Clear both sticky modes so the next mount tries the live camera
    /// again ("try camera again" from the fallback panel).
    ///
    /// # Errors
    ///
    /// Returns `CameraError::Prefs` when the keys cannot be removed.
    pub async fn reset_modes(&self) -> Result<CameraPrefs, CameraError> {
        let prefs = CameraPrefs::default();
        self.prefs.save_prefs(&prefs).await?;
        Ok(prefs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::camera::SimulatedCamera;
    use storage::repository::InMemoryRepository;

    fn service() -> CameraService {
        CameraService::new(
            Arc::new(SimulatedCamera::new()),
            Arc::new(InMemoryRepository::new()),
        )
    }

    #[tokio::test]
    async fn modes_persist_and_reset() {
        let service = service();
        assert_eq!(service.load_prefs().await, CameraPrefs::default());

        let prefs = service.enable_fallback().await.unwrap();
        assert!(prefs.fallback_mode);

        let prefs = service.enable_test_mode().await.unwrap();
        assert!(prefs.fallback_mode);
        assert!(prefs.test_mode);

        let prefs = service.reset_modes().await.unwrap();
        assert_eq!(prefs, CameraPrefs::default());
        assert_eq!(service.load_prefs().await, CameraPrefs::default());
    }
}
