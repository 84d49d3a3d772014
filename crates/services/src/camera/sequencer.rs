use std::sync::Arc;

use tracing::{debug, warn};

use dashtour_core::model::CameraPrefs;
use storage::repository::CameraPrefsRepository;

use crate::error::CameraError;
use super::capability::{CameraAccess, CameraStream, StreamConstraints};

/// Acquisition state of the camera for one screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CameraPhase {
    /// Nothing attempted yet; an explicit user gesture may be required.
    Unrequested,
    /// Enumerating devices; never prompts.
    Probing,
    /// A stream request is in flight; the permission prompt may be up.
    Requesting,
    /// A stream is live. `simulated` marks test mode's synthetic feed.
    Active { simulated: bool },
    /// The user (or platform) refused; retry needs an explicit gesture.
    Denied,
    /// Camera-free mode: static imagery plus manual advancement.
    Fallback,
}

/// Obtains a live camera stream for overlay purposes, or gracefully
/// degrades, without ever blocking the tutorial.
///
/// Owned by exactly one camera component; the held stream is released on
/// teardown and whenever leaving `Active`. Fallback and test mode are
/// sticky: once chosen they are persisted and re-applied on the next
/// mount without re-probing.
pub struct CameraSequencer {
    access: Arc<dyn CameraAccess>,
    prefs_repo: Arc<dyn CameraPrefsRepository>,
    prefs: CameraPrefs,
    phase: CameraPhase,
    stream: Option<CameraStream>,
}

impl CameraSequencer {
    #[must_use]
    pub fn new(access: Arc<dyn CameraAccess>, prefs_repo: Arc<dyn CameraPrefsRepository>) -> Self {
        Self {
            access,
            prefs_repo,
            prefs: CameraPrefs::default(),
            phase: CameraPhase::Unrequested,
            stream: None,
        }
    }

    #[must_use]
    pub fn phase(&self) -> CameraPhase {
        self.phase
    }

    #[must_use]
    pub fn prefs(&self) -> CameraPrefs {
        self.prefs
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        matches!(self.phase, CameraPhase::Active { .. })
    }

    /// Apply sticky preferences, then probe silently when live camera is
    /// still wanted. Runs once per mount.
    ///
    /// Test mode short-circuits the capability entirely: no enumeration,
    /// no stream request, straight to a simulated `Active`.
    ///
    /// # Errors
    ///
    /// Returns `CameraError::PermissionDenied`/`NoDevice` when a probe
    /// found a previously granted device but the stream request failed.
    /// Preference-store failures degrade to defaults and are only logged.
    pub async fn bootstrap(&mut self) -> Result<CameraPhase, CameraError> {
        self.prefs = match self.prefs_repo.load_prefs().await {
            Ok(prefs) => prefs,
            Err(err) => {
                warn!(error = %err, "camera prefs unavailable, assuming defaults");
                CameraPrefs::default()
            }
        };

        if self.prefs.test_mode {
            self.phase = CameraPhase::Active { simulated: true };
            return Ok(self.phase);
        }
        if self.prefs.fallback_mode {
            self.phase = CameraPhase::Fallback;
            return Ok(self.phase);
        }

        self.silent_probe().await
    }

    /// Enumerate devices without prompting; when a video input reports a
    /// non-empty label, permission was granted before and the stream is
    /// requested directly.
    ///
    /// Enumeration failure is not a denial: the phase returns to
    /// `Unrequested` and the manual enable flow stays available.
    ///
    /// # Errors
    ///
    /// Propagates a failed stream request after a positive probe.
    pub async fn silent_probe(&mut self) -> Result<CameraPhase, CameraError> {
        if self.phase != CameraPhase::Unrequested {
            return Ok(self.phase);
        }

        self.phase = CameraPhase::Probing;
        match self.access.list_video_inputs().await {
            Ok(inputs) if inputs.iter().any(super::capability::VideoInput::has_label) => {
                debug!("previously granted video input found, requesting stream");
                self.request_stream().await
            }
            Ok(_) => {
                self.phase = CameraPhase::Unrequested;
                Ok(self.phase)
            }
            Err(err) => {
                warn!(error = %err, "device enumeration failed");
                self.phase = CameraPhase::Unrequested;
                Ok(self.phase)
            }
        }
    }

    /// Request a rear-facing, high-resolution, video-only stream.
    ///
    /// # Errors
    ///
    /// Returns the capability error on refusal; the phase moves to
    /// `Denied` and the caller surfaces the denial screen.
    pub async fn request_stream(&mut self) -> Result<CameraPhase, CameraError> {
        self.release();
        self.phase = CameraPhase::Requesting;

        match self
            .access
            .open_stream(&StreamConstraints::rear_high_res())
            .await
        {
            Ok(stream) => {
                self.stream = Some(stream);
                self.phase = CameraPhase::Active { simulated: false };
                Ok(self.phase)
            }
            Err(err) => {
                warn!(error = %err, "camera stream request failed");
                self.phase = CameraPhase::Denied;
                Err(err)
            }
        }
    }

    /// Stop every track of any held stream.
    ///
    /// Must run on component teardown and on every switch away from
    /// `Active`, so camera hardware access is never leaked.
    pub fn release(&mut self) {
        if let Some(mut stream) = self.stream.take() {
            stream.release();
        }
    }

    /// Clear a denial so the manual enable flow can run again.
    pub fn reset_denial(&mut self) {
        if self.phase == CameraPhase::Denied {
            self.phase = CameraPhase::Unrequested;
        }
    }

    /// Switch to camera-free mode and persist the choice.
    ///
    /// # Errors
    ///
    /// Returns `CameraError::Prefs` when the sentinel cannot be stored;
    /// the in-memory mode still switches so the user is never stuck.
    pub async fn enable_fallback(&mut self) -> Result<CameraPhase, CameraError> {
        self.release();
        self.phase = CameraPhase::Fallback;
        self.prefs.fallback_mode = true;
        self.prefs_repo.save_prefs(&self.prefs).await?;
        Ok(self.phase)
    }

    /// Switch to the simulated-camera test mode and persist the choice.
    ///
    /// # Errors
    ///
    /// Returns `CameraError::Prefs` when the sentinel cannot be stored;
    /// the in-memory mode still switches so the user is never stuck.
    pub async fn enable_test_mode(&mut self) -> Result<CameraPhase, CameraError> {
        self.release();
        self.phase = CameraPhase::Active { simulated: true };
        self.prefs.test_mode = true;
        self.prefs_repo.save_prefs(&self.prefs).await?;
        Ok(self.phase)
    }
}

impl Drop for CameraSequencer {
    fn drop(&mut self) {
        self.release();
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicBool, Ordering};

    use storage::repository::InMemoryRepository;

    use crate::camera::capability::{StreamHandle, VideoInput};

    struct NoopHandle(AtomicBool);

    impl StreamHandle for NoopHandle {
        fn stop_all_tracks(&self) {
            self.0.store(true, Ordering::SeqCst);
        }

        fn is_stopped(&self) -> bool {
            self.0.load(Ordering::SeqCst)
        }
    }

    /// Records every capability call so tests can assert what the
    /// sequencer did (and, for test mode, did not) touch.
    #[derive(Default)]
    struct RecordingCamera {
        calls: Mutex<Vec<&'static str>>,
        labeled: bool,
        deny: bool,
    }

    impl RecordingCamera {
        fn granted() -> Self {
            Self {
                labeled: true,
                ..Self::default()
            }
        }

        fn undecided() -> Self {
            Self::default()
        }

        fn denying() -> Self {
            Self {
                deny: true,
                ..Self::default()
            }
        }

        fn calls(&self) -> Vec<&'static str> {
            self.calls.lock().unwrap().clone()
        }

        fn record(&self, call: &'static str) {
            self.calls.lock().unwrap().push(call);
        }
    }

    #[async_trait]
    impl CameraAccess for RecordingCamera {
        async fn list_video_inputs(&self) -> Result<Vec<VideoInput>, CameraError> {
            self.record("enumerate");
            Ok(vec![VideoInput {
                device_id: "cam0".into(),
                label: self.labeled.then(|| "Rear Camera".to_owned()),
            }])
        }

        async fn open_stream(
            &self,
            _constraints: &StreamConstraints,
        ) -> Result<CameraStream, CameraError> {
            self.record("open");
            if self.deny {
                return Err(CameraError::PermissionDenied);
            }
            Ok(CameraStream::new(Box::new(NoopHandle(AtomicBool::new(
                false,
            )))))
        }
    }

    fn sequencer(camera: Arc<RecordingCamera>) -> CameraSequencer {
        CameraSequencer::new(camera, Arc::new(InMemoryRepository::new()))
    }

    #[tokio::test]
    async fn silent_probe_starts_stream_when_previously_granted() {
        let camera = Arc::new(RecordingCamera::granted());
        let mut sequencer = sequencer(Arc::clone(&camera));

        let phase = sequencer.bootstrap().await.unwrap();
        assert_eq!(phase, CameraPhase::Active { simulated: false });
        assert_eq!(camera.calls(), vec!["enumerate", "open"]);
    }

    #[tokio::test]
    async fn unlabeled_devices_wait_for_user_gesture() {
        let camera = Arc::new(RecordingCamera::undecided());
        let mut sequencer = sequencer(Arc::clone(&camera));

        let phase = sequencer.bootstrap().await.unwrap();
        assert_eq!(phase, CameraPhase::Unrequested);
        assert_eq!(camera.calls(), vec!["enumerate"]);
    }

    #[tokio::test]
    async fn denial_moves_to_denied_and_does_not_retry() {
        let camera = Arc::new(RecordingCamera::denying());
        let mut sequencer = sequencer(Arc::clone(&camera));

        let err = sequencer.request_stream().await.unwrap_err();
        assert!(matches!(err, CameraError::PermissionDenied));
        assert_eq!(sequencer.phase(), CameraPhase::Denied);

        // Denial is never retried automatically; probing is a no-op now.
        let phase = sequencer.silent_probe().await.unwrap();
        assert_eq!(phase, CameraPhase::Denied);
        assert_eq!(camera.calls(), vec!["open"]);
    }

    #[tokio::test]
    async fn test_mode_short_circuits_the_capability_entirely() {
        let camera = Arc::new(RecordingCamera::granted());
        let prefs_repo = Arc::new(InMemoryRepository::new());
        let mut first = CameraSequencer::new(Arc::clone(&camera) as _, prefs_repo.clone());
        first.enable_test_mode().await.unwrap();
        assert_eq!(first.phase(), CameraPhase::Active { simulated: true });
        drop(first);

        // A fresh mount re-applies the sticky choice without probing.
        let mut second = CameraSequencer::new(Arc::clone(&camera) as _, prefs_repo);
        let phase = second.bootstrap().await.unwrap();
        assert_eq!(phase, CameraPhase::Active { simulated: true });
        assert!(camera.calls().is_empty());
    }

    #[tokio::test]
    async fn fallback_is_sticky_across_mounts() {
        let camera = Arc::new(RecordingCamera::granted());
        let prefs_repo = Arc::new(InMemoryRepository::new());

        let mut first = CameraSequencer::new(Arc::clone(&camera) as _, prefs_repo.clone());
        first.enable_fallback().await.unwrap();
        assert_eq!(first.phase(), CameraPhase::Fallback);
        drop(first);

        let mut second = CameraSequencer::new(Arc::clone(&camera) as _, prefs_repo);
        let phase = second.bootstrap().await.unwrap();
        assert_eq!(phase, CameraPhase::Fallback);
        assert!(camera.calls().is_empty());
    }

    #[tokio::test]
    async fn switching_modes_releases_the_held_stream() {
        let camera = Arc::new(RecordingCamera::granted());
        let mut sequencer = sequencer(Arc::clone(&camera));

        sequencer.bootstrap().await.unwrap();
        assert!(sequencer.is_active());

        sequencer.enable_fallback().await.unwrap();
        assert_eq!(sequencer.phase(), CameraPhase::Fallback);
        assert!(sequencer.stream.is_none());
    }

    #[tokio::test]
    async fn reset_denial_reopens_the_manual_flow() {
        let camera = Arc::new(RecordingCamera::denying());
        let mut sequencer = sequencer(Arc::clone(&camera));

        let _ = sequencer.request_stream().await;
        assert_eq!(sequencer.phase(), CameraPhase::Denied);

        sequencer.reset_denial();
        assert_eq!(sequencer.phase(), CameraPhase::Unrequested);
    }
}
