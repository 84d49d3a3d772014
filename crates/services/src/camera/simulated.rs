use std::sync::Arc;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;

use crate::error::CameraError;
use super::capability::{CameraAccess, CameraStream, StreamConstraints, StreamHandle, VideoInput};

//
// ─── SIMULATED ─────────────────────────────────────────────────────────────────
//

struct SimulatedHandle {
    stopped: Arc<AtomicBool>,
}

impl StreamHandle for SimulatedHandle {
    fn stop_all_tracks(&self) {
        self.stopped.store(true, Ordering::SeqCst);
    }

    fn is_stopped(&self) -> bool {
        self.stopped.load(Ordering::SeqCst)
    }
}

/// A camera that always grants and feeds a static dashboard image.
///
/// Backs test mode, and stands in for real capture on desktops without a
/// rear camera. Tracks every stream it has handed out so tests can assert
/// that teardown stopped them all.
#[derive(Clone, Default)]
pub struct SimulatedCamera {
    streams: Arc<Mutex<Vec<Arc<AtomicBool>>>>,
}

impl SimulatedCamera {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of streams handed out so far.
    #[must_use]
    pub fn streams_opened(&self) -> usize {
        self.streams.lock().map(|streams| streams.len()).unwrap_or(0)
    }

    /// Returns true when every stream handed out has been stopped.
    #[must_use]
    pub fn all_streams_stopped(&self) -> bool {
        self.streams
            .lock()
            .map(|streams| streams.iter().all(|stopped| stopped.load(Ordering::SeqCst)))
            .unwrap_or(false)
    }
}

#[async_trait]
impl CameraAccess for SimulatedCamera {
    async fn list_video_inputs(&self) -> Result<Vec<VideoInput>, CameraError> {
        Ok(vec![VideoInput {
            device_id: "simulated-rear".into(),
            label: Some("Simulated Rear Camera".into()),
        }])
    }

    async fn open_stream(
        &self,
        _constraints: &StreamConstraints,
    ) -> Result<CameraStream, CameraError> {
        let stopped = Arc::new(AtomicBool::new(false));
        if let Ok(mut streams) = self.streams.lock() {
            streams.push(Arc::clone(&stopped));
        }
        Ok(CameraStream::new(Box::new(SimulatedHandle { stopped })))
    }
}

//
// ─── UNAVAILABLE ───────────────────────────────────────────────────────────────
//

/// A platform with no camera at all: enumeration finds nothing and every
/// request is refused. Exercises the denial and fallback paths.
#[derive(Clone, Copy, Default)]
pub struct UnavailableCamera;

impl UnavailableCamera {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl CameraAccess for UnavailableCamera {
    async fn list_video_inputs(&self) -> Result<Vec<VideoInput>, CameraError> {
        Ok(Vec::new())
    }

    async fn open_stream(
        &self,
        _constraints: &StreamConstraints,
    ) -> Result<CameraStream, CameraError> {
        Err(CameraError::NoDevice)
    }
}
