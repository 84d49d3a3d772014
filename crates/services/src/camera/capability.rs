use async_trait::async_trait;

use crate::error::CameraError;

/// One enumerable video input device.
///
/// A populated label means the platform already granted camera permission
/// at some point; enumeration never prompts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoInput {
    pub device_id: String,
    pub label: Option<String>,
}

impl VideoInput {
    /// Returns true if the device exposes a non-empty label.
    #[must_use]
    pub fn has_label(&self) -> bool {
        self.label.as_deref().is_some_and(|label| !label.is_empty())
    }
}

/// Constraints passed to a stream request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StreamConstraints {
    pub rear_facing: bool,
    pub ideal_width: u32,
    pub ideal_height: u32,
}

impl StreamConstraints {
    /// The tutorial's only request shape: rear camera, high resolution.
    #[must_use]
    pub fn rear_high_res() -> Self {
        Self {
            rear_facing: true,
            ideal_width: 1920,
            ideal_height: 1080,
        }
    }
}

/// Handle to the platform media tracks behind an open stream.
pub trait StreamHandle: Send + Sync {
    /// Stop every track. Must be safe to call more than once.
    fn stop_all_tracks(&self);

    /// Returns true once every track has been stopped.
    fn is_stopped(&self) -> bool;
}

/// An open camera stream, owned exclusively by one camera component.
///
/// Dropping the stream stops its tracks, so camera hardware access can
/// never outlive the screen that acquired it.
pub struct CameraStream {
    handle: Box<dyn StreamHandle>,
}

impl std::fmt::Debug for CameraStream {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CameraStream")
            .field("is_released", &self.handle.is_stopped())
            .finish()
    }
}

impl CameraStream {
    #[must_use]
    pub fn new(handle: Box<dyn StreamHandle>) -> Self {
        Self { handle }
    }

    /// Stop every track now instead of waiting for drop.
    pub fn release(&mut self) {
        self.handle.stop_all_tracks();
    }

    #[must_use]
    pub fn is_released(&self) -> bool {
        self.handle.is_stopped()
    }
}

impl Drop for CameraStream {
    fn drop(&mut self) {
        self.handle.stop_all_tracks();
    }
}

/// Capability boundary over the platform camera.
///
/// The sequencer consumes exactly this surface: enumerate inputs, request
/// a stream with constraints, and release streams by dropping them.
#[async_trait]
pub trait CameraAccess: Send + Sync {
    /// Enumerate video input devices without prompting the user.
    ///
    /// # Errors
    ///
    /// Returns `CameraError` when enumeration itself fails; callers treat
    /// this as "permission state unknown", not as a denial.
    async fn list_video_inputs(&self) -> Result<Vec<VideoInput>, CameraError>;

    /// Request a stream, prompting the user if permission is undecided.
    ///
    /// # Errors
    ///
    /// Returns `CameraError::PermissionDenied` on refusal and
    /// `CameraError::NoDevice` when no camera exists.
    async fn open_stream(&self, constraints: &StreamConstraints)
    -> Result<CameraStream, CameraError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_label_does_not_count_as_granted() {
        let unlabeled = VideoInput {
            device_id: "cam0".into(),
            label: Some(String::new()),
        };
        assert!(!unlabeled.has_label());

        let labeled = VideoInput {
            device_id: "cam0".into(),
            label: Some("Rear Camera".into()),
        };
        assert!(labeled.has_label());
    }

    #[test]
    fn default_constraints_ask_for_rear_high_res() {
        let constraints = StreamConstraints::rear_high_res();
        assert!(constraints.rear_facing);
        assert_eq!(constraints.ideal_width, 1920);
        assert_eq!(constraints.ideal_height, 1080);
    }
}
