mod capability;
mod sequencer;
mod service;
mod simulated;

// Public API of the camera subsystem.
pub use crate::error::CameraError;
pub use capability::{CameraAccess, CameraStream, StreamConstraints, StreamHandle, VideoInput};
pub use sequencer::{CameraPhase, CameraSequencer};
pub use service::CameraService;
pub use simulated::{SimulatedCamera, UnavailableCamera};
