#![forbid(unsafe_code)]

pub mod camera;
pub mod catalog;
pub mod error;
pub mod narration;
pub mod session;

pub use dashtour_core::Clock;

pub use camera::{
    CameraAccess, CameraPhase, CameraSequencer, CameraService, CameraStream, SimulatedCamera,
    StreamConstraints, StreamHandle, UnavailableCamera, VideoInput,
};
pub use catalog::{ModuleCatalog, OverviewScript, OverviewStep};
pub use error::{CameraError, CatalogError, SessionError};
pub use session::{
    AppliedTransition, Effect, ModuleProgression, ModuleSessionService, Phase, SessionEvent,
    SessionProgress, Transition,
};
