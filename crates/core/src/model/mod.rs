mod completion;
mod hotspot;
mod ids;
mod module;
mod objective;
mod progress;
mod quiz;

pub use completion::{Completion, RouteTarget};
pub use hotspot::{Hotspot, HotspotError};
pub use ids::{HotspotId, InvalidHotspotId, ModuleId, ParseIdError};
pub use module::{Module, ModuleError, ModuleFlow, Stage};
pub use objective::{Objective, ObjectiveError};
pub use progress::{CameraPrefs, ProgressError, ProgressSnapshot};
pub use quiz::{Quiz, QuizError, QuizPolicy};
