//! Shared error types for the services crate.

use thiserror::Error;

use dashtour_core::model::{
    HotspotError, InvalidHotspotId, ModuleError, ModuleId, ObjectiveError, ProgressError,
    QuizError, RouteTarget,
};
use storage::repository::StorageError;

/// Errors emitted by the module session subsystem.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SessionError {
    #[error("module {0} not found")]
    ModuleNotFound(ModuleId),

    #[error("module already completed")]
    Completed,

    #[error("no quiz is active")]
    QuizNotActive,

    #[error(transparent)]
    Progress(#[from] ProgressError),

    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Errors emitted by the camera acquisition sequencer.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CameraError {
    #[error("camera permission denied")]
    PermissionDenied,

    #[error("no video input device available")]
    NoDevice,

    #[error("media playback failed: {0}")]
    Playback(String),

    #[error(transparent)]
    Prefs(#[from] StorageError),
}

/// Errors raised while building or validating the module catalog.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CatalogError {
    #[error("duplicate module id {0}")]
    DuplicateModuleId(ModuleId),

    #[error("module {from} links to missing target {to}")]
    BrokenLink { from: ModuleId, to: RouteTarget },

    #[error("traversal from the first module never reaches the completion screen")]
    UnterminatedChain,

    #[error(transparent)]
    Module(#[from] ModuleError),

    #[error(transparent)]
    Objective(#[from] ObjectiveError),

    #[error(transparent)]
    Quiz(#[from] QuizError),

    #[error(transparent)]
    Hotspot(#[from] HotspotError),

    #[error(transparent)]
    HotspotId(#[from] InvalidHotspotId),
}
