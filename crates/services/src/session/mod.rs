mod machine;
mod progress;
mod service;

// Public API of the session subsystem.
pub use crate::error::SessionError;
pub use machine::{
    COMPLETION_NAVIGATION_DELAY, Effect, ModuleProgression, Phase, QUIZ_REVEAL_DELAY,
    SessionEvent, Transition,
};
pub use progress::SessionProgress;
pub use service::{AppliedTransition, ModuleSessionService};
