use std::sync::Arc;

use tracing::{info, warn};

use dashtour_core::Clock;
use dashtour_core::model::{ModuleId, ProgressSnapshot, QuizPolicy};
use storage::repository::ProgressRepository;

use crate::catalog::ModuleCatalog;
use crate::error::SessionError;
use super::machine::{Effect, ModuleProgression, SessionEvent, Transition};

/// Result of applying one event: the machine transition plus any progress
/// snapshot that was persisted while interpreting it.
#[derive(Debug, Clone, PartialEq)]
pub struct AppliedTransition {
    pub transition: Transition,
    pub saved_progress: Option<ProgressSnapshot>,
}

/// Orchestrates module sessions over the catalog and progress storage.
///
/// The progression machine stays pure; this service interprets its
/// `SaveProgress` effect against the repository with the service clock.
/// Narration and delayed navigation effects are left to the screen, which
/// owns their lifetimes.
#[derive(Clone)]
pub struct ModuleSessionService {
    clock: Clock,
    catalog: Arc<ModuleCatalog>,
    progress: Arc<dyn ProgressRepository>,
    quiz_policy: QuizPolicy,
}

impl ModuleSessionService {
    #[must_use]
    pub fn new(
        clock: Clock,
        catalog: Arc<ModuleCatalog>,
        progress: Arc<dyn ProgressRepository>,
    ) -> Self {
        Self {
            clock,
            catalog,
            progress,
            quiz_policy: QuizPolicy::unlimited(),
        }
    }

    #[must_use]
    pub fn with_quiz_policy(mut self, policy: QuizPolicy) -> Self {
        self.quiz_policy = policy;
        self
    }

    #[must_use]
    pub fn catalog(&self) -> &ModuleCatalog {
        &self.catalog
    }

    /// Start a session for the given module.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::ModuleNotFound` for an unknown id; the caller
    /// renders the not-found state and no machine is instantiated.
    pub fn start(&self, id: ModuleId) -> Result<ModuleProgression, SessionError> {
        let module = self
            .catalog
            .get(id)
            .ok_or(SessionError::ModuleNotFound(id))?;
        Ok(ModuleProgression::new(module.clone()).with_quiz_policy(self.quiz_policy))
    }

    /// Apply one event to the session and persist progress when asked.
    ///
    /// # Errors
    ///
    /// Propagates machine errors; persistence failures are logged and
    /// surfaced as `SessionError::Storage` after the transition already
    /// happened in memory (camera-free navigation must not dead-end on a
    /// storage hiccup, so callers may choose to continue).
    pub async fn apply(
        &self,
        session: &mut ModuleProgression,
        event: SessionEvent,
    ) -> Result<AppliedTransition, SessionError> {
        let transition = session.handle(&event)?;

        let mut saved_progress = None;
        if transition
            .effects
            .iter()
            .any(|effect| matches!(effect, Effect::SaveProgress))
        {
            saved_progress = Some(self.record_completion(session.module().id()).await?);
        }

        Ok(AppliedTransition {
            transition,
            saved_progress,
        })
    }

    /// Write the coarse snapshot for a completed module.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Progress` for an inconsistent snapshot and
    /// `SessionError::Storage` when persistence fails.
    pub async fn record_completion(
        &self,
        module_id: ModuleId,
    ) -> Result<ProgressSnapshot, SessionError> {
        let snapshot = ProgressSnapshot::new(
            module_id.value(),
            self.catalog.total_modules(),
            self.clock.now(),
        )?;
        if let Err(err) = self.progress.save_progress(&snapshot).await {
            warn!(module = %module_id, error = %err, "failed to persist tutorial progress");
            return Err(err.into());
        }
        info!(module = %module_id, "tutorial progress saved");
        Ok(snapshot)
    }

    /// Load the persisted snapshot, if any.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Storage` on backend failures.
    pub async fn load_progress(&self) -> Result<Option<ProgressSnapshot>, SessionError> {
        Ok(self.progress.load_progress().await?)
    }

    /// Forget persisted progress ("restart tutorial").
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Storage` on backend failures.
    pub async fn reset_progress(&self) -> Result<(), SessionError> {
        Ok(self.progress.clear_progress().await?)
    }
}
