use std::sync::Arc;

use services::{CameraService, ModuleSessionService};

/// Services the UI needs from the application composition root.
pub trait UiApp: Send + Sync {
    fn sessions(&self) -> Arc<ModuleSessionService>;
    fn camera(&self) -> Arc<CameraService>;
}

#[derive(Clone)]
pub struct AppContext {
    sessions: Arc<ModuleSessionService>,
    camera: Arc<CameraService>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            sessions: app.sessions(),
            camera: app.camera(),
        }
    }

    #[must_use]
    pub fn sessions(&self) -> Arc<ModuleSessionService> {
        Arc::clone(&self.sessions)
    }

    #[must_use]
    pub fn camera(&self) -> Arc<CameraService> {
        Arc::clone(&self.camera)
    }
}

// This context is provided by the application composition root (`crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
