mod camera_denied;
mod complete;
mod home;
mod module;
mod overview;
mod state;

pub use camera_denied::CameraDeniedView;
pub use complete::CompleteView;
pub use home::HomeView;
pub use module::ModuleView;
pub use overview::OverviewView;
pub use state::{CameraScreenMode, ViewError, ViewState, view_state_from_resource};
