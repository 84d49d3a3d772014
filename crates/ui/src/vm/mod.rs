mod module_vm;
mod overview_vm;

pub use module_vm::{HotspotMarker, ModuleVm, QuizVm};
pub use overview_vm::OverviewVm;
