use std::fmt;

use crate::model::ids::ModuleId;

/// A navigation destination inside the tutorial.
///
/// Completion targets form a singly-linked traversal order over the
/// modules; the order is data-driven and not necessarily the numeric
/// module order (the bonus module is spliced in this way).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteTarget {
    Home,
    Overview,
    Module(ModuleId),
    Complete,
    CameraDenied,
}

impl RouteTarget {
    /// Returns the route path for this target, e.g. `/module/2`.
    #[must_use]
    pub fn path(&self) -> String {
        match self {
            RouteTarget::Home => "/".to_owned(),
            RouteTarget::Overview => "/overview".to_owned(),
            RouteTarget::Module(id) => format!("/module/{id}"),
            RouteTarget::Complete => "/complete".to_owned(),
            RouteTarget::CameraDenied => "/camera-denied".to_owned(),
        }
    }
}

impl fmt::Display for RouteTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path())
    }
}

/// What happens when a module finishes: where to go next, what to say,
/// and whether the coarse progress snapshot is written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Completion {
    next: RouteTarget,
    narration: String,
    save_progress: bool,
}

impl Completion {
    #[must_use]
    pub fn new(next: RouteTarget, narration: impl Into<String>, save_progress: bool) -> Self {
        Self {
            next,
            narration: narration.into(),
            save_progress,
        }
    }

    #[must_use]
    pub fn next(&self) -> RouteTarget {
        self.next
    }

    #[must_use]
    pub fn narration(&self) -> &str {
        &self.narration
    }

    #[must_use]
    pub fn save_progress(&self) -> bool {
        self.save_progress
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn route_target_paths() {
        assert_eq!(RouteTarget::Home.path(), "/");
        assert_eq!(RouteTarget::Overview.path(), "/overview");
        assert_eq!(RouteTarget::Module(ModuleId::new(2)).path(), "/module/2");
        assert_eq!(RouteTarget::Complete.path(), "/complete");
    }

    #[test]
    fn completion_accessors() {
        let completion = Completion::new(RouteTarget::Module(ModuleId::new(2)), "Onward!", true);
        assert_eq!(completion.next(), RouteTarget::Module(ModuleId::new(2)));
        assert_eq!(completion.narration(), "Onward!");
        assert!(completion.save_progress());
    }
}
