use dashtour_core::model::ModuleId;
use services::session::{ModuleProgression, Phase, SessionEvent, SessionProgress, Transition};
use services::SessionError;

/// Render-ready hotspot for the overlay component.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HotspotMarker {
    pub id: String,
    pub x_pct: u8,
    pub y_pct: u8,
    pub label: String,
    pub confirmed: bool,
}

/// Render-ready quiz data.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuizVm {
    pub question: String,
    pub options: Vec<String>,
    pub correct_index: usize,
}

/// View model over one module session.
///
/// Pure: every method is synchronous, so it can be unit tested without a
/// renderer. Persistence and timers stay in the view layer.
pub struct ModuleVm {
    session: ModuleProgression,
}

impl ModuleVm {
    #[must_use]
    pub fn new(session: ModuleProgression) -> Self {
        Self { session }
    }

    #[must_use]
    pub fn module_id(&self) -> ModuleId {
        self.session.module().id()
    }

    #[must_use]
    pub fn title(&self) -> &str {
        self.session.module().title()
    }

    #[must_use]
    pub fn is_bonus(&self) -> bool {
        self.session.module().is_bonus()
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.session.phase()
    }

    #[must_use]
    pub fn quiz_visible(&self) -> bool {
        self.session.quiz_visible()
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.session.is_complete()
    }

    #[must_use]
    pub fn item_placed(&self) -> bool {
        self.session.item_placed()
    }

    #[must_use]
    pub fn action_armed(&self) -> bool {
        self.session.action_armed()
    }

    #[must_use]
    pub fn progress(&self) -> SessionProgress {
        self.session.progress()
    }

    /// Instruction text for the active objective.
    #[must_use]
    pub fn instruction(&self) -> Option<&str> {
        self.session
            .current_objective()
            .map(dashtour_core::model::Objective::instruction)
    }

    /// Voice line for the active objective.
    #[must_use]
    pub fn instruction_narration(&self) -> Option<String> {
        self.session
            .current_objective()
            .map(|objective| objective.narration().to_owned())
            .filter(|line| !line.is_empty())
    }

    /// "Step x of y" counter for the instruction card.
    #[must_use]
    pub fn step_counter(&self) -> String {
        let progress = self.session.progress();
        format!("Step {} of {}", progress.step + 1, progress.total)
    }

    #[must_use]
    pub fn hotspots(&self) -> Vec<HotspotMarker> {
        self.session
            .active_hotspots()
            .into_iter()
            .map(|hotspot| HotspotMarker {
                id: hotspot.id().as_str().to_owned(),
                x_pct: hotspot.x_pct(),
                y_pct: hotspot.y_pct(),
                label: hotspot.label().to_owned(),
                confirmed: self.session.is_confirmed(hotspot.id()),
            })
            .collect()
    }

    #[must_use]
    pub fn quiz(&self) -> Option<QuizVm> {
        self.session.module().quiz().map(|quiz| QuizVm {
            question: quiz.question().to_owned(),
            options: quiz.options().to_vec(),
            correct_index: quiz.correct_index(),
        })
    }

    /// Feed one event to the progression machine.
    ///
    /// # Errors
    ///
    /// Propagates machine errors (`Completed`, `QuizNotActive`).
    pub fn apply(&mut self, event: &SessionEvent) -> Result<Transition, SessionError> {
        self.session.handle(event)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dashtour_core::model::HotspotId;
    use services::ModuleCatalog;
    use services::session::Effect;

    fn vm(module: u32) -> ModuleVm {
        let catalog = ModuleCatalog::builtin().unwrap();
        let module = catalog.get(ModuleId::new(module)).unwrap().clone();
        ModuleVm::new(ModuleProgression::new(module))
    }

    fn confirm(vm: &mut ModuleVm, id: &str) -> Transition {
        vm.apply(&SessionEvent::ConfirmHotspot(HotspotId::new(id).unwrap()))
            .unwrap()
    }

    #[test]
    fn exposes_module_one_layout() {
        let vm = vm(1);
        assert_eq!(vm.title(), "Dashboard Overview");
        assert_eq!(vm.hotspots().len(), 4);
        assert_eq!(vm.step_counter(), "Step 1 of 4");
        assert!(!vm.quiz_visible());
    }

    #[test]
    fn confirmations_update_markers_and_counter() {
        let mut vm = vm(1);
        confirm(&mut vm, "instrument_cluster");

        assert_eq!(vm.step_counter(), "Step 2 of 4");
        let marker = vm
            .hotspots()
            .into_iter()
            .find(|marker| marker.id == "instrument_cluster")
            .unwrap();
        assert!(marker.confirmed);
    }

    #[test]
    fn full_walk_produces_quiz_then_navigation() {
        let mut vm = vm(1);
        for id in [
            "instrument_cluster",
            "infotainment_screen",
            "climate_panel",
            "steering_controls",
        ] {
            confirm(&mut vm, id);
        }
        assert!(vm.quiz_visible());

        let quiz = vm.quiz().unwrap();
        let transition = vm
            .apply(&SessionEvent::AnswerQuiz(quiz.correct_index))
            .unwrap();
        assert!(transition
            .effects
            .iter()
            .any(|effect| matches!(effect, Effect::NavigateAfter { .. })));
        assert!(vm.is_complete());
    }

    #[test]
    fn bonus_module_reports_staged_flags() {
        let mut vm = vm(11);
        assert!(vm.is_bonus());
        assert_eq!(vm.hotspots().len(), 1);

        confirm(&mut vm, "passenger_seat_zone");
        confirm(&mut vm, "mascot_placement_zone");
        assert!(vm.item_placed());
        assert!(vm.action_armed());
    }
}
