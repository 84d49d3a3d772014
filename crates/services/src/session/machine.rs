use std::collections::HashSet;
use std::time::Duration;

use dashtour_core::model::{
    Hotspot, HotspotId, Module, ModuleFlow, Objective, QuizPolicy, RouteTarget, Stage,
};

use crate::error::SessionError;
use super::progress::SessionProgress;

/// Pause before the quiz card replaces the hotspot overlay.
pub const QUIZ_REVEAL_DELAY: Duration = Duration::from_secs(1);

/// Pause between the completion narration starting and navigation firing.
pub const COMPLETION_NAVIGATION_DELAY: Duration = Duration::from_secs(3);

//
// ─── PHASES & EFFECTS ──────────────────────────────────────────────────────────
//

/// Where the user currently is inside one module visit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Working on the objective at this step index, always `< N`.
    Objective(usize),
    /// Every objective confirmed; quiz on screen, retries allowed.
    QuizPending,
    /// Terminal. Completion side effects have fired exactly once.
    Completed,
}

/// Side effects requested by a transition.
///
/// The machine never performs these itself: the caller interprets them,
/// and any delayed ones must be bound to the screen's lifetime so a
/// timer can never mutate state after navigation away.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Speak this text through the narrator.
    Narrate(String),
    /// Reveal the quiz card after a short pause.
    ShowQuizAfter(Duration),
    /// Persist the coarse progress snapshot for this module.
    SaveProgress,
    /// Navigate to the target after the delay.
    NavigateAfter { delay: Duration, target: RouteTarget },
}

/// A user interaction fed into a running module session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    ConfirmHotspot(HotspotId),
    ManualAdvance,
    AnswerQuiz(usize),
}

/// Result of feeding one event into the machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub phase: Phase,
    pub effects: Vec<Effect>,
}

impl Transition {
    fn unchanged(phase: Phase) -> Self {
        Self {
            phase,
            effects: Vec::new(),
        }
    }
}

//
// ─── PROGRESSION ───────────────────────────────────────────────────────────────
//

/// Drives a user through a module's ordered objectives to a terminal
/// completion event.
///
/// Created when a module screen mounts and discarded on navigation away;
/// only the coarse progress snapshot outlives it. Confirming the same
/// hotspot twice is idempotent, and completion fires at most once per
/// instance.
#[derive(Debug)]
pub struct ModuleProgression {
    module: Module,
    phase: Phase,
    confirmed: HashSet<HotspotId>,
    item_placed: bool,
    action_armed: bool,
    quiz_attempts: u32,
    quiz_policy: QuizPolicy,
    completion_fired: bool,
}

impl ModuleProgression {
    #[must_use]
    pub fn new(module: Module) -> Self {
        Self {
            module,
            phase: Phase::Objective(0),
            confirmed: HashSet::new(),
            item_placed: false,
            action_armed: false,
            quiz_attempts: 0,
            quiz_policy: QuizPolicy::unlimited(),
            completion_fired: false,
        }
    }

    #[must_use]
    pub fn with_quiz_policy(mut self, policy: QuizPolicy) -> Self {
        self.quiz_policy = policy;
        self
    }

    #[must_use]
    pub fn module(&self) -> &Module {
        &self.module
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Current step index, when an objective is active.
    #[must_use]
    pub fn step_index(&self) -> Option<usize> {
        match self.phase {
            Phase::Objective(step) => Some(step),
            Phase::QuizPending | Phase::Completed => None,
        }
    }

    #[must_use]
    pub fn current_objective(&self) -> Option<&Objective> {
        self.step_index().and_then(|step| self.module.objective(step))
    }

    #[must_use]
    pub fn confirmed_count(&self) -> usize {
        self.confirmed.len()
    }

    #[must_use]
    pub fn is_confirmed(&self, id: &HotspotId) -> bool {
        self.confirmed.contains(id)
    }

    #[must_use]
    pub fn quiz_visible(&self) -> bool {
        matches!(self.phase, Phase::QuizPending)
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        matches!(self.phase, Phase::Completed)
    }

    /// Monotonic within one visit: set by the placement stage, never cleared.
    #[must_use]
    pub fn item_placed(&self) -> bool {
        self.item_placed
    }

    /// Monotonic within one visit: set once the final action is armed.
    #[must_use]
    pub fn action_armed(&self) -> bool {
        self.action_armed
    }

    #[must_use]
    pub fn quiz_attempts(&self) -> u32 {
        self.quiz_attempts
    }

    /// Hotspots the overlay should show for the current phase.
    ///
    /// Standard modules show the whole layout while objectives are active;
    /// staged modules expose exactly the active stage's hotspot.
    #[must_use]
    pub fn active_hotspots(&self) -> Vec<&Hotspot> {
        let Phase::Objective(step) = self.phase else {
            return Vec::new();
        };
        match self.module.flow() {
            ModuleFlow::Standard => self.module.layout().iter().collect(),
            ModuleFlow::Staged { stages } => stages
                .get(step)
                .and_then(|stage| self.module.hotspot(stage.hotspot()))
                .into_iter()
                .collect(),
        }
    }

    /// Aggregated view of progress for UI rendering.
    #[must_use]
    pub fn progress(&self) -> SessionProgress {
        let total = self.module.objectives().len();
        let step = match self.phase {
            Phase::Objective(step) => step,
            Phase::QuizPending | Phase::Completed => total.saturating_sub(1),
        };
        SessionProgress {
            step,
            total,
            confirmed: self.confirmed.len(),
            quiz_visible: self.quiz_visible(),
            is_complete: self.is_complete(),
        }
    }

    //
    // ─── EVENTS ────────────────────────────────────────────────────────────
    //

    /// Dispatch one session event to the matching transition.
    ///
    /// # Errors
    ///
    /// Propagates the underlying event's errors.
    pub fn handle(&mut self, event: &SessionEvent) -> Result<Transition, SessionError> {
        match event {
            SessionEvent::ConfirmHotspot(id) => self.confirm_hotspot(id),
            SessionEvent::ManualAdvance => self.manual_advance(),
            SessionEvent::AnswerQuiz(selected) => self.answer_quiz(*selected),
        }
    }

    /// Confirm a hotspot tap for this module.
    ///
    /// Hotspots that do not belong to the module, repeats of an already
    /// confirmed hotspot, and taps while the quiz is showing are all
    /// ignored (no effects, phase unchanged).
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Completed` if the module already finished.
    pub fn confirm_hotspot(&mut self, id: &HotspotId) -> Result<Transition, SessionError> {
        match self.phase {
            Phase::Completed => Err(SessionError::Completed),
            Phase::QuizPending => Ok(Transition::unchanged(self.phase)),
            Phase::Objective(step) => match self.module.flow().clone() {
                ModuleFlow::Standard => Ok(self.confirm_standard(id)),
                ModuleFlow::Staged { stages } => Ok(self.confirm_staged(step, &stages, id)),
            },
        }
    }

    /// Advance without a hotspot tap (fallback and test modes).
    ///
    /// Follows the same transition table as hotspot confirmation by
    /// synthesizing a confirmation of the next outstanding target.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Completed` if the module already finished.
    pub fn manual_advance(&mut self) -> Result<Transition, SessionError> {
        match self.phase {
            Phase::Completed => Err(SessionError::Completed),
            Phase::QuizPending => Ok(Transition::unchanged(self.phase)),
            Phase::Objective(step) => match self.module.flow().clone() {
                ModuleFlow::Staged { stages } => {
                    let Some(stage) = stages.get(step) else {
                        return Ok(Transition::unchanged(self.phase));
                    };
                    let id = stage.hotspot().clone();
                    Ok(self.confirm_staged(step, &stages, &id))
                }
                ModuleFlow::Standard => {
                    let next = self
                        .module
                        .objectives()
                        .iter()
                        .map(|objective| objective.hotspot().clone())
                        .find(|hotspot| !self.confirmed.contains(hotspot));
                    match next {
                        Some(id) => Ok(self.confirm_standard(&id)),
                        None => Ok(Transition::unchanged(self.phase)),
                    }
                }
            },
        }
    }

    /// Answer the quiz with the selected option index.
    ///
    /// A correct answer completes the module. An incorrect answer keeps
    /// the quiz pending and counts against the retry policy; once the
    /// policy is exhausted the quiz locks and the module completes so the
    /// tutorial never dead-ends.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Completed` after completion and
    /// `SessionError::QuizNotActive` outside the quiz phase.
    pub fn answer_quiz(&mut self, selected: usize) -> Result<Transition, SessionError> {
        match self.phase {
            Phase::Completed => Err(SessionError::Completed),
            Phase::Objective(_) => Err(SessionError::QuizNotActive),
            Phase::QuizPending => {
                let Some(quiz) = self.module.quiz() else {
                    return Err(SessionError::QuizNotActive);
                };

                if quiz.is_correct(selected) {
                    let mut effects = vec![Effect::Narrate(quiz.narration_on_correct().to_owned())];
                    effects.extend(self.complete());
                    return Ok(Transition {
                        phase: self.phase,
                        effects,
                    });
                }

                self.quiz_attempts = self.quiz_attempts.saturating_add(1);
                let mut effects =
                    vec![Effect::Narrate(quiz.narration_on_incorrect().to_owned())];
                if !self.quiz_policy.allows_attempt(self.quiz_attempts) {
                    effects.extend(self.complete());
                }
                Ok(Transition {
                    phase: self.phase,
                    effects,
                })
            }
        }
    }

    //
    // ─── INTERNALS ─────────────────────────────────────────────────────────
    //

    fn confirm_standard(&mut self, id: &HotspotId) -> Transition {
        let counts = self
            .module
            .objectives()
            .iter()
            .any(|objective| objective.hotspot() == id);
        if !counts || !self.confirmed.insert(id.clone()) {
            return Transition::unchanged(self.phase);
        }

        let total = self.module.objectives().len();
        if self.confirmed.len() >= total {
            return self.finish_objectives();
        }

        // The step index tracks the aggregate confirmation count, not the
        // identity of the tapped hotspot.
        let step = self.confirmed.len().min(total - 1);
        self.phase = Phase::Objective(step);
        let effects = self
            .module
            .objective(step)
            .map(|objective| Effect::Narrate(objective.narration().to_owned()))
            .into_iter()
            .collect();
        Transition {
            phase: self.phase,
            effects,
        }
    }

    fn confirm_staged(&mut self, step: usize, stages: &[Stage], id: &HotspotId) -> Transition {
        let Some(stage) = stages.get(step) else {
            return Transition::unchanged(self.phase);
        };
        if stage.hotspot() != id {
            return Transition::unchanged(self.phase);
        }

        if stage.places_item() {
            self.item_placed = true;
        }
        if stage.arms_action() {
            self.action_armed = true;
        }
        self.confirmed.insert(id.clone());

        let total = self.module.objectives().len();
        if step + 1 >= total {
            return self.finish_objectives();
        }

        self.phase = Phase::Objective(step + 1);
        let effects = self
            .module
            .objective(step + 1)
            .map(|objective| Effect::Narrate(objective.narration().to_owned()))
            .into_iter()
            .collect();
        Transition {
            phase: self.phase,
            effects,
        }
    }

    fn finish_objectives(&mut self) -> Transition {
        if self.module.quiz().is_some() {
            self.phase = Phase::QuizPending;
            return Transition {
                phase: self.phase,
                effects: vec![Effect::ShowQuizAfter(QUIZ_REVEAL_DELAY)],
            };
        }

        let effects = self.complete();
        Transition {
            phase: self.phase,
            effects,
        }
    }

    fn complete(&mut self) -> Vec<Effect> {
        if self.completion_fired {
            return Vec::new();
        }
        self.completion_fired = true;
        self.phase = Phase::Completed;

        let completion = self.module.completion();
        let mut effects = vec![Effect::Narrate(completion.narration().to_owned())];
        if completion.save_progress() {
            effects.push(Effect::SaveProgress);
        }
        effects.push(Effect::NavigateAfter {
            delay: COMPLETION_NAVIGATION_DELAY,
            target: completion.next(),
        });
        effects
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;
    use dashtour_core::model::{Completion, ModuleId, Quiz, Stage};

    fn hotspot(id: &str) -> Hotspot {
        Hotspot::new(HotspotId::new(id).unwrap(), 50, 50, id.replace('_', " ")).unwrap()
    }

    fn objective(target: &str, hotspot: &str) -> Objective {
        Objective::new(
            target,
            format!("Find the {target}."),
            format!("That is the {target}."),
            HotspotId::new(hotspot).unwrap(),
        )
        .unwrap()
    }

    fn id(raw: &str) -> HotspotId {
        HotspotId::new(raw).unwrap()
    }

    fn dashboard_module(quiz: Option<Quiz>) -> Module {
        Module::new(
            ModuleId::new(1),
            "dashboard_overview",
            "Dashboard Overview",
            vec![
                objective("Driver Instrument Cluster", "instrument_cluster"),
                objective("Center Infotainment Screen", "infotainment_screen"),
                objective("Climate Control Panel", "climate_panel"),
                objective("Steering Wheel Controls", "steering_controls"),
            ],
            quiz,
            Completion::new(RouteTarget::Module(ModuleId::new(2)), "Solid start!", true),
            vec![
                hotspot("instrument_cluster"),
                hotspot("infotainment_screen"),
                hotspot("climate_panel"),
                hotspot("steering_controls"),
            ],
            ModuleFlow::Standard,
        )
        .unwrap()
    }

    fn dashboard_quiz() -> Quiz {
        Quiz::new(
            "Which part of the dashboard shows your current speed?",
            vec![
                "Center Infotainment Screen".into(),
                "Climate Control Panel".into(),
                "Driver Instrument Cluster".into(),
                "Steering Wheel".into(),
            ],
            2,
            "That's right!",
            "Not quite. Try again.",
        )
        .unwrap()
    }

    fn staged_module() -> Module {
        Module::new(
            ModuleId::new(11),
            "bonus_command",
            "Bonus Module",
            vec![
                objective("Passenger Seat", "seat_zone"),
                objective("Place the Companion", "placement_zone"),
                objective("Locate the Launch Button", "launch_button"),
                objective("Fire the Launch Button", "launch_button"),
            ],
            None,
            Completion::new(RouteTarget::Complete, "Mission success!", true),
            vec![
                hotspot("seat_zone"),
                hotspot("placement_zone"),
                hotspot("launch_button"),
            ],
            ModuleFlow::Staged {
                stages: vec![
                    Stage::new(id("seat_zone")),
                    Stage::new(id("placement_zone"))
                        .with_places_item()
                        .with_arms_action(),
                    Stage::new(id("launch_button")),
                    Stage::new(id("launch_button")),
                ],
            },
        )
        .unwrap()
        .as_bonus()
    }

    fn navigation_target(effects: &[Effect]) -> Option<RouteTarget> {
        effects.iter().find_map(|effect| match effect {
            Effect::NavigateAfter { target, .. } => Some(*target),
            _ => None,
        })
    }

    #[test]
    fn walks_steps_in_order_then_quiz() {
        let module = dashboard_module(Some(dashboard_quiz()));
        let mut progression = ModuleProgression::new(module);

        assert_eq!(progression.phase(), Phase::Objective(0));
        for (hotspot, expected_step) in [
            ("instrument_cluster", 1),
            ("infotainment_screen", 2),
            ("climate_panel", 3),
        ] {
            let transition = progression.confirm_hotspot(&id(hotspot)).unwrap();
            assert_eq!(transition.phase, Phase::Objective(expected_step));
        }

        let transition = progression.confirm_hotspot(&id("steering_controls")).unwrap();
        assert_eq!(transition.phase, Phase::QuizPending);
        assert_eq!(
            transition.effects,
            vec![Effect::ShowQuizAfter(QUIZ_REVEAL_DELAY)]
        );
        assert!(progression.quiz_visible());
    }

    #[test]
    fn duplicate_confirmation_is_idempotent() {
        let module = dashboard_module(Some(dashboard_quiz()));
        let mut progression = ModuleProgression::new(module);

        progression.confirm_hotspot(&id("instrument_cluster")).unwrap();
        let repeat = progression.confirm_hotspot(&id("instrument_cluster")).unwrap();

        assert_eq!(repeat.phase, Phase::Objective(1));
        assert!(repeat.effects.is_empty());
        assert_eq!(progression.confirmed_count(), 1);
    }

    #[test]
    fn unknown_hotspot_is_ignored() {
        let module = dashboard_module(Some(dashboard_quiz()));
        let mut progression = ModuleProgression::new(module);

        let transition = progression.confirm_hotspot(&id("cup_holder")).unwrap();
        assert_eq!(transition.phase, Phase::Objective(0));
        assert!(transition.effects.is_empty());
    }

    #[test]
    fn quiz_never_shows_before_all_confirmed() {
        let module = dashboard_module(Some(dashboard_quiz()));
        let mut progression = ModuleProgression::new(module);

        for hotspot in ["instrument_cluster", "infotainment_screen", "climate_panel"] {
            progression.confirm_hotspot(&id(hotspot)).unwrap();
            assert!(!progression.quiz_visible());
        }
    }

    #[test]
    fn out_of_order_confirmation_still_gates_quiz_on_all() {
        let module = dashboard_module(Some(dashboard_quiz()));
        let mut progression = ModuleProgression::new(module);

        for hotspot in ["steering_controls", "climate_panel", "instrument_cluster"] {
            progression.confirm_hotspot(&id(hotspot)).unwrap();
        }
        assert!(!progression.quiz_visible());

        progression.confirm_hotspot(&id("infotainment_screen")).unwrap();
        assert!(progression.quiz_visible());
    }

    #[test]
    fn incorrect_answer_allows_retry_then_correct_completes() {
        let module = dashboard_module(Some(dashboard_quiz()));
        let mut progression = ModuleProgression::new(module);
        for hotspot in [
            "instrument_cluster",
            "infotainment_screen",
            "climate_panel",
            "steering_controls",
        ] {
            progression.confirm_hotspot(&id(hotspot)).unwrap();
        }

        let wrong = progression.answer_quiz(0).unwrap();
        assert_eq!(wrong.phase, Phase::QuizPending);
        assert_eq!(
            wrong.effects,
            vec![Effect::Narrate("Not quite. Try again.".into())]
        );
        assert_eq!(progression.quiz_attempts(), 1);

        let right = progression.answer_quiz(2).unwrap();
        assert_eq!(right.phase, Phase::Completed);
        assert!(right.effects.contains(&Effect::SaveProgress));
        assert_eq!(
            navigation_target(&right.effects),
            Some(RouteTarget::Module(ModuleId::new(2)))
        );
    }

    #[test]
    fn exhausted_retry_policy_locks_quiz_and_completes() {
        let module = dashboard_module(Some(dashboard_quiz()));
        let mut progression =
            ModuleProgression::new(module).with_quiz_policy(QuizPolicy::capped(2).unwrap());
        for hotspot in [
            "instrument_cluster",
            "infotainment_screen",
            "climate_panel",
            "steering_controls",
        ] {
            progression.confirm_hotspot(&id(hotspot)).unwrap();
        }

        let first = progression.answer_quiz(0).unwrap();
        assert_eq!(first.phase, Phase::QuizPending);

        let second = progression.answer_quiz(1).unwrap();
        assert_eq!(second.phase, Phase::Completed);
        assert!(navigation_target(&second.effects).is_some());
    }

    #[test]
    fn module_without_quiz_completes_directly() {
        let module = dashboard_module(None);
        let mut progression = ModuleProgression::new(module);

        for hotspot in ["instrument_cluster", "infotainment_screen", "climate_panel"] {
            progression.confirm_hotspot(&id(hotspot)).unwrap();
        }
        let last = progression.confirm_hotspot(&id("steering_controls")).unwrap();

        assert_eq!(last.phase, Phase::Completed);
        assert!(last.effects.contains(&Effect::SaveProgress));
    }

    #[test]
    fn completion_fires_at_most_once() {
        let module = dashboard_module(None);
        let mut progression = ModuleProgression::new(module);
        for hotspot in ["instrument_cluster", "infotainment_screen", "climate_panel"] {
            progression.confirm_hotspot(&id(hotspot)).unwrap();
        }
        progression.confirm_hotspot(&id("steering_controls")).unwrap();

        let err = progression.confirm_hotspot(&id("steering_controls")).unwrap_err();
        assert!(matches!(err, SessionError::Completed));
    }

    #[test]
    fn manual_advance_mirrors_hotspot_confirmation() {
        let module = dashboard_module(Some(dashboard_quiz()));
        let mut progression = ModuleProgression::new(module);

        for expected in [1, 2, 3] {
            let transition = progression.manual_advance().unwrap();
            assert_eq!(transition.phase, Phase::Objective(expected));
        }
        let transition = progression.manual_advance().unwrap();
        assert_eq!(transition.phase, Phase::QuizPending);
    }

    #[test]
    fn staged_flow_sets_monotonic_flags_and_completes() {
        let module = staged_module();
        let mut progression = ModuleProgression::new(module);

        // Tapping the wrong zone for the current stage does nothing.
        let ignored = progression.confirm_hotspot(&id("launch_button")).unwrap();
        assert_eq!(ignored.phase, Phase::Objective(0));

        progression.confirm_hotspot(&id("seat_zone")).unwrap();
        assert!(!progression.item_placed());

        progression.confirm_hotspot(&id("placement_zone")).unwrap();
        assert!(progression.item_placed());
        assert!(progression.action_armed());

        progression.confirm_hotspot(&id("launch_button")).unwrap();
        assert_eq!(progression.phase(), Phase::Objective(3));

        let fired = progression.confirm_hotspot(&id("launch_button")).unwrap();
        assert_eq!(fired.phase, Phase::Completed);
        assert_eq!(navigation_target(&fired.effects), Some(RouteTarget::Complete));

        // Flags never clear within a visit.
        assert!(progression.item_placed());
        assert!(progression.action_armed());
    }

    #[test]
    fn staged_flow_exposes_single_active_hotspot() {
        let module = staged_module();
        let progression = ModuleProgression::new(module);

        let active = progression.active_hotspots();
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].id(), &id("seat_zone"));
    }

    #[test]
    fn staged_manual_advance_applies_stage_effects() {
        let module = staged_module();
        let mut progression = ModuleProgression::new(module);

        progression.manual_advance().unwrap();
        assert!(!progression.item_placed());

        progression.manual_advance().unwrap();
        assert!(progression.item_placed());
        assert!(progression.action_armed());

        progression.manual_advance().unwrap();
        let last = progression.manual_advance().unwrap();
        assert_eq!(last.phase, Phase::Completed);
    }

    #[test]
    fn answer_quiz_outside_quiz_phase_errors() {
        let module = dashboard_module(Some(dashboard_quiz()));
        let mut progression = ModuleProgression::new(module);

        let err = progression.answer_quiz(0).unwrap_err();
        assert!(matches!(err, SessionError::QuizNotActive));
    }

    #[test]
    fn progress_view_tracks_confirmations() {
        let module = dashboard_module(Some(dashboard_quiz()));
        let mut progression = ModuleProgression::new(module);

        progression.confirm_hotspot(&id("instrument_cluster")).unwrap();
        let progress = progression.progress();
        assert_eq!(progress.step, 1);
        assert_eq!(progress.total, 4);
        assert_eq!(progress.confirmed, 1);
        assert!(!progress.quiz_visible);
        assert!(!progress.is_complete);
    }
}
