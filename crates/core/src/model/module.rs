use std::collections::HashSet;
use thiserror::Error;

use crate::model::completion::Completion;
use crate::model::hotspot::Hotspot;
use crate::model::ids::{HotspotId, ModuleId};
use crate::model::objective::{Objective, ObjectiveError};
use crate::model::quiz::Quiz;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ModuleError {
    #[error("module title cannot be empty")]
    EmptyTitle,

    #[error("module slug cannot be empty")]
    EmptySlug,

    #[error("module must define at least one objective")]
    NoObjectives,

    #[error("duplicate hotspot `{0}` in layout")]
    DuplicateLayoutHotspot(HotspotId),

    #[error("objective {step} references unknown hotspot `{hotspot}`")]
    UnknownObjectiveHotspot { step: usize, hotspot: HotspotId },

    #[error("stage {stage} references unknown hotspot `{hotspot}`")]
    UnknownStageHotspot { stage: usize, hotspot: HotspotId },

    #[error("staged flow defines {stages} stages for {objectives} objectives")]
    StageCountMismatch { stages: usize, objectives: usize },

    #[error(transparent)]
    Objective(#[from] ObjectiveError),
}

//
// ─── FLOW ──────────────────────────────────────────────────────────────────────
//

/// One step of a placement-then-action sequence.
///
/// Stage flags are monotonic within a module visit: once an item is
/// placed or the action armed, it stays that way until navigation away.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stage {
    hotspot: HotspotId,
    places_item: bool,
    arms_action: bool,
}

impl Stage {
    #[must_use]
    pub fn new(hotspot: HotspotId) -> Self {
        Self {
            hotspot,
            places_item: false,
            arms_action: false,
        }
    }

    /// Confirming this stage marks the virtual item as placed.
    #[must_use]
    pub fn with_places_item(mut self) -> Self {
        self.places_item = true;
        self
    }

    /// Confirming this stage arms the final action.
    #[must_use]
    pub fn with_arms_action(mut self) -> Self {
        self.arms_action = true;
        self
    }

    #[must_use]
    pub fn hotspot(&self) -> &HotspotId {
        &self.hotspot
    }

    #[must_use]
    pub fn places_item(&self) -> bool {
        self.places_item
    }

    #[must_use]
    pub fn arms_action(&self) -> bool {
        self.arms_action
    }
}

/// How a module's hotspots drive step advancement.
///
/// Standard modules show every hotspot at once and count confirmations;
/// staged modules expose exactly one active hotspot per step and attach
/// auxiliary flags to specific confirmations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModuleFlow {
    Standard,
    Staged { stages: Vec<Stage> },
}

impl ModuleFlow {
    #[must_use]
    pub fn is_staged(&self) -> bool {
        matches!(self, ModuleFlow::Staged { .. })
    }
}

//
// ─── MODULE ────────────────────────────────────────────────────────────────────
//

/// One unit of the tutorial: an ordered list of objectives, an optional
/// quiz, a completion action, and the static hotspot layout.
///
/// All cross-references are validated once at construction so screens can
/// index objectives and hotspots without re-checking.
#[derive(Debug, Clone, PartialEq)]
pub struct Module {
    id: ModuleId,
    slug: String,
    title: String,
    objectives: Vec<Objective>,
    quiz: Option<Quiz>,
    completion: Completion,
    layout: Vec<Hotspot>,
    flow: ModuleFlow,
    bonus: bool,
}

impl Module {
    /// Creates a validated module.
    ///
    /// # Errors
    ///
    /// Returns `ModuleError` for a blank title/slug, an empty objective
    /// list, duplicate layout hotspots, objectives or stages referencing
    /// hotspots missing from the layout, or a staged flow whose stage
    /// count does not match the objective count.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: ModuleId,
        slug: impl Into<String>,
        title: impl Into<String>,
        objectives: Vec<Objective>,
        quiz: Option<Quiz>,
        completion: Completion,
        layout: Vec<Hotspot>,
        flow: ModuleFlow,
    ) -> Result<Self, ModuleError> {
        let slug = slug.into();
        if slug.trim().is_empty() {
            return Err(ModuleError::EmptySlug);
        }
        let title = title.into();
        if title.trim().is_empty() {
            return Err(ModuleError::EmptyTitle);
        }
        if objectives.is_empty() {
            return Err(ModuleError::NoObjectives);
        }

        let mut seen: HashSet<&HotspotId> = HashSet::new();
        for hotspot in &layout {
            if !seen.insert(hotspot.id()) {
                return Err(ModuleError::DuplicateLayoutHotspot(hotspot.id().clone()));
            }
        }

        for (step, objective) in objectives.iter().enumerate() {
            if !seen.contains(objective.hotspot()) {
                return Err(ModuleError::UnknownObjectiveHotspot {
                    step,
                    hotspot: objective.hotspot().clone(),
                });
            }
        }

        if let ModuleFlow::Staged { stages } = &flow {
            if stages.len() != objectives.len() {
                return Err(ModuleError::StageCountMismatch {
                    stages: stages.len(),
                    objectives: objectives.len(),
                });
            }
            for (index, stage) in stages.iter().enumerate() {
                if !seen.contains(stage.hotspot()) {
                    return Err(ModuleError::UnknownStageHotspot {
                        stage: index,
                        hotspot: stage.hotspot().clone(),
                    });
                }
            }
        }

        Ok(Self {
            id,
            slug: slug.trim().to_owned(),
            title: title.trim().to_owned(),
            objectives,
            quiz,
            completion,
            layout,
            flow,
            bonus: false,
        })
    }

    /// Marks this module as a bonus module, excluded from the primary
    /// module count shown in the progress header.
    #[must_use]
    pub fn as_bonus(mut self) -> Self {
        self.bonus = true;
        self
    }

    #[must_use]
    pub fn id(&self) -> ModuleId {
        self.id
    }

    #[must_use]
    pub fn slug(&self) -> &str {
        &self.slug
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn objectives(&self) -> &[Objective] {
        &self.objectives
    }

    /// Objective at the given step index, if in range.
    #[must_use]
    pub fn objective(&self, step: usize) -> Option<&Objective> {
        self.objectives.get(step)
    }

    #[must_use]
    pub fn quiz(&self) -> Option<&Quiz> {
        self.quiz.as_ref()
    }

    #[must_use]
    pub fn completion(&self) -> &Completion {
        &self.completion
    }

    #[must_use]
    pub fn layout(&self) -> &[Hotspot] {
        &self.layout
    }

    /// Looks up a layout hotspot by id.
    #[must_use]
    pub fn hotspot(&self, id: &HotspotId) -> Option<&Hotspot> {
        self.layout.iter().find(|hotspot| hotspot.id() == id)
    }

    #[must_use]
    pub fn flow(&self) -> &ModuleFlow {
        &self.flow
    }

    #[must_use]
    pub fn is_bonus(&self) -> bool {
        self.bonus
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::completion::RouteTarget;

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

    fn completion() -> Completion {
        Completion::new(RouteTarget::Module(ModuleId::new(2)), "Onward!", true)
    }

    #[test]
    fn module_rejects_empty_objectives() {
        let err = Module::new(
            ModuleId::new(1),
            "dashboard_overview",
            "Dashboard Overview",
            Vec::new(),
            None,
            completion(),
            vec![hotspot("instrument_cluster")],
            ModuleFlow::Standard,
        )
        .unwrap_err();
        assert_eq!(err, ModuleError::NoObjectives);
    }

    #[test]
    fn module_rejects_unknown_objective_hotspot() {
        let err = Module::new(
            ModuleId::new(1),
            "dashboard_overview",
            "Dashboard Overview",
            vec![objective("Instrument Cluster", "instrument_cluster")],
            None,
            completion(),
            vec![hotspot("climate_panel")],
            ModuleFlow::Standard,
        )
        .unwrap_err();
        assert!(matches!(
            err,
            ModuleError::UnknownObjectiveHotspot { step: 0, .. }
        ));
    }

    #[test]
    fn module_rejects_duplicate_layout_hotspot() {
        let err = Module::new(
            ModuleId::new(1),
            "dashboard_overview",
            "Dashboard Overview",
            vec![objective("Instrument Cluster", "instrument_cluster")],
            None,
            completion(),
            vec![hotspot("instrument_cluster"), hotspot("instrument_cluster")],
            ModuleFlow::Standard,
        )
        .unwrap_err();
        assert!(matches!(err, ModuleError::DuplicateLayoutHotspot(_)));
    }

    #[test]
    fn module_rejects_stage_count_mismatch() {
        let err = Module::new(
            ModuleId::new(11),
            "bonus",
            "Bonus Module",
            vec![
                objective("Seat", "seat_zone"),
                objective("Place", "placement_zone"),
            ],
            None,
            completion(),
            vec![hotspot("seat_zone"), hotspot("placement_zone")],
            ModuleFlow::Staged {
                stages: vec![Stage::new(HotspotId::new("seat_zone").unwrap())],
            },
        )
        .unwrap_err();
        assert_eq!(
            err,
            ModuleError::StageCountMismatch {
                stages: 1,
                objectives: 2
            }
        );
    }

    #[test]
    fn module_happy_path_with_lookup() {
        let module = Module::new(
            ModuleId::new(1),
            "dashboard_overview",
            "Dashboard Overview",
            vec![
                objective("Instrument Cluster", "instrument_cluster"),
                objective("Climate Panel", "climate_panel"),
            ],
            None,
            completion(),
            vec![hotspot("instrument_cluster"), hotspot("climate_panel")],
            ModuleFlow::Standard,
        )
        .unwrap();

        assert_eq!(module.objectives().len(), 2);
        assert!(!module.flow().is_staged());
        assert!(!module.is_bonus());
        let id = HotspotId::new("climate_panel").unwrap();
        assert_eq!(module.hotspot(&id).unwrap().label(), "climate panel");
        assert!(module.objective(2).is_none());
    }

    #[test]
    fn bonus_marker_sticks() {
        let module = Module::new(
            ModuleId::new(11),
            "bonus",
            "Bonus Module",
            vec![objective("Seat", "seat_zone")],
            None,
            completion(),
            vec![hotspot("seat_zone")],
            ModuleFlow::Staged {
                stages: vec![Stage::new(HotspotId::new("seat_zone").unwrap())],
            },
        )
        .unwrap()
        .as_bonus();

        assert!(module.is_bonus());
        assert!(module.flow().is_staged());
    }
}
