use thiserror::Error;

use crate::model::ids::HotspotId;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ObjectiveError {
    #[error("objective target cannot be empty")]
    EmptyTarget,

    #[error("objective instruction cannot be empty")]
    EmptyInstruction,
}

/// One instructional step within a module, tied to one hotspot.
///
/// Objectives are identified by their position in the module's ordered
/// list; the position drives the step index of the progression machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Objective {
    target: String,
    instruction: String,
    narration: String,
    hotspot: HotspotId,
}

impl Objective {
    /// Creates a new objective.
    ///
    /// # Errors
    ///
    /// Returns `ObjectiveError` if the target or instruction is blank.
    pub fn new(
        target: impl Into<String>,
        instruction: impl Into<String>,
        narration: impl Into<String>,
        hotspot: HotspotId,
    ) -> Result<Self, ObjectiveError> {
        let target = target.into();
        if target.trim().is_empty() {
            return Err(ObjectiveError::EmptyTarget);
        }
        let instruction = instruction.into();
        if instruction.trim().is_empty() {
            return Err(ObjectiveError::EmptyInstruction);
        }

        Ok(Self {
            target: target.trim().to_owned(),
            instruction: instruction.trim().to_owned(),
            narration: narration.into().trim().to_owned(),
            hotspot,
        })
    }

    #[must_use]
    pub fn target(&self) -> &str {
        &self.target
    }

    #[must_use]
    pub fn instruction(&self) -> &str {
        &self.instruction
    }

    /// Voice line for this step. May be empty when a step is silent.
    #[must_use]
    pub fn narration(&self) -> &str {
        &self.narration
    }

    #[must_use]
    pub fn hotspot(&self) -> &HotspotId {
        &self.hotspot
    }
}
