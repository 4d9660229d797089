use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum StepError {
    #[error("step title cannot be empty")]
    EmptyTitle,

    #[error("step must have at least one instruction")]
    NoInstructions,
}

/// One instructed action within an experiment.
///
/// Steps are immutable reference data. The `ordinal` is 0-indexed and must
/// match the step's position in the experiment's step list; `Experiment::new`
/// enforces that.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Step {
    ordinal: usize,
    title: String,
    description: String,
    instructions: Vec<String>,
    safety_notes: Vec<String>,
    expected_result: String,
    tips: Vec<String>,
}

impl Step {
    /// Creates a validated step.
    ///
    /// # Errors
    ///
    /// Returns `StepError::EmptyTitle` if the title is empty after trimming.
    /// Returns `StepError::NoInstructions` if the instruction list is empty.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        ordinal: usize,
        title: impl Into<String>,
        description: impl Into<String>,
        instructions: Vec<String>,
        safety_notes: Vec<String>,
        expected_result: impl Into<String>,
        tips: Vec<String>,
    ) -> Result<Self, StepError> {
        let title = title.into();
        if title.trim().is_empty() {
            return Err(StepError::EmptyTitle);
        }
        if instructions.is_empty() {
            return Err(StepError::NoInstructions);
        }

        Ok(Self {
            ordinal,
            title,
            description: description.into(),
            instructions,
            safety_notes,
            expected_result: expected_result.into(),
            tips,
        })
    }

    #[must_use]
    pub fn ordinal(&self) -> usize {
        self.ordinal
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    #[must_use]
    pub fn instructions(&self) -> &[String] {
        &self.instructions
    }

    #[must_use]
    pub fn safety_notes(&self) -> &[String] {
        &self.safety_notes
    }

    #[must_use]
    pub fn expected_result(&self) -> &str {
        &self.expected_result
    }

    #[must_use]
    pub fn tips(&self) -> &[String] {
        &self.tips
    }
}

// ─── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn step_requires_title() {
        let err = Step::new(
            0,
            "  ",
            "desc",
            vec!["do the thing".into()],
            vec![],
            "done",
            vec![],
        )
        .unwrap_err();
        assert_eq!(err, StepError::EmptyTitle);
    }

    #[test]
    fn step_requires_instructions() {
        let err = Step::new(0, "Safety Preparation", "desc", vec![], vec![], "done", vec![])
            .unwrap_err();
        assert_eq!(err, StepError::NoInstructions);
    }

    #[test]
    fn step_allows_empty_safety_notes_and_tips() {
        let step = Step::new(
            2,
            "Observe",
            "Watch the reaction",
            vec!["Stand back".into(), "Record what you see".into()],
            vec![],
            "Foam forms",
            vec![],
        )
        .unwrap();

        assert_eq!(step.ordinal(), 2);
        assert_eq!(step.instructions().len(), 2);
        assert!(step.safety_notes().is_empty());
        assert!(step.tips().is_empty());
    }
}
