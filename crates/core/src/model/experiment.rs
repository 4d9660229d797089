use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

use crate::model::ids::ExperimentId;
use crate::model::quiz::QuizQuestion;
use crate::model::step::Step;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ExperimentError {
    #[error("experiment name cannot be empty")]
    EmptyName,

    #[error("experiment must have at least one step")]
    NoSteps,

    #[error("step ordinal mismatch at position {expected}: step carries ordinal {found}")]
    StepOrdinalMismatch { expected: usize, found: usize },
}

//
// ─── DISPLAY METADATA ──────────────────────────────────────────────────────────
//

/// How demanding an experiment is for the learner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Difficulty::Beginner => "Beginner",
            Difficulty::Intermediate => "Intermediate",
            Difficulty::Advanced => "Advanced",
        };
        write!(f, "{label}")
    }
}

/// Hazard level of the materials and reactions involved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SafetyLevel {
    Low,
    Medium,
    High,
}

impl fmt::Display for SafetyLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            SafetyLevel::Low => "Low",
            SafetyLevel::Medium => "Medium",
            SafetyLevel::High => "High",
        };
        write!(f, "{label}")
    }
}

/// Presentation-facing metadata for a catalog entry.
///
/// Everything here is display data; none of it influences progression.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExperimentMeta {
    pub difficulty: Difficulty,
    pub duration: String,
    pub safety_level: SafetyLevel,
    pub category: String,
    pub rating: f32,
    pub participants: u32,
}

impl ExperimentMeta {
    #[must_use]
    pub fn new(
        difficulty: Difficulty,
        duration: impl Into<String>,
        safety_level: SafetyLevel,
        category: impl Into<String>,
    ) -> Self {
        Self {
            difficulty,
            duration: duration.into(),
            safety_level,
            category: category.into(),
            rating: 0.0,
            participants: 0,
        }
    }

    #[must_use]
    pub fn with_rating(mut self, rating: f32) -> Self {
        self.rating = rating;
        self
    }

    #[must_use]
    pub fn with_participants(mut self, participants: u32) -> Self {
        self.participants = participants;
        self
    }
}

//
// ─── EXPERIMENT ────────────────────────────────────────────────────────────────
//

/// A named, ordered tutorial (steps) plus an optional assessment (quiz).
///
/// Experiments are immutable reference data, created at catalog load time and
/// never mutated afterwards. All mutable progress lives in `RunState`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Experiment {
    id: ExperimentId,
    name: String,
    description: String,
    meta: ExperimentMeta,
    materials: Vec<String>,
    learning_objectives: Vec<String>,
    steps: Vec<Step>,
    quiz: Vec<QuizQuestion>,
}

impl Experiment {
    /// Creates a validated experiment.
    ///
    /// # Errors
    ///
    /// Returns `ExperimentError::EmptyName` for a blank name,
    /// `ExperimentError::NoSteps` when the step list is empty, and
    /// `ExperimentError::StepOrdinalMismatch` when a step's ordinal does not
    /// match its position in the list (ordinals must be dense and 0-indexed).
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: ExperimentId,
        name: impl Into<String>,
        description: impl Into<String>,
        meta: ExperimentMeta,
        materials: Vec<String>,
        learning_objectives: Vec<String>,
        steps: Vec<Step>,
        quiz: Vec<QuizQuestion>,
    ) -> Result<Self, ExperimentError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ExperimentError::EmptyName);
        }
        if steps.is_empty() {
            return Err(ExperimentError::NoSteps);
        }
        for (expected, step) in steps.iter().enumerate() {
            if step.ordinal() != expected {
                return Err(ExperimentError::StepOrdinalMismatch {
                    expected,
                    found: step.ordinal(),
                });
            }
        }

        Ok(Self {
            id,
            name,
            description: description.into(),
            meta,
            materials,
            learning_objectives,
            steps,
            quiz,
        })
    }

    #[must_use]
    pub fn id(&self) -> &ExperimentId {
        &self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    #[must_use]
    pub fn meta(&self) -> &ExperimentMeta {
        &self.meta
    }

    #[must_use]
    pub fn materials(&self) -> &[String] {
        &self.materials
    }

    #[must_use]
    pub fn learning_objectives(&self) -> &[String] {
        &self.learning_objectives
    }

    #[must_use]
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    #[must_use]
    pub fn quiz(&self) -> &[QuizQuestion] {
        &self.quiz
    }

    /// Number of steps. Always at least 1.
    #[must_use]
    pub fn step_count(&self) -> usize {
        self.steps.len()
    }

    /// Number of quiz questions. May be zero.
    #[must_use]
    pub fn quiz_len(&self) -> usize {
        self.quiz.len()
    }

    #[must_use]
    pub fn step(&self, ordinal: usize) -> Option<&Step> {
        self.steps.get(ordinal)
    }

    #[must_use]
    pub fn question(&self, index: usize) -> Option<&QuizQuestion> {
        self.quiz.get(index)
    }
}

// ─── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn meta() -> ExperimentMeta {
        ExperimentMeta::new(Difficulty::Beginner, "10 min", SafetyLevel::Low, "Catalysis")
    }

    fn step(ordinal: usize) -> Step {
        Step::new(
            ordinal,
            format!("Step {ordinal}"),
            "desc",
            vec!["instruction".into()],
            vec![],
            "result",
            vec![],
        )
        .unwrap()
    }

    #[test]
    fn experiment_requires_name() {
        let err = Experiment::new(
            ExperimentId::new("demo").unwrap(),
            "  ",
            "desc",
            meta(),
            vec![],
            vec![],
            vec![step(0)],
            vec![],
        )
        .unwrap_err();
        assert_eq!(err, ExperimentError::EmptyName);
    }

    #[test]
    fn experiment_requires_steps() {
        let err = Experiment::new(
            ExperimentId::new("demo").unwrap(),
            "Demo",
            "desc",
            meta(),
            vec![],
            vec![],
            vec![],
            vec![],
        )
        .unwrap_err();
        assert_eq!(err, ExperimentError::NoSteps);
    }

    #[test]
    fn experiment_rejects_out_of_order_ordinals() {
        let err = Experiment::new(
            ExperimentId::new("demo").unwrap(),
            "Demo",
            "desc",
            meta(),
            vec![],
            vec![],
            vec![step(0), step(2)],
            vec![],
        )
        .unwrap_err();
        assert_eq!(
            err,
            ExperimentError::StepOrdinalMismatch {
                expected: 1,
                found: 2
            }
        );
    }

    #[test]
    fn experiment_exposes_counts_and_lookups() {
        let quiz = vec![
            QuizQuestion::new("Q1", vec!["a".into(), "b".into()], 0, "e1").unwrap(),
            QuizQuestion::new("Q2", vec!["a".into(), "b".into()], 1, "e2").unwrap(),
        ];
        let exp = Experiment::new(
            ExperimentId::new("demo").unwrap(),
            "Demo",
            "desc",
            meta().with_rating(4.9).with_participants(2100),
            vec!["Beaker".into()],
            vec!["Catalysis".into()],
            vec![step(0), step(1), step(2)],
            quiz,
        )
        .unwrap();

        assert_eq!(exp.step_count(), 3);
        assert_eq!(exp.quiz_len(), 2);
        assert_eq!(exp.step(1).unwrap().ordinal(), 1);
        assert!(exp.step(3).is_none());
        assert_eq!(exp.question(1).unwrap().correct(), 1);
        assert!(exp.question(2).is_none());
        assert!((exp.meta().rating - 4.9).abs() < f32::EPSILON);
    }
}
