use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

use crate::model::ids::ExperimentId;

/// Coarse stage of a learner's run through one experiment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    NotStarted,
    InProgress,
    QuizInProgress,
    QuizCompleted,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Phase::NotStarted => "not started",
            Phase::InProgress => "in progress",
            Phase::QuizInProgress => "quiz in progress",
            Phase::QuizCompleted => "quiz completed",
        };
        write!(f, "{label}")
    }
}

/// Mutable progress record for one learner's traversal of one experiment.
///
/// This is the only mutable entity in the domain. The caller owns the value
/// and threads it through the transition functions in [`crate::progression`];
/// there is no process-wide run registry. Invariants:
///
/// - `phase == InProgress` implies `current_step < N`
/// - `phase == QuizCompleted` implies `current_quiz == Q`
/// - `completed_steps` is always a subset of `0..N`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunState {
    pub(crate) experiment_id: ExperimentId,
    pub(crate) phase: Phase,
    pub(crate) current_step: usize,
    pub(crate) completed_steps: BTreeSet<usize>,
    pub(crate) current_quiz: usize,
    pub(crate) quiz_score: usize,
}

impl RunState {
    /// Creates a run that has not been started yet: all counters zero.
    #[must_use]
    pub fn not_started(experiment_id: ExperimentId) -> Self {
        Self {
            experiment_id,
            phase: Phase::NotStarted,
            current_step: 0,
            completed_steps: BTreeSet::new(),
            current_quiz: 0,
            quiz_score: 0,
        }
    }

    #[must_use]
    pub fn experiment_id(&self) -> &ExperimentId {
        &self.experiment_id
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Index of the step the learner is on. Meaningful while `InProgress`.
    #[must_use]
    pub fn current_step(&self) -> usize {
        self.current_step
    }

    #[must_use]
    pub fn completed_steps(&self) -> &BTreeSet<usize> {
        &self.completed_steps
    }

    /// Index of the next quiz question; equals Q once the quiz is completed.
    #[must_use]
    pub fn current_quiz(&self) -> usize {
        self.current_quiz
    }

    #[must_use]
    pub fn quiz_score(&self) -> usize {
        self.quiz_score
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.phase == Phase::QuizCompleted
    }
}

// ─── Tests ─────────────────────────────────────────────────────────────────────
