use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::model::experiment::Experiment;
use crate::model::ids::ExperimentId;
use crate::model::run::{Phase, RunState};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum RunSummaryError {
    #[error("completed_at is before started_at")]
    InvalidTimeRange,

    #[error("quiz score ({score}) exceeds question count ({total})")]
    ScoreExceedsTotal { score: u32, total: u32 },

    #[error("run is not completed yet")]
    NotCompleted,
}

/// Aggregate record of one finished run of an experiment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    experiment_id: ExperimentId,
    started_at: DateTime<Utc>,
    completed_at: DateTime<Utc>,
    steps_completed: u32,
    quiz_score: u32,
    quiz_total: u32,
}

impl RunSummary {
    /// Rehydrate a run summary from raw values.
    ///
    /// # Errors
    ///
    /// Returns `RunSummaryError::InvalidTimeRange` if `completed_at` is
    /// before `started_at`, and `ScoreExceedsTotal` if the score does not
    /// fit the question count.
    pub fn new(
        experiment_id: ExperimentId,
        started_at: DateTime<Utc>,
        completed_at: DateTime<Utc>,
        steps_completed: u32,
        quiz_score: u32,
        quiz_total: u32,
    ) -> Result<Self, RunSummaryError> {
        if completed_at < started_at {
            return Err(RunSummaryError::InvalidTimeRange);
        }
        if quiz_score > quiz_total {
            return Err(RunSummaryError::ScoreExceedsTotal {
                score: quiz_score,
                total: quiz_total,
            });
        }

        Ok(Self {
            experiment_id,
            started_at,
            completed_at,
            steps_completed,
            quiz_score,
            quiz_total,
        })
    }

    /// Build a summary from a completed run.
    ///
    /// # Errors
    ///
    /// Returns `RunSummaryError::NotCompleted` unless the run's phase is
    /// `QuizCompleted`, and propagates the range/score checks of [`Self::new`].
    #[allow(clippy::cast_possible_truncation)]
    pub fn from_run(
        experiment: &Experiment,
        run: &RunState,
        started_at: DateTime<Utc>,
        completed_at: DateTime<Utc>,
    ) -> Result<Self, RunSummaryError> {
        if run.phase() != Phase::QuizCompleted {
            return Err(RunSummaryError::NotCompleted);
        }

        Self::new(
            run.experiment_id().clone(),
            started_at,
            completed_at,
            run.completed_steps().len() as u32,
            run.quiz_score() as u32,
            experiment.quiz_len() as u32,
        )
    }

    #[must_use]
    pub fn experiment_id(&self) -> &ExperimentId {
        &self.experiment_id
    }

    #[must_use]
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    #[must_use]
    pub fn completed_at(&self) -> DateTime<Utc> {
        self.completed_at
    }

    #[must_use]
    pub fn steps_completed(&self) -> u32 {
        self.steps_completed
    }

    #[must_use]
    pub fn quiz_score(&self) -> u32 {
        self.quiz_score
    }

    #[must_use]
    pub fn quiz_total(&self) -> u32 {
        self.quiz_total
    }

    /// Score as a percentage; 100 for quiz-less experiments.
    #[must_use]
    pub fn score_percent(&self) -> f64 {
        if self.quiz_total == 0 {
            return 100.0;
        }
        f64::from(self.quiz_score) / f64::from(self.quiz_total) * 100.0
    }
}

// ─── Tests ─────────────────────────────────────────────────────────────────────
