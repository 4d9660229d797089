//! Pure transition functions driving a learner's walk through an experiment.
//!
//! The engine owns no state: every operation takes a [`RunState`] by value
//! and returns the successor state. The caller (typically a presentation
//! layer via the services crate) threads the state through; nothing here
//! performs I/O, suspends, or touches globals.

use thiserror::Error;

use crate::model::{Experiment, ExperimentId, Phase, RunState};

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ProgressionError {
    #[error("{operation} is not valid while the run is {phase}")]
    InvalidTransition {
        operation: &'static str,
        phase: Phase,
    },

    #[error("run belongs to experiment {expected}, but was driven with {found}")]
    ExperimentMismatch {
        expected: ExperimentId,
        found: ExperimentId,
    },
}

/// Outcome of answering one quiz question: the successor state plus an
/// immediate-feedback flag for the UI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizAnswer {
    pub state: RunState,
    pub was_correct: bool,
}

//
// ─── TRANSITIONS ───────────────────────────────────────────────────────────────
//

impl RunState {
    /// Begins a fresh run of the given experiment.
    ///
    /// The returned state is already `InProgress` at step 0 with no steps
    /// completed and all quiz counters zeroed.
    #[must_use]
    pub fn start(experiment: &Experiment) -> Self {
        let mut state = Self::not_started(experiment.id().clone());
        state.phase = Phase::InProgress;
        state
    }

    /// Confirms the current step and moves forward.
    ///
    /// Marks the current step completed. On any step but the last this
    /// advances to the next step; on the last step the run hands off to the
    /// quiz (`QuizInProgress`) or, for experiments without a quiz, completes
    /// outright with a zero score.
    ///
    /// This is the sole forward-progress operation. It is meant to be called
    /// once per user-confirmed step; calling it twice for the same logical
    /// step double-advances, matching a single "Next" action per step.
    ///
    /// # Errors
    ///
    /// Returns `ProgressionError::InvalidTransition` outside `InProgress` and
    /// `ProgressionError::ExperimentMismatch` when driven with an experiment
    /// the run does not reference.
    pub fn advance_step(mut self, experiment: &Experiment) -> Result<Self, ProgressionError> {
        self.check_pairing(experiment)?;
        if self.phase != Phase::InProgress {
            return Err(ProgressionError::InvalidTransition {
                operation: "advance_step",
                phase: self.phase,
            });
        }

        self.completed_steps.insert(self.current_step);

        if self.current_step < experiment.step_count() - 1 {
            self.current_step += 1;
            return Ok(self);
        }

        // Last step confirmed: hand off to the quiz, or complete outright.
        self.current_quiz = 0;
        if experiment.quiz_len() > 0 {
            self.phase = Phase::QuizInProgress;
        } else {
            self.phase = Phase::QuizCompleted;
            self.quiz_score = 0;
        }
        Ok(self)
    }

    /// Moves back one step.
    ///
    /// A documented no-op at step 0 or outside `InProgress`. Moving back
    /// un-marks the step being returned to as incomplete even though it was
    /// previously confirmed; this mirrors the reference behavior and is
    /// intentionally lossy.
    #[must_use]
    pub fn retreat_step(mut self) -> Self {
        if self.phase != Phase::InProgress || self.current_step == 0 {
            return self;
        }
        self.current_step -= 1;
        self.completed_steps.remove(&self.current_step);
        self
    }

    /// Answers the current quiz question.
    ///
    /// A correct selection increments the score. An out-of-range selection is
    /// treated as an incorrect answer, not an error. Answering the final
    /// question transitions to `QuizCompleted` with `current_quiz == Q`.
    ///
    /// # Errors
    ///
    /// Returns `ProgressionError::InvalidTransition` outside `QuizInProgress`
    /// and `ProgressionError::ExperimentMismatch` for a foreign experiment.
    pub fn answer_quiz(
        mut self,
        experiment: &Experiment,
        selected: usize,
    ) -> Result<QuizAnswer, ProgressionError> {
        self.check_pairing(experiment)?;
        if self.phase != Phase::QuizInProgress {
            return Err(ProgressionError::InvalidTransition {
                operation: "answer_quiz",
                phase: self.phase,
            });
        }
        let Some(question) = experiment.question(self.current_quiz) else {
            return Err(ProgressionError::InvalidTransition {
                operation: "answer_quiz",
                phase: self.phase,
            });
        };

        let was_correct = question.is_correct(selected);
        if was_correct {
            self.quiz_score += 1;
        }

        if self.current_quiz < experiment.quiz_len() - 1 {
            self.current_quiz += 1;
        } else {
            self.current_quiz = experiment.quiz_len();
            self.phase = Phase::QuizCompleted;
        }

        Ok(QuizAnswer {
            state: self,
            was_correct,
        })
    }

    /// Returns the run to a freshly-constructed, not-started state.
    ///
    /// Always valid, from any phase. All counters are zeroed and the
    /// completed set is emptied; the experiment reference is kept.
    #[must_use]
    pub fn reset(self) -> Self {
        Self::not_started(self.experiment_id)
    }

    /// Step progress as a percentage, always recomputed (never stored).
    ///
    /// 0 before the run starts, `(current_step + 1) / N * 100` while
    /// `InProgress`, and 100 once the steps are behind the learner.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn progress_percent(&self, experiment: &Experiment) -> f64 {
        match self.phase {
            Phase::NotStarted => 0.0,
            Phase::InProgress => {
                (self.current_step + 1) as f64 / experiment.step_count() as f64 * 100.0
            }
            Phase::QuizInProgress | Phase::QuizCompleted => 100.0,
        }
    }

    /// Quiz progress as a percentage: `current_quiz / Q * 100` (0 when the
    /// experiment has no quiz).
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn quiz_progress_percent(&self, experiment: &Experiment) -> f64 {
        if experiment.quiz_len() == 0 {
            return 0.0;
        }
        self.current_quiz as f64 / experiment.quiz_len() as f64 * 100.0
    }

    fn check_pairing(&self, experiment: &Experiment) -> Result<(), ProgressionError> {
        if experiment.id() != &self.experiment_id {
            return Err(ProgressionError::ExperimentMismatch {
                expected: self.experiment_id.clone(),
                found: experiment.id().clone(),
            });
        }
        Ok(())
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
