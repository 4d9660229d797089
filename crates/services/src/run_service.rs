use chrono::{DateTime, Utc};

use chemlab_core::catalog::Catalog;
use chemlab_core::model::{Experiment, ExperimentId, Phase, RunState, RunSummary};
use chemlab_core::time::Clock;

use crate::error::RunServiceError;

/// Result of answering a quiz question through the service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizAnswerResult {
    pub state: RunState,
    pub was_correct: bool,
    pub is_complete: bool,
}

/// Aggregated view of run progress, useful for UI.
#[derive(Debug, Clone, PartialEq)]
pub struct RunProgress {
    pub phase: Phase,
    pub total_steps: usize,
    pub completed_steps: usize,
    pub step_percent: f64,
    pub quiz_total: usize,
    pub quiz_answered: usize,
    pub quiz_percent: f64,
    pub is_complete: bool,
}

/// Catalog-backed facade over the progression engine.
///
/// Owns the catalog and the time source; the caller owns and threads the
/// [`RunState`]. Every operation resolves the run's experiment by id, so a
/// stale state referencing an unknown experiment surfaces as `NotFound`
/// rather than driving transitions against the wrong reference data.
#[derive(Debug, Clone)]
pub struct RunService {
    catalog: Catalog,
    clock: Clock,
}

impl RunService {
    #[must_use]
    pub fn new(catalog: Catalog, clock: Clock) -> Self {
        Self { catalog, clock }
    }

    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    #[must_use]
    pub fn now(&self) -> DateTime<Utc> {
        self.clock.now()
    }

    /// Looks up an experiment by id.
    ///
    /// # Errors
    ///
    /// Returns `RunServiceError::NotFound` for an unknown id.
    pub fn experiment(&self, id: &ExperimentId) -> Result<&Experiment, RunServiceError> {
        self.catalog
            .get(id)
            .ok_or_else(|| RunServiceError::NotFound { id: id.clone() })
    }

    /// Starts a fresh run of the experiment with the given id.
    ///
    /// # Errors
    ///
    /// Returns `RunServiceError::NotFound` for an unknown id.
    pub fn start(&self, id: &ExperimentId) -> Result<RunState, RunServiceError> {
        let experiment = self.experiment(id)?;
        Ok(RunState::start(experiment))
    }

    /// Confirms the current step and advances the run.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if the run references an unknown experiment, and
    /// propagates `ProgressionError` for invalid transitions.
    pub fn advance_step(&self, state: RunState) -> Result<RunState, RunServiceError> {
        let experiment = self.experiment(&state.experiment_id().clone())?;
        Ok(state.advance_step(experiment)?)
    }

    /// Moves the run back one step. No-op at step 0 or outside `InProgress`.
    #[must_use]
    pub fn retreat_step(&self, state: RunState) -> RunState {
        state.retreat_step()
    }

    /// Answers the current quiz question.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if the run references an unknown experiment, and
    /// propagates `ProgressionError` for invalid transitions.
    pub fn answer_quiz(
        &self,
        state: RunState,
        selected: usize,
    ) -> Result<QuizAnswerResult, RunServiceError> {
        let experiment = self.experiment(&state.experiment_id().clone())?;
        let answer = state.answer_quiz(experiment, selected)?;
        let is_complete = answer.state.is_complete();
        Ok(QuizAnswerResult {
            state: answer.state,
            was_correct: answer.was_correct,
            is_complete,
        })
    }

    /// Returns the run to its not-started state.
    #[must_use]
    pub fn reset(&self, state: RunState) -> RunState {
        state.reset()
    }

    /// Aggregated progress for the given run.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if the run references an unknown experiment.
    pub fn progress(&self, state: &RunState) -> Result<RunProgress, RunServiceError> {
        let experiment = self.experiment(state.experiment_id())?;
        Ok(RunProgress {
            phase: state.phase(),
            total_steps: experiment.step_count(),
            completed_steps: state.completed_steps().len(),
            step_percent: state.progress_percent(experiment),
            quiz_total: experiment.quiz_len(),
            quiz_answered: state.current_quiz(),
            quiz_percent: state.quiz_progress_percent(experiment),
            is_complete: state.is_complete(),
        })
    }

    /// Builds a summary for a completed run, stamping the completion time
    /// from the service clock.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` for an unknown experiment and propagates
    /// `RunSummaryError` (e.g. the run is not completed).
    pub fn summarize(
        &self,
        state: &RunState,
        started_at: DateTime<Utc>,
    ) -> Result<RunSummary, RunServiceError> {
        let experiment = self.experiment(state.experiment_id())?;
        let summary = RunSummary::from_run(experiment, state, started_at, self.clock.now())?;
        Ok(summary)
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;
    use chemlab_core::model::{
        Difficulty, ExperimentMeta, QuizQuestion, SafetyLevel, Step,
    };
    use chemlab_core::progression::ProgressionError;
    use chemlab_core::time::{fixed_clock, fixed_now};

    fn small_catalog() -> Catalog {
        let steps = vec![
            Step::new(0, "Prepare", "d", vec!["prep".into()], vec![], "ready", vec![]).unwrap(),
            Step::new(1, "React", "d", vec!["mix".into()], vec![], "foam", vec![]).unwrap(),
        ];
        let quiz = vec![
            QuizQuestion::new("Q1", vec!["a".into(), "b".into()], 1, "e1").unwrap(),
            QuizQuestion::new("Q2", vec!["a".into(), "b".into()], 0, "e2").unwrap(),
        ];
        let experiment = Experiment::new(
            ExperimentId::new("mini").unwrap(),
            "Mini",
            "desc",
            ExperimentMeta::new(Difficulty::Beginner, "5 min", SafetyLevel::Low, "Demo"),
            vec![],
            vec![],
            steps,
            quiz,
        )
        .unwrap();
        Catalog::new(vec![experiment]).unwrap()
    }

    #[test]
    fn start_unknown_id_is_not_found() {
        let svc = RunService::new(small_catalog(), fixed_clock());
        let missing = ExperimentId::new("missing").unwrap();

        let err = svc.start(&missing).unwrap_err();
        assert!(matches!(err, RunServiceError::NotFound { id } if id == missing));
    }

    #[test]
    fn full_run_through_service() {
        let svc = RunService::new(small_catalog(), fixed_clock());
        let id = ExperimentId::new("mini").unwrap();

        let mut run = svc.start(&id).unwrap();
        assert_eq!(run.phase(), Phase::InProgress);

        run = svc.advance_step(run).unwrap();
        run = svc.advance_step(run).unwrap();
        assert_eq!(run.phase(), Phase::QuizInProgress);

        let first = svc.answer_quiz(run, 1).unwrap();
        assert!(first.was_correct);
        assert!(!first.is_complete);

        let second = svc.answer_quiz(first.state, 1).unwrap();
        assert!(!second.was_correct);
        assert!(second.is_complete);
        assert_eq!(second.state.quiz_score(), 1);
    }

    #[test]
    fn progress_reflects_run_position() {
        let svc = RunService::new(small_catalog(), fixed_clock());
        let id = ExperimentId::new("mini").unwrap();

        let run = svc.start(&id).unwrap();
        let progress = svc.progress(&run).unwrap();
        assert_eq!(progress.total_steps, 2);
        assert_eq!(progress.completed_steps, 0);
        assert!((progress.step_percent - 50.0).abs() < f64::EPSILON);
        assert!(!progress.is_complete);

        let run = svc.advance_step(run).unwrap();
        let progress = svc.progress(&run).unwrap();
        assert_eq!(progress.completed_steps, 1);
        assert!((progress.step_percent - 100.0).abs() < f64::EPSILON);
        assert_eq!(progress.quiz_total, 2);
        assert_eq!(progress.quiz_answered, 0);
    }

    #[test]
    fn retreat_and_reset_pass_through() {
        let svc = RunService::new(small_catalog(), fixed_clock());
        let id = ExperimentId::new("mini").unwrap();

        let run = svc.start(&id).unwrap();
        let run = svc.advance_step(run).unwrap();
        assert_eq!(run.current_step(), 1);

        let run = svc.retreat_step(run);
        assert_eq!(run.current_step(), 0);
        assert!(run.completed_steps().is_empty());

        let run = svc.reset(run);
        assert_eq!(run.phase(), Phase::NotStarted);
    }

    #[test]
    fn answering_before_quiz_is_invalid() {
        let svc = RunService::new(small_catalog(), fixed_clock());
        let id = ExperimentId::new("mini").unwrap();

        let run = svc.start(&id).unwrap();
        let err = svc.answer_quiz(run, 0).unwrap_err();
        assert!(matches!(
            err,
            RunServiceError::Progression(ProgressionError::InvalidTransition { .. })
        ));
    }

    #[test]
    fn summarize_stamps_completion_from_clock() {
        let svc = RunService::new(small_catalog(), fixed_clock());
        let id = ExperimentId::new("mini").unwrap();

        let mut run = svc.start(&id).unwrap();
        run = svc.advance_step(run).unwrap();
        run = svc.advance_step(run).unwrap();
        run = svc.answer_quiz(run, 1).unwrap().state;
        run = svc.answer_quiz(run, 0).unwrap().state;
        assert!(run.is_complete());

        let started = fixed_now() - chrono::Duration::minutes(5);
        let summary = svc.summarize(&run, started).unwrap();
        assert_eq!(summary.completed_at(), fixed_now());
        assert_eq!(summary.quiz_score(), 2);
        assert_eq!(summary.quiz_total(), 2);
        assert_eq!(summary.steps_completed(), 2);
    }

    #[test]
    fn summarize_incomplete_run_fails() {
        let svc = RunService::new(small_catalog(), fixed_clock());
        let id = ExperimentId::new("mini").unwrap();

        let run = svc.start(&id).unwrap();
        let err = svc.summarize(&run, fixed_now()).unwrap_err();
        assert!(matches!(err, RunServiceError::Summary(_)));
    }
}
