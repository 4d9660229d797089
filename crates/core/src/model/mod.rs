mod experiment;
mod ids;
mod quiz;
mod run;
mod step;
mod summary;

pub use experiment::{Difficulty, Experiment, ExperimentError, ExperimentMeta, SafetyLevel};
pub use ids::{ExperimentId, ExperimentIdError};
pub use quiz::{QuizQuestion, QuizQuestionError};
pub use run::{Phase, RunState};
pub use step::{Step, StepError};
pub use summary::{RunSummary, RunSummaryError};
