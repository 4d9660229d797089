use thiserror::Error;

use crate::catalog::CatalogError;
use crate::model::{
    ExperimentError, ExperimentIdError, QuizQuestionError, RunSummaryError, StepError,
};
use crate::progression::ProgressionError;

/// Convergence point for every error the core crate can produce.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    #[error(transparent)]
    ExperimentId(#[from] ExperimentIdError),
    #[error(transparent)]
    Step(#[from] StepError),
    #[error(transparent)]
    Quiz(#[from] QuizQuestionError),
    #[error(transparent)]
    Experiment(#[from] ExperimentError),
    #[error(transparent)]
    Catalog(#[from] CatalogError),
    #[error(transparent)]
    Progression(#[from] ProgressionError),
    #[error(transparent)]
    Summary(#[from] RunSummaryError),
}
