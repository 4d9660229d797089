//! Shared error types for the services crate.

use thiserror::Error;

use chemlab_core::model::{ExperimentId, RunSummaryError};
use chemlab_core::progression::ProgressionError;

/// Errors emitted by `RunService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum RunServiceError {
    #[error("unknown experiment id: {id}")]
    NotFound { id: ExperimentId },
    #[error(transparent)]
    Progression(#[from] ProgressionError),
    #[error(transparent)]
    Summary(#[from] RunSummaryError),
}

/// Errors emitted by `AssistantService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AssistantError {
    #[error("assistant is not configured")]
    Disabled,
    #[error("assistant returned an empty response")]
    EmptyResponse,
    #[error("assistant request failed with status {0}")]
    HttpStatus(reqwest::StatusCode),
    #[error(transparent)]
    Http(#[from] reqwest::Error),
}
