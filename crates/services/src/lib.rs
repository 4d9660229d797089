#![forbid(unsafe_code)]

pub mod assistant_service;
pub mod builtin;
pub mod error;
pub mod run_service;

pub use chemlab_core::Clock;

pub use assistant_service::{AssistantConfig, AssistantService, GuidanceRequest};
pub use builtin::builtin_catalog;
pub use error::{AssistantError, RunServiceError};
pub use run_service::{QuizAnswerResult, RunProgress, RunService};
