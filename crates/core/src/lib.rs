#![forbid(unsafe_code)]

pub mod catalog;
pub mod error;
pub mod model;
pub mod progression;
pub mod time;

pub use catalog::{Catalog, CatalogError};
pub use error::Error;
pub use progression::{ProgressionError, QuizAnswer};
pub use time::Clock;
