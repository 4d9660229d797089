use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ExperimentIdError {
    #[error("experiment id cannot be empty")]
    Empty,

    #[error("experiment id must be lowercase letters, digits, and hyphens: {raw}")]
    InvalidCharacters { raw: String },
}

/// Validated catalog key for an experiment (e.g. `elephant-toothpaste`).
///
/// Ids are trimmed, non-empty, and restricted to lowercase ASCII letters,
/// digits, and hyphens so they stay stable as route segments and map keys.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExperimentId(String);

impl ExperimentId {
    /// Creates a validated `ExperimentId`.
    ///
    /// # Errors
    ///
    /// Returns `ExperimentIdError::Empty` if the id is empty after trimming,
    /// or `ExperimentIdError::InvalidCharacters` for anything outside
    /// `[a-z0-9-]`.
    pub fn new(value: impl Into<String>) -> Result<Self, ExperimentIdError> {
        let raw = value.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(ExperimentIdError::Empty);
        }
        if !trimmed
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
        {
            return Err(ExperimentIdError::InvalidCharacters {
                raw: trimmed.to_string(),
            });
        }
        Ok(Self(trimmed.to_string()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ExperimentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ExperimentId({})", self.0)
    }
}

impl fmt::Display for ExperimentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ExperimentId {
    type Err = ExperimentIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

// ─── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn id_accepts_kebab_case() {
        let id = ExperimentId::new("elephant-toothpaste").unwrap();
        assert_eq!(id.as_str(), "elephant-toothpaste");
        assert_eq!(id.to_string(), "elephant-toothpaste");
    }

    #[test]
    fn id_trims_whitespace() {
        let id = ExperimentId::new("  ph-rainbow  ").unwrap();
        assert_eq!(id.as_str(), "ph-rainbow");
    }

    #[test]
    fn id_rejects_empty() {
        assert_eq!(ExperimentId::new("   "), Err(ExperimentIdError::Empty));
    }

    #[test]
    fn id_rejects_uppercase_and_spaces() {
        assert!(matches!(
            ExperimentId::new("Golden Rain"),
            Err(ExperimentIdError::InvalidCharacters { .. })
        ));
    }

    #[test]
    fn id_from_str_roundtrip() {
        let id: ExperimentId = "crystal-garden".parse().unwrap();
        assert_eq!(id, ExperimentId::new("crystal-garden").unwrap());
    }
}
