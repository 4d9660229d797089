use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuizQuestionError {
    #[error("quiz question text cannot be empty")]
    EmptyQuestion,

    #[error("quiz question needs at least two options, got {found}")]
    TooFewOptions { found: usize },

    #[error("correct option index {correct} is out of range for {options} options")]
    CorrectOutOfRange { correct: usize, options: usize },
}

/// A single multiple-choice question asked after the experiment's steps.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizQuestion {
    question: String,
    options: Vec<String>,
    correct: usize,
    explanation: String,
}

impl QuizQuestion {
    /// Creates a validated quiz question.
    ///
    /// # Errors
    ///
    /// Returns `QuizQuestionError::EmptyQuestion` for blank question text,
    /// `TooFewOptions` when fewer than two options are given, and
    /// `CorrectOutOfRange` when the correct index does not point at an option.
    pub fn new(
        question: impl Into<String>,
        options: Vec<String>,
        correct: usize,
        explanation: impl Into<String>,
    ) -> Result<Self, QuizQuestionError> {
        let question = question.into();
        if question.trim().is_empty() {
            return Err(QuizQuestionError::EmptyQuestion);
        }
        if options.len() < 2 {
            return Err(QuizQuestionError::TooFewOptions {
                found: options.len(),
            });
        }
        if correct >= options.len() {
            return Err(QuizQuestionError::CorrectOutOfRange {
                correct,
                options: options.len(),
            });
        }

        Ok(Self {
            question,
            options,
            correct,
            explanation: explanation.into(),
        })
    }

    #[must_use]
    pub fn question(&self) -> &str {
        &self.question
    }

    #[must_use]
    pub fn options(&self) -> &[String] {
        &self.options
    }

    #[must_use]
    pub fn correct(&self) -> usize {
        self.correct
    }

    #[must_use]
    pub fn explanation(&self) -> &str {
        &self.explanation
    }

    /// Whether the selected option index is the correct answer.
    ///
    /// Out-of-range selections are simply incorrect, matching the permissive
    /// input handling of the presentation layer.
    #[must_use]
    pub fn is_correct(&self, selected: usize) -> bool {
        selected == self.correct
    }
}

// ─── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn options(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| (*v).to_string()).collect()
    }

    #[test]
    fn question_requires_text() {
        let err = QuizQuestion::new("", options(&["a", "b"]), 0, "because").unwrap_err();
        assert_eq!(err, QuizQuestionError::EmptyQuestion);
    }

    #[test]
    fn question_requires_two_options() {
        let err = QuizQuestion::new("Why?", options(&["a"]), 0, "because").unwrap_err();
        assert_eq!(err, QuizQuestionError::TooFewOptions { found: 1 });
    }

    #[test]
    fn question_rejects_out_of_range_correct_index() {
        let err = QuizQuestion::new("Why?", options(&["a", "b"]), 2, "because").unwrap_err();
        assert_eq!(
            err,
            QuizQuestionError::CorrectOutOfRange {
                correct: 2,
                options: 2
            }
        );
    }

    #[test]
    fn is_correct_matches_only_the_correct_index() {
        let q = QuizQuestion::new(
            "What role does potassium iodide play?",
            options(&["Reactant", "Catalyst", "Product", "Inhibitor"]),
            1,
            "KI speeds up the decomposition without being consumed.",
        )
        .unwrap();

        assert!(q.is_correct(1));
        assert!(!q.is_correct(0));
        // Out of range is incorrect, never an error.
        assert!(!q.is_correct(99));
    }
}
