// src/quiz/error.rs

use super::OptionLetter;

/// Illegal interactions with a quiz. Parsing itself never fails.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum QuizError {
    #[error("'{0}' is not an option letter (expected A, B, C or D)")]
    InvalidLetter(String),

    #[error("question {0} does not exist in this test")]
    UnknownQuestion(u32),

    #[error("question {question_id} has no option {letter}")]
    UnavailableOption { question_id: u32, letter: OptionLetter },

    #[error("answers cannot change while results are shown; retake the test first")]
    ResultsShown,

    #[error("select at least one answer before checking")]
    NothingSelected,
}
