// src/models/quiz.rs

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::quiz::{AnswerKey, GradeReport, ParsedQuestion, ParsedTest, SelectedAnswers};

/// How a client should present a test.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PresentationMode {
    /// Interactive multiple-choice quiz.
    Quiz,
    /// Nothing recognisable as a question; render the raw markdown.
    Prose,
}

/// Parsed test as sent to clients. Raw content is included only for prose mode.
#[derive(Debug, Serialize)]
pub struct ParsedTestView {
    pub mode: PresentationMode,
    pub questions: Vec<ParsedQuestion>,
    pub answer_key: AnswerKey,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

impl ParsedTestView {
    pub fn new(parsed: ParsedTest, content: &str) -> Self {
        let interactive = parsed.is_interactive();
        Self {
            mode: if interactive {
                PresentationMode::Quiz
            } else {
                PresentationMode::Prose
            },
            questions: parsed.questions,
            answer_key: parsed.answer_key,
            content: (!interactive).then(|| content.to_string()),
        }
    }
}

/// DTO for parsing arbitrary test content.
#[derive(Debug, Deserialize, Validate)]
pub struct ParseRequest {
    #[validate(length(max = 200000, message = "Content must be at most 200000 chars"))]
    pub content: String,
}

/// DTO for grading arbitrary test content.
#[derive(Debug, Deserialize, Validate)]
pub struct GradeRequest {
    #[validate(length(max = 200000, message = "Content must be at most 200000 chars"))]
    pub content: String,
    pub answers: SelectedAnswers,
}

/// DTO for grading a stored test.
///
/// Key: question id. Value: selected option letter.
#[derive(Debug, Deserialize)]
pub struct SubmitAnswersRequest {
    pub answers: SelectedAnswers,
}

#[derive(Debug, Serialize)]
pub struct GradeResponse {
    /// Number of questions the submission answered.
    pub answered: usize,
    #[serde(flatten)]
    pub report: GradeReport,
}
