// src/quiz/parser.rs

use serde::Serialize;

use super::{
    AnswerKey, ParsedQuestion, answer_key::extract_answer_key, questions::extract_questions,
};

/// Structured view of a generated test.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ParsedTest {
    pub questions: Vec<ParsedQuestion>,
    pub answer_key: AnswerKey,
}

impl ParsedTest {
    pub fn parse(content: &str) -> Self {
        parse_test(content)
    }

    /// False when no question could be recognised; callers should then show the raw
    /// content as prose instead of a quiz.
    pub fn is_interactive(&self) -> bool {
        !self.questions.is_empty()
    }

    pub fn question(&self, id: u32) -> Option<&ParsedQuestion> {
        self.questions.iter().find(|question| question.id == id)
    }
}

/// Parses raw test content into questions and an answer key.
///
/// Pure: the same input always produces the same output. Questions are extracted
/// first because the loosest answer-key strategy only accepts numbers up to the
/// question count.
pub fn parse_test(content: &str) -> ParsedTest {
    // A leading byte-order mark would hide the first question number.
    let content = content.strip_prefix('\u{feff}').unwrap_or(content);

    let questions = extract_questions(content);
    let answer_key = extract_answer_key(content, questions.len());

    tracing::debug!(
        questions = questions.len(),
        answers = answer_key.len(),
        "parsed test content"
    );

    ParsedTest {
        questions,
        answer_key,
    }
}
