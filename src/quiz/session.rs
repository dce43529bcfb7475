// src/quiz/session.rs

use super::{
    OptionLetter, ParsedTest, QuizError, SelectedAnswers,
    scoring::{self, GradeReport},
};

/// Interactive attempt at a parsed test.
///
/// Starts in the answering phase. `check_answers` moves to results once something is
/// selected; `retake` clears selections and results and returns to answering. The
/// parsed test itself is never modified.
#[derive(Debug, Clone)]
pub struct QuizSession {
    test: ParsedTest,
    selected: SelectedAnswers,
    /// Present while results are shown.
    results: Option<GradeReport>,
}

impl QuizSession {
    pub fn new(test: ParsedTest) -> Self {
        Self {
            test,
            selected: SelectedAnswers::new(),
            results: None,
        }
    }

    pub fn test(&self) -> &ParsedTest {
        &self.test
    }

    pub fn selected(&self) -> &SelectedAnswers {
        &self.selected
    }

    pub fn answered_count(&self) -> usize {
        self.selected.len()
    }

    pub fn is_showing_results(&self) -> bool {
        self.results.is_some()
    }

    /// Whether "check answers" is currently available.
    pub fn can_check(&self) -> bool {
        !self.is_showing_results() && !self.selected.is_empty()
    }

    /// Records (or replaces) the answer for one question.
    pub fn select(&mut self, question_id: u32, letter: OptionLetter) -> Result<(), QuizError> {
        if self.is_showing_results() {
            return Err(QuizError::ResultsShown);
        }

        let question = self
            .test
            .question(question_id)
            .ok_or(QuizError::UnknownQuestion(question_id))?;

        if !question.offers(letter) {
            return Err(QuizError::UnavailableOption {
                question_id,
                letter,
            });
        }

        self.selected.insert(question_id, letter);
        Ok(())
    }

    /// Grades the current selections and switches to the results phase.
    pub fn check_answers(&mut self) -> Result<&GradeReport, QuizError> {
        if self.is_showing_results() {
            return Err(QuizError::ResultsShown);
        }
        if self.selected.is_empty() {
            return Err(QuizError::NothingSelected);
        }

        let report = scoring::grade(&self.test.questions, &self.test.answer_key, &self.selected);
        Ok(&*self.results.insert(report))
    }

    pub fn results(&self) -> Option<&GradeReport> {
        self.results.as_ref()
    }

    /// Clears selections and results.
    pub fn retake(&mut self) {
        self.selected.clear();
        self.results = None;
    }
}
