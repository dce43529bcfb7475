// src/quiz/scoring.rs

use serde::Serialize;

use super::{AnswerKey, OptionLetter, ParsedQuestion, SelectedAnswers};

/// Aggregate result of a graded attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScoreResult {
    pub correct_count: usize,
    /// Number of parsed questions, answered or not.
    pub total: usize,
    pub percentage: u8,
}

impl ScoreResult {
    pub fn band(&self) -> ScoreBand {
        ScoreBand::for_percentage(self.percentage)
    }
}

/// Feedback tier shown next to the score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreBand {
    Excellent,
    Good,
    KeepPracticing,
}

impl ScoreBand {
    pub fn for_percentage(percentage: u8) -> Self {
        match percentage {
            80.. => Self::Excellent,
            60..=79 => Self::Good,
            _ => Self::KeepPracticing,
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            Self::Excellent => "Excellent work!",
            Self::Good => "Good job! Keep studying!",
            Self::KeepPracticing => "Keep practicing! You'll get there!",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AnswerStatus {
    Correct,
    Incorrect,
    NotAnswered,
}

/// Per-question comparison, for showing which answers were wrong.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuestionOutcome {
    pub question_id: u32,
    pub selected: Option<OptionLetter>,
    pub correct_answer: Option<OptionLetter>,
    pub status: AnswerStatus,
}

/// Everything a results view needs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GradeReport {
    pub score: ScoreResult,
    pub band: ScoreBand,
    pub message: &'static str,
    pub outcomes: Vec<QuestionOutcome>,
}

/// A question is correct only when it was answered, the key has an entry for it and
/// the two agree. A missing key entry can never be matched.
pub fn is_correct(question_id: u32, answer_key: &AnswerKey, selected: &SelectedAnswers) -> bool {
    match (selected.get(&question_id), answer_key.get(&question_id)) {
        (Some(chosen), Some(expected)) => chosen == expected,
        _ => false,
    }
}

/// `round(correct / total * 100)` with halves rounded up; zero when there are no
/// questions.
pub fn percentage(correct: usize, total: usize) -> u8 {
    if total == 0 {
        return 0;
    }
    let correct = correct.min(total);
    ((200 * correct + total) / (2 * total)) as u8
}

pub fn score(
    questions: &[ParsedQuestion],
    answer_key: &AnswerKey,
    selected: &SelectedAnswers,
) -> ScoreResult {
    let total = questions.len();
    let correct_count = questions
        .iter()
        .filter(|question| is_correct(question.id, answer_key, selected))
        .count();

    ScoreResult {
        correct_count,
        total,
        percentage: percentage(correct_count, total),
    }
}

pub fn outcomes(
    questions: &[ParsedQuestion],
    answer_key: &AnswerKey,
    selected: &SelectedAnswers,
) -> Vec<QuestionOutcome> {
    questions
        .iter()
        .map(|question| {
            let chosen = selected.get(&question.id).copied();
            let status = match chosen {
                None => AnswerStatus::NotAnswered,
                Some(_) if is_correct(question.id, answer_key, selected) => AnswerStatus::Correct,
                Some(_) => AnswerStatus::Incorrect,
            };
            QuestionOutcome {
                question_id: question.id,
                selected: chosen,
                correct_answer: answer_key.get(&question.id).copied(),
                status,
            }
        })
        .collect()
}

pub fn grade(
    questions: &[ParsedQuestion],
    answer_key: &AnswerKey,
    selected: &SelectedAnswers,
) -> GradeReport {
    let score = score(questions, answer_key, selected);
    let band = score.band();
    GradeReport {
        score,
        band,
        message: band.message(),
        outcomes: outcomes(questions, answer_key, selected),
    }
}
