// src/quiz/mod.rs

//! Test-content parsing and scoring.
//!
//! Generated tests arrive as loosely formatted markdown: numbered questions,
//! lettered options and, usually, an answer key at the end. This module turns that
//! text into a [`ParsedTest`] and grades a set of selected answers against it.
//! Nothing here performs I/O or fails; malformed input degrades to fewer (or zero)
//! questions and an emptier answer key.

pub mod answer_key;
pub mod error;
pub mod parser;
pub mod questions;
pub mod scoring;
pub mod session;

use std::{collections::BTreeMap, fmt, str::FromStr};

use serde::{Deserialize, Serialize};

pub use error::QuizError;
pub use parser::{ParsedTest, parse_test};
pub use scoring::{AnswerStatus, GradeReport, QuestionOutcome, ScoreBand, ScoreResult};
pub use session::QuizSession;

/// One of the four supported option letters. Tests with five or more choices are
/// not recognised.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum OptionLetter {
    A,
    B,
    C,
    D,
}

impl OptionLetter {
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'A' => Some(Self::A),
            'B' => Some(Self::B),
            'C' => Some(Self::C),
            'D' => Some(Self::D),
            _ => None,
        }
    }

    pub fn as_char(self) -> char {
        match self {
            Self::A => 'A',
            Self::B => 'B',
            Self::C => 'C',
            Self::D => 'D',
        }
    }
}

impl fmt::Display for OptionLetter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

impl FromStr for OptionLetter {
    type Err = QuizError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Self::from_char(c).ok_or_else(|| QuizError::InvalidLetter(s.to_string())),
            _ => Err(QuizError::InvalidLetter(s.to_string())),
        }
    }
}

/// A lettered choice belonging to a question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizOption {
    pub letter: OptionLetter,
    pub text: String,
}

/// A question recovered from test content.
///
/// `id` is 1-based and follows encounter order, regardless of the number printed in
/// the source. Options keep source order; they may be incomplete or out of order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedQuestion {
    pub id: u32,
    pub text: String,
    pub options: Vec<QuizOption>,
}

impl ParsedQuestion {
    pub fn offers(&self, letter: OptionLetter) -> bool {
        self.options.iter().any(|option| option.letter == letter)
    }
}

/// Question number to correct letter. May miss questions or name ones that were
/// never parsed.
pub type AnswerKey = BTreeMap<u32, OptionLetter>;

/// Question id to the letter the user picked.
pub type SelectedAnswers = BTreeMap<u32, OptionLetter>;
