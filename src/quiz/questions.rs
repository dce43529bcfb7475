// src/quiz/questions.rs

use std::sync::LazyLock;

use regex::Regex;

use super::{OptionLetter, ParsedQuestion, QuizOption, answer_key::is_answer_key_marker};

static QUESTION_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]+\.\s*").expect("static regex must compile"));

static OPTION_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([A-D])[.)]\s*").expect("static regex must compile"));

/// Extracts numbered questions and their lettered options, in source order.
///
/// Scanning stops at the first answer-key marker so the key's `1. A` lines are
/// never read as questions. Ids are reassigned 1, 2, 3, ... in encounter order.
pub fn extract_questions(content: &str) -> Vec<ParsedQuestion> {
    let mut questions = Vec::new();
    let mut current: Option<ParsedQuestion> = None;

    for line in content.split('\n').map(str::trim) {
        if is_answer_key_marker(line) {
            break;
        }

        if let Some(prefix) = QUESTION_PREFIX.find(line) {
            questions.extend(current.take());
            current = Some(ParsedQuestion {
                id: questions.len() as u32 + 1,
                text: line[prefix.end()..].to_string(),
                options: Vec::new(),
            });
        } else if let (Some(question), Some(caps)) = (current.as_mut(), OPTION_PREFIX.captures(line)) {
            let Some(letter) = caps[1].chars().next().and_then(OptionLetter::from_char) else {
                continue;
            };
            question.options.push(QuizOption {
                letter,
                text: line[caps.get(0).map_or(0, |m| m.end())..].to_string(),
            });
        }
    }

    questions.extend(current);
    questions
}
