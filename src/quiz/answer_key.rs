// src/quiz/answer_key.rs

//! Answer-key recovery.
//!
//! Generated tests rarely agree on how the key is written, so extraction runs a
//! chain of strategies from most to least specific and stops at the first one that
//! finds anything:
//!
//! 1. a section introduced by a marker line ("Answer Key", "Correct answers", ...)
//! 2. the first line holding three or more `N. X` pairs
//! 3. lines in the last fifth of the text consisting only of `N. X`
//! 4. a loose scan of the whole text, bounded by the number of parsed questions

use std::sync::LazyLock;

use regex::Regex;

use super::{AnswerKey, OptionLetter};

const MARKERS: [&str; 4] = ["answer key", "answers:", "correct answers", "answer:"];

/// Lines needed before a marker-less line is taken for the key.
const DENSE_LINE_MIN_ANSWERS: usize = 3;

static ANSWER_PAIR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([0-9]+)[.:)]\s*([A-D])").expect("static regex must compile"));

static ANSWER_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([0-9]+)[.:)]\s*([A-D])\s*$").expect("static regex must compile")
});

static LOOSE_ANSWER_PAIR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:^|\s)([0-9]+)[.:)]\s*([A-D])(?:\s|,|$)").expect("static regex must compile")
});

/// Returns true when the line opens the answer-key section.
pub fn is_answer_key_marker(line: &str) -> bool {
    let lower = line.to_lowercase();
    MARKERS.iter().any(|marker| lower.contains(marker))
}

/// Recovers the answer key from raw test content.
///
/// `parsed_questions` bounds the last-resort scan so stray numbers in prose are not
/// read as answers. An empty key is a valid result.
pub fn extract_answer_key(content: &str, parsed_questions: usize) -> AnswerKey {
    let lines: Vec<&str> = content.split('\n').collect();

    let chain: [(&str, &dyn Fn() -> AnswerKey); 4] = [
        ("marked_section", &|| marked_section(&lines)),
        ("dense_line", &|| dense_line(&lines)),
        ("tail_lines", &|| tail_lines(&lines)),
        ("loose_scan", &|| loose_scan(&lines, parsed_questions)),
    ];

    for (strategy, run) in chain {
        let key = run();
        if !key.is_empty() {
            tracing::debug!(strategy, entries = key.len(), "answer key recovered");
            return key;
        }
    }

    tracing::debug!("no answer key found");
    AnswerKey::new()
}

/// Every `N. X` pair after the first marker line. Later pairs overwrite earlier ones.
fn marked_section(lines: &[&str]) -> AnswerKey {
    let mut key = AnswerKey::new();
    let mut in_section = false;

    for line in lines.iter().map(|line| line.trim()) {
        if is_answer_key_marker(line) {
            in_section = true;
            continue;
        }
        if in_section && !line.is_empty() {
            key.extend(pairs(&ANSWER_PAIR, line));
        }
    }

    key
}

fn dense_line(lines: &[&str]) -> AnswerKey {
    lines
        .iter()
        .map(|line| pairs(&ANSWER_PAIR, line).collect::<Vec<_>>())
        .find(|found| found.len() >= DENSE_LINE_MIN_ANSWERS)
        .map(|found| found.into_iter().collect())
        .unwrap_or_default()
}

fn tail_lines(lines: &[&str]) -> AnswerKey {
    // ceil(20%)
    let take = lines.len().div_ceil(5);
    lines[lines.len() - take..]
        .iter()
        .flat_map(|line| pairs(&ANSWER_LINE, line))
        .collect()
}

fn loose_scan(lines: &[&str], parsed_questions: usize) -> AnswerKey {
    lines
        .iter()
        .flat_map(|line| pairs(&LOOSE_ANSWER_PAIR, line))
        .filter(|(number, _)| (*number as usize) <= parsed_questions)
        .collect()
}

/// All `(number, letter)` captures of `pattern` in `line`. Numbers too large for an
/// id are skipped.
fn pairs<'a>(pattern: &'a Regex, line: &'a str) -> impl Iterator<Item = (u32, OptionLetter)> + 'a {
    pattern.captures_iter(line).filter_map(|caps| {
        let number = caps[1].parse::<u32>().ok()?;
        let letter = caps[2].chars().next().and_then(OptionLetter::from_char)?;
        Some((number, letter))
    })
}
