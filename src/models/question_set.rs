// src/models/question_set.rs

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Longest note title carried into a question set title.
const TITLE_PREFIX_CHARS: usize = 50;

/// Represents the 'question_sets' table: free-form study questions generated from
/// a single note.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct QuestionSet {
    pub id: i64,
    pub user_id: i64,
    /// None once the source note has been deleted.
    pub note_id: Option<i64>,
    pub note_title: String,
    pub title: String,
    pub content: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Debug, Deserialize)]
pub struct CreateQuestionSetRequest {
    pub note_id: i64,
}

/// "Questions for: <note title>", with long titles cut to 50 characters.
pub fn question_set_title(note_title: &str) -> String {
    let mut chars = note_title.chars();
    let head: String = chars.by_ref().take(TITLE_PREFIX_CHARS).collect();
    let ellipsis = if chars.next().is_some() { "..." } else { "" };
    format!("Questions for: {head}{ellipsis}")
}
