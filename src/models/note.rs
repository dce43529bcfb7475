// src/models/note.rs

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// Represents the 'notes' table in the database.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Note {
    pub id: i64,
    pub user_id: i64,
    pub title: String,
    /// Markdown study notes.
    pub content: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

/// DTO for creating or replacing a note.
#[derive(Debug, Deserialize, Validate)]
pub struct NoteRequest {
    #[validate(length(
        min = 1,
        max = 200,
        message = "Title length must be between 1 and 200 chars"
    ))]
    pub title: String,

    #[validate(length(max = 100000, message = "Content must be at most 100000 chars"))]
    pub content: Option<String>,
}

/// DTO for summarizing raw text (a transcript or extracted PDF text) into a note.
#[derive(Debug, Deserialize, Validate)]
pub struct SummarizeRequest {
    #[validate(length(
        min = 1,
        max = 500000,
        message = "Text length must be between 1 and 500000 chars"
    ))]
    pub text: String,
}

/// DTO for summarizing a video transcript the client already fetched.
#[derive(Debug, Deserialize, Validate)]
pub struct TranscribeRequest {
    #[validate(length(min = 1, max = 2048, message = "YouTube URL is required"))]
    pub yturl: String,

    #[validate(length(
        min = 1,
        max = 500000,
        message = "Transcript length must be between 1 and 500000 chars"
    ))]
    pub transcript: String,
}

/// Summary of an uploaded or linked source, ready to be saved as a note.
///
/// `message` carries the summary, or the raw text when summarizing was not possible.
#[derive(Debug, Serialize)]
pub struct SourceSummary {
    pub message: String,
    pub title: String,
    /// Absent when the text could not be classified.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_educational: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub original_content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video_id: Option<String>,
}
