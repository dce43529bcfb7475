// src/handlers/notes.rs

use axum::{
    Extension, Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde_json::json;
use sqlx::PgPool;
use validator::Validate;

use crate::{
    error::AppError,
    genai::{self, GeneratorHandle},
    models::note::{Note, NoteRequest, SummarizeRequest},
    utils::jwt::Claims,
};

const NOTE_COLUMNS: &str = "id, user_id, title, content, created_at, updated_at";

/// Lists the current user's notes, newest first.
pub async fn list_notes(
    State(pool): State<PgPool>,
    Extension(claims): Extension<Claims>,
) -> Result<impl IntoResponse, AppError> {
    let user_id = claims.user_id()?;

    let notes = sqlx::query_as::<_, Note>(&format!(
        "SELECT {NOTE_COLUMNS} FROM notes WHERE user_id = $1 ORDER BY created_at DESC, id DESC"
    ))
    .bind(user_id)
    .fetch_all(&pool)
    .await
    .map_err(|e| {
        tracing::error!("Failed to list notes: {:?}", e);
        AppError::InternalServerError(e.to_string())
    })?;

    Ok(Json(json!({ "notes": notes })))
}

/// Saves a note.
pub async fn create_note(
    State(pool): State<PgPool>,
    Extension(claims): Extension<Claims>,
    Json(payload): Json<NoteRequest>,
) -> Result<impl IntoResponse, AppError> {
    if let Err(validation_errors) = payload.validate() {
        return Err(AppError::BadRequest(validation_errors.to_string()));
    }
    let user_id = claims.user_id()?;

    let note = sqlx::query_as::<_, Note>(&format!(
        "INSERT INTO notes (user_id, title, content) VALUES ($1, $2, $3) RETURNING {NOTE_COLUMNS}"
    ))
    .bind(user_id)
    .bind(&payload.title)
    .bind(payload.content.as_deref().unwrap_or_default())
    .fetch_one(&pool)
    .await?;

    Ok((
        StatusCode::CREATED,
        Json(json!({ "message": "Note created successfully", "note": note })),
    ))
}

/// Replaces a note's title and content. Only the owner can update it.
pub async fn update_note(
    State(pool): State<PgPool>,
    Extension(claims): Extension<Claims>,
    Path(id): Path<i64>,
    Json(payload): Json<NoteRequest>,
) -> Result<impl IntoResponse, AppError> {
    if let Err(validation_errors) = payload.validate() {
        return Err(AppError::BadRequest(validation_errors.to_string()));
    }
    let user_id = claims.user_id()?;

    let note = sqlx::query_as::<_, Note>(&format!(
        r#"
        UPDATE notes
        SET title = $1, content = $2, updated_at = NOW()
        WHERE id = $3 AND user_id = $4
        RETURNING {NOTE_COLUMNS}
        "#
    ))
    .bind(&payload.title)
    .bind(payload.content.as_deref().unwrap_or_default())
    .bind(id)
    .bind(user_id)
    .fetch_optional(&pool)
    .await?
    .ok_or(AppError::NotFound("Note not found or access denied".to_string()))?;

    Ok(Json(json!({ "message": "Note updated successfully", "note": note })))
}

/// Deletes a note. Question sets generated from it keep their content.
pub async fn delete_note(
    State(pool): State<PgPool>,
    Extension(claims): Extension<Claims>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    let user_id = claims.user_id()?;

    let result = sqlx::query("DELETE FROM notes WHERE id = $1 AND user_id = $2")
        .bind(id)
        .bind(user_id)
        .execute(&pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(AppError::NotFound("Note not found or access denied".to_string()));
    }

    Ok(Json(json!({ "message": "Note deleted successfully" })))
}

/// Turns raw study material (a transcript, extracted PDF text) into a titled
/// summary. Nothing is stored; the client saves the result as a note.
pub async fn summarize(
    State(generator): State<GeneratorHandle>,
    Json(payload): Json<SummarizeRequest>,
) -> Result<impl IntoResponse, AppError> {
    if let Err(validation_errors) = payload.validate() {
        return Err(AppError::BadRequest(validation_errors.to_string()));
    }

    let summary = genai::summarize(generator.get()?, &payload.text).await?;
    Ok(Json(summary))
}

/// Loads notes owned by the user, in the order their ids were given. Unknown or
/// foreign ids are skipped.
pub(crate) async fn fetch_owned_notes(
    pool: &PgPool,
    user_id: i64,
    note_ids: &[i64],
) -> Result<Vec<Note>, AppError> {
    let notes = sqlx::query_as::<_, Note>(&format!(
        r#"
        SELECT {NOTE_COLUMNS}
        FROM notes
        WHERE user_id = $1 AND id = ANY($2)
        ORDER BY array_position($2, id)
        "#
    ))
    .bind(user_id)
    .bind(note_ids)
    .fetch_all(pool)
    .await?;

    Ok(notes)
}
