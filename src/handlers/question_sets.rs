// src/handlers/question_sets.rs

use axum::{
    Extension, Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde_json::json;
use sqlx::PgPool;

use crate::{
    error::AppError,
    genai::{self, GeneratorHandle},
    handlers::notes::fetch_owned_notes,
    models::question_set::{CreateQuestionSetRequest, QuestionSet, question_set_title},
    utils::jwt::Claims,
};

const QUESTION_SET_COLUMNS: &str =
    "id, user_id, note_id, note_title, title, content, created_at, updated_at";

/// Lists the current user's question sets, newest first.
pub async fn list_question_sets(
    State(pool): State<PgPool>,
    Extension(claims): Extension<Claims>,
) -> Result<impl IntoResponse, AppError> {
    let user_id = claims.user_id()?;

    let sets = sqlx::query_as::<_, QuestionSet>(&format!(
        "SELECT {QUESTION_SET_COLUMNS} FROM question_sets WHERE user_id = $1 ORDER BY created_at DESC, id DESC"
    ))
    .bind(user_id)
    .fetch_all(&pool)
    .await
    .map_err(|e| {
        tracing::error!("Failed to list question sets: {:?}", e);
        AppError::InternalServerError(e.to_string())
    })?;

    Ok(Json(sets))
}

/// Generates study questions from one of the user's notes and stores them.
pub async fn create_question_set(
    State(pool): State<PgPool>,
    State(generator): State<GeneratorHandle>,
    Extension(claims): Extension<Claims>,
    Json(payload): Json<CreateQuestionSetRequest>,
) -> Result<impl IntoResponse, AppError> {
    let user_id = claims.user_id()?;
    let generator = generator.get()?;

    let note = fetch_owned_notes(&pool, user_id, &[payload.note_id])
        .await?
        .into_iter()
        .next()
        .ok_or(AppError::NotFound("Note not found".to_string()))?;

    let content = genai::generate_questions(generator, &note.content).await?;

    let set = sqlx::query_as::<_, QuestionSet>(&format!(
        r#"
        INSERT INTO question_sets (user_id, note_id, note_title, title, content)
        VALUES ($1, $2, $3, $4, $5)
        RETURNING {QUESTION_SET_COLUMNS}
        "#
    ))
    .bind(user_id)
    .bind(note.id)
    .bind(&note.title)
    .bind(question_set_title(&note.title))
    .bind(content)
    .fetch_one(&pool)
    .await?;

    tracing::info!(user_id, question_set_id = set.id, "Generated question set");

    Ok((StatusCode::CREATED, Json(set)))
}

pub async fn delete_question_set(
    State(pool): State<PgPool>,
    Extension(claims): Extension<Claims>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    let user_id = claims.user_id()?;

    let result = sqlx::query("DELETE FROM question_sets WHERE id = $1 AND user_id = $2")
        .bind(id)
        .bind(user_id)
        .execute(&pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(AppError::NotFound("Questions not found".to_string()));
    }

    Ok(Json(json!({ "message": "Questions deleted successfully" })))
}
