// src/handlers/quiz.rs

use axum::{Json, response::IntoResponse};
use validator::Validate;

use crate::{
    error::AppError,
    models::quiz::{GradeRequest, GradeResponse, ParseRequest, ParsedTestView},
    quiz::{QuizSession, SelectedAnswers, parse_test},
};

/// Parses test content without storing anything.
pub async fn parse(Json(payload): Json<ParseRequest>) -> Result<impl IntoResponse, AppError> {
    if let Err(validation_errors) = payload.validate() {
        return Err(AppError::BadRequest(validation_errors.to_string()));
    }

    Ok(Json(ParsedTestView::new(parse_test(&payload.content), &payload.content)))
}

/// Grades answers against test content without storing anything.
pub async fn grade(Json(payload): Json<GradeRequest>) -> Result<impl IntoResponse, AppError> {
    if let Err(validation_errors) = payload.validate() {
        return Err(AppError::BadRequest(validation_errors.to_string()));
    }

    Ok(Json(grade_content(&payload.content, &payload.answers)?))
}

/// Replays a submission through a fresh quiz session.
///
/// Every answer must name a parsed question and one of its options, and at least
/// one answer is required, as in the interactive quiz.
pub(crate) fn grade_content(
    content: &str,
    answers: &SelectedAnswers,
) -> Result<GradeResponse, AppError> {
    let mut session = QuizSession::new(parse_test(content));
    for (&question_id, &letter) in answers {
        session.select(question_id, letter)?;
    }

    let answered = session.answered_count();
    let report = session.check_answers()?.clone();

    Ok(GradeResponse { answered, report })
}
