// src/handlers/sources.rs

use axum::{
    Json,
    extract::{Multipart, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use validator::Validate;

use crate::{
    error::AppError,
    genai::{self, GeneratorHandle, Summary},
    models::note::{SourceSummary, TranscribeRequest},
    sources::{self, SourceError},
};

/// Multipart field carrying the upload.
const PDF_FIELD: &str = "pdf";

/// Summarizes an uploaded PDF.
///
/// * 400 when the upload is missing, not a `.pdf`, unreadable or has no text.
/// * 400 with the summary body when the content is not study material.
/// * Falls back to the extracted text when summarizing is unavailable or fails.
pub async fn process_pdf(
    State(generator): State<GeneratorHandle>,
    mut multipart: Multipart,
) -> Result<Response, AppError> {
    let mut upload = None;
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(e.to_string()))?
    {
        if field.name() != Some(PDF_FIELD) {
            continue;
        }
        let filename = field.file_name().unwrap_or_default().to_string();
        let bytes = field
            .bytes()
            .await
            .map_err(|e| AppError::BadRequest(e.to_string()))?;
        upload = Some((filename, bytes));
        break;
    }

    let (filename, bytes) =
        upload.ok_or(AppError::BadRequest("No PDF file uploaded".to_string()))?;
    if filename.is_empty() {
        return Err(AppError::BadRequest("No file selected".to_string()));
    }
    if !filename.to_lowercase().ends_with(".pdf") {
        return Err(AppError::BadRequest("Only PDF files are allowed".to_string()));
    }

    // Extraction is CPU-bound and may panic on malformed files.
    let content = tokio::task::spawn_blocking(move || sources::extract_pdf_text(&bytes))
        .await
        .map_err(|e| AppError::from(SourceError::UnreadablePdf(e.to_string())))??;

    tracing::info!(%filename, chars = content.len(), "Extracted PDF text");

    match summarize_with(&generator, &content).await {
        Ok(summary) if !summary.is_educational => Ok(rejected(summary)),
        Ok(summary) => Ok(Json(SourceSummary {
            message: summary.summary,
            title: summary.title,
            is_educational: Some(true),
            original_content: Some(content),
            filename: Some(filename),
            video_id: None,
        })
        .into_response()),
        Err(e) => {
            tracing::warn!(%filename, "Summarizing PDF failed, returning raw text: {}", e);
            Ok(Json(SourceSummary {
                message: content.clone(),
                title: format!("PDF Content: {filename}"),
                is_educational: None,
                original_content: Some(content),
                filename: Some(filename),
                video_id: None,
            })
            .into_response())
        }
    }
}

/// Summarizes a video transcript fetched by the client.
///
/// The link must contain a recognisable video id (400 otherwise).
pub async fn transcribe(
    State(generator): State<GeneratorHandle>,
    Json(payload): Json<TranscribeRequest>,
) -> Result<Response, AppError> {
    if let Err(validation_errors) = payload.validate() {
        return Err(AppError::BadRequest(validation_errors.to_string()));
    }

    let video_id = sources::video_id(&payload.yturl).ok_or(SourceError::InvalidVideoUrl)?;
    let summary = summarize_with(&generator, &payload.transcript).await?;
    if !summary.is_educational {
        return Ok(rejected(summary));
    }

    Ok(Json(SourceSummary {
        message: summary.summary,
        title: summary.title,
        is_educational: Some(true),
        original_content: None,
        filename: None,
        video_id: Some(video_id),
    })
    .into_response())
}

async fn summarize_with(generator: &GeneratorHandle, text: &str) -> Result<Summary, AppError> {
    Ok(genai::summarize(generator.get()?, text).await?)
}

fn rejected(summary: Summary) -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(SourceSummary {
            message: summary.summary,
            title: summary.title,
            is_educational: Some(false),
            original_content: None,
            filename: None,
            video_id: None,
        }),
    )
        .into_response()
}
