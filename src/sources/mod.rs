// src/sources/mod.rs

//! Study material that arrives as something other than plain text: uploaded PDFs
//! and YouTube links.

pub mod pdf;
pub mod youtube;

pub use pdf::extract_pdf_text;
pub use youtube::video_id;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SourceError {
    #[error("Error reading PDF: {0}")]
    UnreadablePdf(String),

    #[error("No text content found in the PDF")]
    NoText,

    #[error("Invalid YouTube URL format")]
    InvalidVideoUrl,
}
