// src/genai/mod.rs

//! Content generation.
//!
//! Every generated artifact (summaries, titles, study questions, tests) is one
//! instruction plus one input text sent to a language model. [`StudyGenerator`] is
//! that single call; the functions in this module build the product features on
//! top of it.

pub mod gemini;

use std::sync::Arc;

use async_trait::async_trait;
use serde::Serialize;

use crate::{error::AppError, models::note::Note};

pub use gemini::GeminiClient;

#[derive(Debug, thiserror::Error)]
pub enum GenAiError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("model API returned {status}: {message}")]
    Api { status: u16, message: String },

    #[error("model returned no text")]
    EmptyResponse,
}

/// What the model is asked to do. Each task has a fixed instruction and sampling
/// temperature.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Task {
    ValidateContent,
    Summary,
    Title,
    StudyQuestions,
    Test,
}

impl Task {
    pub fn instruction(self) -> &'static str {
        match self {
            Task::ValidateContent => VALIDATION_INSTRUCTION,
            Task::Summary => SUMMARY_INSTRUCTION,
            Task::Title => TITLE_INSTRUCTION,
            Task::StudyQuestions => QUESTIONS_INSTRUCTION,
            Task::Test => TEST_INSTRUCTION,
        }
    }

    pub fn temperature(self) -> f32 {
        match self {
            Task::ValidateContent => 0.1,
            Task::Summary | Task::Title => 0.3,
            Task::StudyQuestions | Task::Test => 0.4,
        }
    }
}

const SUMMARY_INSTRUCTION: &str = "You are a helpful study guide. You will receive long text inputs, which can be any language, but you will respond in english only, unless asked otherwise. Your task is to summarize that text into 400 words or less. List the key topics as points. Do this, unless stated otherwise. If it is asked to explain a topic which is not included in the text, briefly respond that the requested content is not available. Just generate the summary. No need to generate content like 'Here's a summary of the text about the topic'. Don't mention the word 'video' anywhere in the response. Generate the response in markdown format.";

const TITLE_INSTRUCTION: &str = "You are a helpful assistant. Based on the provided text, generate a concise, descriptive title (maximum 80 characters) that captures the main topic or theme. The title should be engaging and informative. Don't mention the word 'video' in the title. Just return the title text without any additional formatting or explanation.";

const QUESTIONS_INSTRUCTION: &str = "You are an educational assistant. Based on the provided text content, generate 8-12 study questions that will help students understand and review the key concepts. Create a mix of question types: multiple choice, short answer, and essay questions. Format your response in markdown with clear headings for each question type. Make the questions challenging but fair, covering different aspects and difficulty levels of the content. Do not reference 'video' or 'transcript' in the questions.";

const TEST_INSTRUCTION: &str = "You are an educational assessment creator. Based on the provided text content from multiple notes, generate 15-20 multiple choice questions (MCQs) for a comprehensive test. Each question should have exactly 4 options (A, B, C, D) with only one correct answer. Make the questions challenging but fair, covering different concepts from the content. Format your response in clean markdown with clear numbering. At the end, include an 'Answer Key' section with the correct answers in the format: '1. A, 2. B, 3. C, etc.' Do not reference 'video', 'transcript', or 'notes' in the questions. Focus on testing understanding of key concepts, definitions, relationships, and applications.";

const VALIDATION_INSTRUCTION: &str = "You are a content validator for an educational application. Your task is to determine if the provided text content is related to educational, academic, or study purposes. Educational content includes: academic subjects, tutorials, lectures, educational explanations, skill development, professional training, science, mathematics, history, literature, language learning, certification courses, etc. Non-educational content includes: entertainment, gaming, personal vlogs, comedy, music videos, movie reviews, gossip, non-educational personal stories, etc. Respond with only 'EDUCATIONAL' if the content is study-related, or 'NON_EDUCATIONAL' if it's not related to studies. Do not provide any explanation.";

const NON_EDUCATIONAL_TITLE: &str = "Non-Educational Content";
const NON_EDUCATIONAL_SUMMARY: &str = "Sorry, this content is not related to study purposes. This application is designed for educational content only.";

/// A language model that can run a [`Task`] over some input text.
#[async_trait]
pub trait StudyGenerator: Send + Sync {
    async fn complete(&self, task: Task, input: &str) -> Result<String, GenAiError>;
}

/// Shared, optional generator. Handlers ask for it and get a 503 when generation
/// has not been configured.
#[derive(Clone, Default)]
pub struct GeneratorHandle(Option<Arc<dyn StudyGenerator>>);

impl GeneratorHandle {
    pub fn new(generator: Arc<dyn StudyGenerator>) -> Self {
        Self(Some(generator))
    }

    pub fn none() -> Self {
        Self(None)
    }

    pub fn get(&self) -> Result<&dyn StudyGenerator, AppError> {
        self.0.as_deref().ok_or_else(|| {
            AppError::ServiceUnavailable("Content generation is not configured".to_string())
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub title: String,
    pub summary: String,
    pub is_educational: bool,
}

/// Validates that the text is study material, then produces a summary and a
/// title for it.
pub async fn summarize(generator: &dyn StudyGenerator, text: &str) -> Result<Summary, GenAiError> {
    let verdict = generator.complete(Task::ValidateContent, text).await?;
    if verdict.trim().to_uppercase() != "EDUCATIONAL" {
        tracing::info!("Rejected non-educational content");
        return Ok(Summary {
            title: NON_EDUCATIONAL_TITLE.to_string(),
            summary: NON_EDUCATIONAL_SUMMARY.to_string(),
            is_educational: false,
        });
    }

    let (summary, title) = tokio::try_join!(
        generate_text(generator, Task::Summary, text),
        generate_text(generator, Task::Title, text),
    )?;

    Ok(Summary {
        title,
        summary,
        is_educational: true,
    })
}

pub async fn generate_questions(
    generator: &dyn StudyGenerator,
    content: &str,
) -> Result<String, GenAiError> {
    generate_text(generator, Task::StudyQuestions, content).await
}

pub async fn generate_test(
    generator: &dyn StudyGenerator,
    content: &str,
) -> Result<String, GenAiError> {
    generate_text(generator, Task::Test, content).await
}

/// Concatenates notes into one generation input, each introduced by its title.
pub fn combine_notes(notes: &[Note]) -> String {
    notes
        .iter()
        .map(|note| format!("\n\n{}:\n{}", note.title, note.content))
        .collect()
}

async fn generate_text(
    generator: &dyn StudyGenerator,
    task: Task,
    input: &str,
) -> Result<String, GenAiError> {
    let text = generator.complete(task, input).await?;
    let text = text.trim();
    if text.is_empty() {
        return Err(GenAiError::EmptyResponse);
    }
    Ok(text.to_string())
}
