//! Proposal and application generation — orchestrates the LLM calls per request.
//!
//! Application flow: cover letter → interview questions → sanitize →
//! one answer per question (capped at `MAX_QUESTIONS`).
//!
//! Cover letter and question failures abort the request; answer failures
//! degrade to `FALLBACK_ANSWER`.

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::errors::AppError;
use crate::generation::prompts::{
    answer_prompt, cover_letter_prompt, proposal_prompt, questions_prompt,
};
use crate::generation::questions::{parse_questions, QuestionSource};
use crate::llm_client::{LlmError, TextGenerator};

/// Answers are generated for at most this many questions.
pub const MAX_QUESTIONS: usize = 5;

pub const FALLBACK_ANSWER: &str = "Based on my experience outlined in my resume, I have the relevant skills and background for this aspect of the role.";

const EMPTY_PROPOSAL_MESSAGE: &str =
    "Gemini API returned empty response. This may be due to safety filters or content blocks.";

// ────────────────────────────────────────────────────────────────────────────
// Data models
// ────────────────────────────────────────────────────────────────────────────

/// Job fields used as prompt context. Missing fields are treated as empty.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct JobContext {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProposalRequest {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// Clients send either "$500" or 500.
    #[serde(default)]
    pub budget: serde_json::Value,
}

impl ProposalRequest {
    pub fn budget_text(&self) -> String {
        match &self.budget {
            serde_json::Value::Null => String::new(),
            serde_json::Value::String(s) => s.clone(),
            other => other.to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApplicationRequest {
    #[serde(default)]
    pub job: JobContext,
    #[serde(default)]
    pub resume: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuestionAnswer {
    pub question: String,
    pub answer: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ApplicationPackage {
    pub cover_letter: String,
    pub questions: Vec<QuestionAnswer>,
}

// ────────────────────────────────────────────────────────────────────────────
// Generation
// ────────────────────────────────────────────────────────────────────────────

/// Drafts an Upwork proposal for a single job.
pub async fn generate_proposal(
    llm: &dyn TextGenerator,
    request: &ProposalRequest,
) -> Result<String, AppError> {
    let prompt = proposal_prompt(&request.title, &request.description, &request.budget_text());

    info!("Generating proposal for {:?}", request.title);
    llm.generate(&prompt).await.map_err(|e| match e {
        LlmError::EmptyContent => AppError::EmptyResponse(EMPTY_PROPOSAL_MESSAGE.to_string()),
        other => AppError::Llm(format!("Error generating proposal: {other}")),
    })
}

/// Builds a full application package: cover letter plus interview Q&A.
pub async fn generate_application(
    llm: &dyn TextGenerator,
    request: &ApplicationRequest,
) -> Result<ApplicationPackage, AppError> {
    let resume = request.resume.trim();
    if resume.is_empty() {
        return Err(AppError::Validation("Resume text is required".to_string()));
    }
    let job = &request.job;

    // Step 1: Cover letter
    info!("Generating cover letter for {:?}", job.title);
    let cover_letter = llm
        .generate(&cover_letter_prompt(&job.title, &job.description, resume))
        .await
        .map_err(|e| application_error(e, "Failed to generate cover letter"))?;

    // Step 2: Interview questions
    let raw_questions = llm
        .generate(&questions_prompt(&job.title, &job.description))
        .await
        .map_err(|e| application_error(e, "Failed to generate interview questions"))?;

    let parsed = parse_questions(&raw_questions);
    if parsed.source == QuestionSource::Fallback {
        warn!("Question parsing failed, using fallback questions");
    }
    info!(
        "Parsed {} interview questions via {:?}",
        parsed.questions.len(),
        parsed.source
    );

    // Step 3: One answer per question
    let mut questions = Vec::with_capacity(MAX_QUESTIONS);
    for question in parsed.questions.into_iter().take(MAX_QUESTIONS) {
        let answer = match llm.generate(&answer_prompt(&question, resume)).await {
            Ok(text) => text.trim().to_string(),
            Err(e) => {
                warn!("Answer generation failed for {question:?}: {e}");
                FALLBACK_ANSWER.to_string()
            }
        };
        questions.push(QuestionAnswer { question, answer });
    }

    Ok(ApplicationPackage {
        cover_letter,
        questions,
    })
}

fn application_error(error: LlmError, empty_message: &str) -> AppError {
    match error {
        LlmError::EmptyContent => AppError::EmptyResponse(empty_message.to_string()),
        other => AppError::Llm(format!("Error generating application: {other}")),
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
