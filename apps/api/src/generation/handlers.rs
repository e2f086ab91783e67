//! Axum route handlers for the Generation API.

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use serde::Serialize;

use crate::errors::AppError;
use crate::generation::generator::{
    generate_application, generate_proposal, ApplicationRequest, ProposalRequest, QuestionAnswer,
};
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct ProposalResponse {
    pub proposal: String,
    pub success: bool,
}

#[derive(Debug, Serialize)]
pub struct ApplicationResponse {
    pub success: bool,
    pub cover_letter: String,
    pub questions: Vec<QuestionAnswer>,
}

/// POST /api/generate-proposal
pub async fn handle_generate_proposal(
    State(state): State<AppState>,
    body: Result<Json<ProposalRequest>, JsonRejection>,
) -> Result<Json<ProposalResponse>, AppError> {
    let llm = state.require_llm()?;
    let Json(request) = body.map_err(reject_body)?;

    let proposal = generate_proposal(llm, &request).await?;

    Ok(Json(ProposalResponse {
        proposal,
        success: true,
    }))
}

/// POST /api/generate-application
///
/// Cover letter, interview questions, and an answer for each question.
pub async fn handle_generate_application(
    State(state): State<AppState>,
    body: Result<Json<ApplicationRequest>, JsonRejection>,
) -> Result<Json<ApplicationResponse>, AppError> {
    let llm = state.require_llm()?;
    let Json(request) = body.map_err(reject_body)?;

    let package = generate_application(llm, &request).await?;

    Ok(Json(ApplicationResponse {
        success: true,
        cover_letter: package.cover_letter,
        questions: package.questions,
    }))
}

fn reject_body(rejection: JsonRejection) -> AppError {
    AppError::Validation(format!("Invalid request body: {}", rejection.body_text()))
}
