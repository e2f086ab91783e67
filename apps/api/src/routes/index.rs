use anyhow::Context;
use askama::Template;
use axum::{extract::State, response::Html};

use crate::errors::AppError;
use crate::models::static_job::StaticJob;
use crate::state::AppState;

#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub jobs: Vec<StaticJob>,
}

/// GET /
/// Renders the curated job list. The file is re-read on every request.
pub async fn index_handler(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let path = &state.config.jobs_file;

    let raw = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read jobs file '{path}'"))?;
    let jobs = StaticJob::load_all(&raw)
        .with_context(|| format!("Jobs file '{path}' is not a JSON array of jobs"))?;

    tracing::debug!("Rendering index with {} jobs", jobs.len());
    Ok(Html(IndexTemplate { jobs }.render()?))
}
