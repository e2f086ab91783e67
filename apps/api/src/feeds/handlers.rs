use axum::{
    extract::{rejection::QueryRejection, Query, State},
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::errors::AppError;
use crate::feeds::aggregator::aggregate_jobs;
use crate::feeds::listing::JobListing;
use crate::feeds::sources::select_sources;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct JobsQuery {
    #[serde(default = "default_source")]
    pub source: String,
    /// Indeed search keywords.
    #[serde(default)]
    pub q: String,
    /// Indeed search location.
    #[serde(default)]
    pub l: String,
}

fn default_source() -> String {
    "all".to_string()
}

#[derive(Debug, Serialize)]
pub struct JobsResponse {
    pub success: bool,
    pub count: usize,
    pub source: String,
    pub jobs: Vec<JobListing>,
}

/// Error body for the jobs endpoint: always carries an empty `jobs` list.
#[derive(Debug)]
pub struct JobsError(AppError);

impl From<AppError> for JobsError {
    fn from(e: AppError) -> Self {
        Self(e)
    }
}

impl IntoResponse for JobsError {
    fn into_response(self) -> Response {
        let (status, message) = self.0.status_and_message();
        let body = Json(json!({
            "success": false,
            "error": message,
            "jobs": [],
        }));
        (status, body).into_response()
    }
}

/// GET /api/jobs?source=remotive|wwremote|indeed|all&q=&l=
pub async fn handle_get_jobs(
    State(state): State<AppState>,
    query: Result<Query<JobsQuery>, QueryRejection>,
) -> Result<Json<JobsResponse>, JobsError> {
    let Query(params) = query.map_err(|rejection| {
        AppError::Validation(format!("Invalid query string: {}", rejection.body_text()))
    })?;
    let sources = select_sources(&params.source, &params.q, &params.l);
    let jobs = aggregate_jobs(state.feeds.as_ref(), &sources).await?;

    Ok(Json(JobsResponse {
        success: true,
        count: jobs.len(),
        source: params.source,
        jobs,
    }))
}
