use std::sync::Arc;

use crate::config::Config;
use crate::errors::AppError;
use crate::feeds::fetcher::FeedFetcher;
use crate::llm_client::TextGenerator;

const MISSING_API_KEY_MESSAGE: &str =
    "GEMINI_API_KEY not configured. Please add your API key to the .env file.";

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// `None` when no `GEMINI_API_KEY` is configured.
    pub llm: Option<Arc<dyn TextGenerator>>,
    pub feeds: Arc<dyn FeedFetcher>,
}

impl AppState {
    /// The text generator, or a configuration error if no API key was set.
    pub fn require_llm(&self) -> Result<&dyn TextGenerator, AppError> {
        self.llm
            .as_deref()
            .ok_or_else(|| AppError::Config(MISSING_API_KEY_MESSAGE.to_string()))
    }
}
