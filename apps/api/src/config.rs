use anyhow::{Context, Result};

/// Session secret used when `SESSION_SECRET` is unset. Only fit for local development.
pub const DEV_SESSION_SECRET: &str = "dev-secret-key-change-in-production";

/// Application configuration loaded from environment variables.
/// A missing `GEMINI_API_KEY` is not fatal: the AI endpoints answer 400 instead.
#[derive(Debug, Clone)]
pub struct Config {
    pub gemini_api_key: Option<String>,
    pub session_secret: String,
    pub jobs_file: String,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            gemini_api_key: optional_env("GEMINI_API_KEY"),
            session_secret: optional_env("SESSION_SECRET")
                .unwrap_or_else(|| DEV_SESSION_SECRET.to_string()),
            jobs_file: optional_env("JOBS_FILE").unwrap_or_else(|| "data/jobs.json".to_string()),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "5000".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }

    pub fn uses_dev_session_secret(&self) -> bool {
        self.session_secret == DEV_SESSION_SECRET
    }
}

/// Reads an env var, treating an empty value the same as an unset one.
fn optional_env(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
impl Config {
    /// Config for in-process route tests; never touches the environment.
    pub fn for_tests(gemini_api_key: Option<&str>, jobs_file: &str) -> Self {
        Config {
            gemini_api_key: gemini_api_key.map(str::to_string),
            session_secret: DEV_SESSION_SECRET.to_string(),
            jobs_file: jobs_file.to_string(),
            port: 5000,
            rust_log: "info".to_string(),
        }
    }
}
