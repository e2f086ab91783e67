use axum::{
    extract::{Query, RawQuery},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;
use serde_json::json;
use tracing::{debug, info, warn};

#[derive(Debug, Deserialize)]
pub struct CallbackParams {
    pub code: Option<String>,
    pub state: Option<String>,
}

/// GET /callback
///
/// OAuth redirect landing for the Upwork integration. Only logs what it
/// receives; no token exchange happens here.
pub async fn oauth_callback_handler(
    Query(params): Query<CallbackParams>,
    RawQuery(raw_query): RawQuery,
) -> Response {
    let raw_query = raw_query.unwrap_or_default();
    // Full authorization code stays out of info-level logs.
    debug!(
        code = ?params.code,
        state = ?params.state,
        query = %raw_query,
        "Upwork OAuth callback received"
    );

    let Some(code) = params.code.filter(|c| !c.is_empty()) else {
        warn!("OAuth callback without authorization code");
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({
                "success": false,
                "error": "Missing authorization code"
            })),
        )
            .into_response();
    };

    info!(
        "OAuth callback received - Code: {}, State: {}",
        code_preview(&code),
        params.state.as_deref().unwrap_or("none")
    );

    // 302 Found, the status browsers and OAuth providers expect here.
    (StatusCode::FOUND, [(header::LOCATION, "/")]).into_response()
}

/// First ten characters of an authorization code, for info-level logs.
fn code_preview(code: &str) -> String {
    let prefix: String = code.chars().take(10).collect();
    format!("{prefix}...")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_preview_hides_the_rest_of_the_code() {
        let preview = code_preview("abcdef1234SECRET-TAIL");
        assert_eq!(preview, "abcdef1234...");
        assert!(!preview.contains("SECRET"));
    }

    #[test]
    fn test_code_preview_short_code() {
        assert_eq!(code_preview("xyz"), "xyz...");
    }
}
