use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

/// Request-level errors surfaced with a non-200 status
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("{0}")]
    InvalidInput(String),

    #[error("Server error: {0}")]
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match self {
            AppError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        if status.is_server_error() {
            tracing::error!(error = %self, "Request handling failed");
        }

        let body = Json(json!({
            "error": self.to_string()
        }));

        (status, body).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;

/// Failures of a single model provider call
#[derive(thiserror::Error, Debug)]
pub enum ProviderError {
    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Model API returned status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Model returned no candidates{}", block_suffix(.block_reason))]
    NoCandidates { block_reason: Option<String> },

    #[error("Malformed model response: {0}")]
    Malformed(String),
}

fn block_suffix(block_reason: &Option<String>) -> String {
    match block_reason {
        Some(reason) => format!(" (blocked: {})", reason),
        None => String::new(),
    }
}

/// Failures while turning user preferences into a recommendation payload
#[derive(thiserror::Error, Debug)]
pub enum RecommendationError {
    /// No credential for the model provider; recovered with fallback data
    #[error("{0}")]
    Configuration(String),

    #[error("Error getting recommendations: {0}")]
    Provider(#[from] ProviderError),

    /// Reported as the bare parser diagnostic
    #[error("{0}")]
    Parse(#[from] serde_json::Error),

    #[error("Error getting recommendations: {0}")]
    Shape(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_input_is_bad_request() {
        let response = AppError::InvalidInput("Subject is required".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_internal_is_server_error_with_prefix() {
        let error = AppError::Internal("boom".to_string());
        assert_eq!(error.to_string(), "Server error: boom");
        assert_eq!(
            error.into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_no_candidates_mentions_block_reason() {
        let blocked = ProviderError::NoCandidates {
            block_reason: Some("SAFETY".to_string()),
        };
        assert_eq!(blocked.to_string(), "Model returned no candidates (blocked: SAFETY)");

        let empty = ProviderError::NoCandidates { block_reason: None };
        assert_eq!(empty.to_string(), "Model returned no candidates");
    }

    #[test]
    fn test_parse_error_is_bare_diagnostic() {
        let parse = serde_json::from_str::<serde_json::Value>("not json at all").unwrap_err();
        let expected = parse.to_string();
        let error = RecommendationError::from(parse);
        assert_eq!(error.to_string(), expected);
        assert!(expected.contains("line 1 column"));
    }

    #[test]
    fn test_provider_errors_carry_prefix() {
        let error = RecommendationError::from(ProviderError::Malformed("bad".to_string()));
        assert_eq!(
            error.to_string(),
            "Error getting recommendations: Malformed model response: bad"
        );
    }
}
