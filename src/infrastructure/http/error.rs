//! HTTP error responses

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::application::dto::ErrorResponseDto;
use crate::application::ports::outbound::LlmError;
use crate::application::services::GenerationError;

/// Failure of an API request, rendered as an `ErrorResponseDto` JSON body
#[derive(Debug)]
pub enum ApiError {
    MethodNotAllowed,
    BadRequest(String),
    /// Server-side misconfiguration; details stay in the logs
    Configuration,
    /// Non-success reply from the LLM provider, relayed as-is
    Upstream { status: u16, details: String },
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            ApiError::MethodNotAllowed => (
                StatusCode::METHOD_NOT_ALLOWED,
                ErrorResponseDto::new("Method not allowed"),
            ),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, ErrorResponseDto::new(msg)),
            ApiError::Configuration => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorResponseDto::new("Server configuration error"),
            ),
            ApiError::Upstream { status, details } => (
                StatusCode::from_u16(status).unwrap_or(StatusCode::BAD_GATEWAY),
                ErrorResponseDto::new("API request failed").with_details(details),
            ),
            ApiError::Internal(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorResponseDto::new("Internal server error").with_message(msg),
            ),
        };

        (status, Json(body)).into_response()
    }
}

impl From<GenerationError> for ApiError {
    fn from(e: GenerationError) -> Self {
        match e {
            GenerationError::Llm(LlmError::Api { status, body }) => ApiError::Upstream {
                status,
                details: body,
            },
            other => ApiError::Internal(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::services::llm::SectionParseError;

    #[test]
    fn test_upstream_status_relayed() {
        let response = ApiError::Upstream {
            status: 401,
            details: "bad key".to_string(),
        }
        .into_response();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn test_generation_error_mapping() {
        let api = ApiError::from(GenerationError::Llm(LlmError::Api {
            status: 500,
            body: "boom".to_string(),
        }));
        assert!(matches!(api, ApiError::Upstream { status: 500, ref details } if details == "boom"));

        let api = ApiError::from(GenerationError::Llm(LlmError::RequestFailed(
            "connection reset".to_string(),
        )));
        assert!(matches!(api, ApiError::Internal(ref msg) if msg.contains("connection reset")));

        let parse_error = match regex::Regex::new("(") {
            Err(e) => SectionParseError::InvalidPattern(e),
            Ok(_) => panic!("pattern should not compile"),
        };
        let api = ApiError::from(GenerationError::Parse(parse_error));
        assert!(
            matches!(api, ApiError::Internal(ref msg) if msg == "Failed to parse generated configuration")
        );
    }
}
