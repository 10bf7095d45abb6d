//! HTTP error mapping.

use analysis::AnalysisError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use narrative::NarrativeError;
use serde::Serialize;

/// Error body: a stable code plus a human-readable message.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

#[derive(Debug)]
pub enum ApiError {
    Analysis(AnalysisError),
    Narrative(NarrativeError),
    BadRequest(String),
}

impl ApiError {
    fn status_and_code(&self) -> (StatusCode, &'static str) {
        match self {
            ApiError::Analysis(AnalysisError::EmptyInput)
            | ApiError::Analysis(AnalysisError::InsufficientData { .. }) => {
                (StatusCode::UNPROCESSABLE_ENTITY, self.code())
            }
            ApiError::Analysis(_) | ApiError::BadRequest(_) => (StatusCode::BAD_REQUEST, self.code()),
            ApiError::Narrative(NarrativeError::MissingApiKey) => {
                (StatusCode::SERVICE_UNAVAILABLE, self.code())
            }
            ApiError::Narrative(_) => (StatusCode::BAD_GATEWAY, self.code()),
        }
    }

    fn code(&self) -> &'static str {
        match self {
            ApiError::Analysis(e) => e.code(),
            ApiError::Narrative(NarrativeError::MissingApiKey) => "narrative_unconfigured",
            ApiError::Narrative(_) => "narrative_unavailable",
            ApiError::BadRequest(_) => "bad_request",
        }
    }

    fn message(&self) -> String {
        match self {
            ApiError::Analysis(e) => e.to_string(),
            ApiError::Narrative(e) => e.to_string(),
            ApiError::BadRequest(msg) => msg.clone(),
        }
    }
}

impl From<AnalysisError> for ApiError {
    fn from(e: AnalysisError) -> Self {
        ApiError::Analysis(e)
    }
}

impl From<NarrativeError> for ApiError {
    fn from(e: NarrativeError) -> Self {
        ApiError::Narrative(e)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code) = self.status_and_code();
        if status.is_server_error() {
            tracing::warn!(code, message = %self.message(), "request failed");
        } else {
            tracing::debug!(code, message = %self.message(), "request rejected");
        }
        let body = ErrorResponse {
            error: code.to_string(),
            message: self.message(),
        };
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status(error: ApiError) -> StatusCode {
        error.into_response().status()
    }

    #[test]
    fn test_input_errors_are_distinct() {
        let empty = ApiError::from(AnalysisError::EmptyInput);
        let short = ApiError::from(AnalysisError::InsufficientData { required: 2, got: 1 });
        assert_eq!(empty.code(), "empty_input");
        assert_eq!(short.code(), "insufficient_data");
        assert_eq!(status(empty), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(status(short), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[test]
    fn test_invalid_parameter_is_bad_request() {
        let error = ApiError::from(AnalysisError::invalid_parameter("n_samples", "must be positive"));
        assert_eq!(status(error), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_narrative_errors() {
        assert_eq!(
            status(ApiError::from(NarrativeError::MissingApiKey)),
            StatusCode::SERVICE_UNAVAILABLE
        );
        assert_eq!(
            status(ApiError::from(NarrativeError::EmptyResponse)),
            StatusCode::BAD_GATEWAY
        );
    }
}
