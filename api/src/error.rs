use axum::{
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use shared::FieldErrors;
use uuid::Uuid;

/// Generic message returned on every server-error outcome. Parse and
/// recording failures share it; internals are never leaked to callers.
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error. Please try again later.";

/// Error label on validation rejections.
pub const VALIDATION_FAILED: &str = "Validation failed";

#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    error: String,
    details: Option<FieldErrors>,
}

#[derive(Debug, Serialize)]
struct ErrorResponse {
    success: bool,
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<FieldErrors>,
}

impl ApiError {
    /// Client-error outcome: the schema rejected the record. `details`
    /// holds only the failing fields.
    pub fn validation(details: FieldErrors) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            error: VALIDATION_FAILED.to_string(),
            details: Some(details),
        }
    }

    /// Server-error outcome for parse and recording failures.
    pub fn internal() -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            error: INTERNAL_ERROR_MESSAGE.to_string(),
            details: None,
        }
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let correlation_id = Uuid::new_v4().to_string();
        let payload = ErrorResponse {
            success: false,
            error: self.error,
            details: self.details,
        };

        let mut response = (self.status, Json(payload)).into_response();
        if let Ok(value) = HeaderValue::from_str(&correlation_id) {
            response
                .headers_mut()
                .insert(header::HeaderName::from_static("x-correlation-id"), value);
        }
        response
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_carries_details() {
        let mut details = FieldErrors::new();
        details.insert(
            "name".to_string(),
            vec!["Name must be at least 2 characters".to_string()],
        );

        let error = ApiError::validation(details);
        assert_eq!(error.status(), StatusCode::BAD_REQUEST);
        assert!(error.details.is_some());
    }

    #[test]
    fn test_internal_error_has_no_details() {
        let error = ApiError::internal();
        assert_eq!(error.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(error.details.is_none());
        assert_eq!(error.error, INTERNAL_ERROR_MESSAGE);
    }

    #[test]
    fn test_error_body_shape() {
        let body = ErrorResponse {
            success: false,
            error: VALIDATION_FAILED.to_string(),
            details: None,
        };
        let value = serde_json::to_value(&body).unwrap();
        assert_eq!(value["success"], false);
        assert!(value.get("details").is_none());
    }
}
