use crate::dto::response::ErrorResponse;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use tracing::error;

pub type AppResult<T> = Result<T, AppError>;

/// Error returned to the client. Only `message` leaves the process; the
/// underlying cause is logged where the error is built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppError {
    pub status: StatusCode,
    pub message: String,
}

impl AppError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        (
            self.status,
            Json(ErrorResponse {
                error: self.message,
            }),
        )
            .into_response()
    }
}

pub fn format_error(message: &str, error: impl std::fmt::Display, status: StatusCode) -> AppError {
    error!("Error occurred: {}: {}", message, error);
    AppError::new(status, message)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_error_hides_the_cause() {
        let err = format_error(
            "Failed to search",
            "connection reset by peer",
            StatusCode::INTERNAL_SERVER_ERROR,
        );
        assert_eq!(err.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.message, "Failed to search");
    }

    #[tokio::test]
    async fn renders_as_json_error_body() {
        let response = AppError::bad_request("Text is required").into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(body, serde_json::json!({ "error": "Text is required" }));
    }
}
