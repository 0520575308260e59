// crates/server/src/error.rs
use axum::{
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use jobly_db::DbError;
use serde::Serialize;
use thiserror::Error;

/// Error message: a single string, or every violation from a failed validation.
#[derive(Debug, Serialize)]
#[cfg_attr(test, derive(serde::Deserialize, PartialEq))]
#[serde(untagged)]
pub enum ErrorMessage {
    One(String),
    Many(Vec<String>),
}

#[derive(Debug, Serialize)]
#[cfg_attr(test, derive(serde::Deserialize))]
pub struct ErrorBody {
    pub message: ErrorMessage,
    pub status: u16,
}

/// Structured JSON error response: `{"error": {"message", "status"}}`.
#[derive(Debug, Serialize)]
#[cfg_attr(test, derive(serde::Deserialize))]
pub struct ErrorResponse {
    pub error: ErrorBody,
}

impl ErrorResponse {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            error: ErrorBody {
                message: ErrorMessage::One(message.into()),
                status: status.as_u16(),
            },
        }
    }

    pub fn with_messages(status: StatusCode, messages: Vec<String>) -> Self {
        Self {
            error: ErrorBody {
                message: ErrorMessage::Many(messages),
                status: status.as_u16(),
            },
        }
    }
}

/// API error types that map to HTTP status codes
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Bad request: {}", .0.join("; "))]
    BadRequest(Vec<String>),

    #[error("Unauthorized")]
    Unauthorized,

    #[error("Database error: {0}")]
    Database(#[from] DbError),

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl ApiError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        ApiError::BadRequest(vec![message.into()])
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::bad_request(rejection.body_text())
    }
}

/// An id that does not parse cannot name an existing job.
impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        ApiError::NotFound(rejection.body_text())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError::bad_request(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_response) = match &self {
            ApiError::NotFound(what) => {
                tracing::warn!(what = %what, "Not found");
                (
                    StatusCode::NOT_FOUND,
                    ErrorResponse::new(StatusCode::NOT_FOUND, self.to_string()),
                )
            }
            ApiError::BadRequest(messages) => {
                tracing::warn!(messages = ?messages, "Bad request");
                (
                    StatusCode::BAD_REQUEST,
                    ErrorResponse::with_messages(StatusCode::BAD_REQUEST, messages.clone()),
                )
            }
            ApiError::Unauthorized => {
                tracing::warn!("Unauthorized");
                (
                    StatusCode::UNAUTHORIZED,
                    ErrorResponse::new(StatusCode::UNAUTHORIZED, "Unauthorized"),
                )
            }
            ApiError::Database(db_err) => {
                let status = match db_err {
                    DbError::JobNotFound(_) | DbError::CompanyNotFound(_) => StatusCode::NOT_FOUND,
                    DbError::Constraint(_) | DbError::NoUpdateFields => StatusCode::BAD_REQUEST,
                    _ => StatusCode::INTERNAL_SERVER_ERROR,
                };
                if status.is_server_error() {
                    tracing::error!(error = %db_err, "Database error");
                    (status, ErrorResponse::new(status, "Database error"))
                } else {
                    tracing::warn!(error = %db_err, "Request rejected by store");
                    (status, ErrorResponse::new(status, db_err.to_string()))
                }
            }
            ApiError::Internal(msg) => {
                tracing::error!(message = %msg, "Internal server error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse::new(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error"),
                )
            }
        };

        (status, Json(error_response)).into_response()
    }
}

/// Result type alias for API handlers
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    /// Helper to extract status code and body from a response
    async fn extract_response(response: Response) -> (StatusCode, ErrorResponse) {
        let status = response.status();
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let error_response: ErrorResponse = serde_json::from_slice(&body).unwrap();
        (status, error_response)
    }

    #[tokio::test]
    async fn test_job_not_found_returns_404() {
        let error = ApiError::Database(DbError::JobNotFound(42));
        let (status, body) = extract_response(error.into_response()).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body.error.status, 404);
        assert_eq!(body.error.message, ErrorMessage::One("No job: 42".to_string()));
    }

    #[tokio::test]
    async fn test_company_not_found_returns_404() {
        let error = ApiError::Database(DbError::CompanyNotFound("c9".to_string()));
        let (status, _) = extract_response(error.into_response()).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_constraint_returns_400() {
        let error = ApiError::Database(DbError::Constraint("FOREIGN KEY constraint failed".into()));
        let (status, body) = extract_response(error.into_response()).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body.error.status, 400);
    }

    #[tokio::test]
    async fn test_no_update_fields_returns_400() {
        let error = ApiError::Database(DbError::NoUpdateFields);
        let (status, body) = extract_response(error.into_response()).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body.error.message, ErrorMessage::One("No data".to_string()));
    }

    #[tokio::test]
    async fn test_bad_request_keeps_every_message() {
        let error = ApiError::BadRequest(vec!["first".into(), "second".into()]);
        let (status, body) = extract_response(error.into_response()).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            body.error.message,
            ErrorMessage::Many(vec!["first".to_string(), "second".to_string()])
        );
    }

    #[tokio::test]
    async fn test_unauthorized_returns_401() {
        let (status, body) = extract_response(ApiError::Unauthorized.into_response()).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body.error.status, 401);
    }

    #[tokio::test]
    async fn test_sqlx_error_hides_details() {
        let error = ApiError::Database(DbError::Sqlx(jobly_db::SqlxError::RowNotFound));
        let (status, body) = extract_response(error.into_response()).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body.error.message, ErrorMessage::One("Database error".to_string()));
    }

    #[tokio::test]
    async fn test_internal_error_returns_500() {
        let error = ApiError::Internal("Something went wrong".to_string());
        let (status, body) = extract_response(error.into_response()).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        // Internal errors should NOT expose details to clients
        assert_eq!(
            body.error.message,
            ErrorMessage::One("Internal server error".to_string())
        );
    }

    #[test]
    fn test_error_response_serialization() {
        let response = ErrorResponse::new(StatusCode::NOT_FOUND, "gone");
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json, serde_json::json!({"error": {"message": "gone", "status": 404}}));

        let response = ErrorResponse::with_messages(StatusCode::BAD_REQUEST, vec!["a".into()]);
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json, serde_json::json!({"error": {"message": ["a"], "status": 400}}));
    }

    #[test]
    fn test_api_error_display() {
        let err = ApiError::BadRequest(vec!["a".into(), "b".into()]);
        assert_eq!(err.to_string(), "Bad request: a; b");

        let err: ApiError = DbError::JobNotFound(3).into();
        assert_eq!(err.to_string(), "Database error: No job: 3");
    }
}
