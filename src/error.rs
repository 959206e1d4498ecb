use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use tracing::error;

/// Errors surfaced by request handlers.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("{0} is required")]
    MissingField(&'static str),

    #[error("{0}")]
    Unauthorized(String),

    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

pub type ApiResult<T> = Result<T, ApiError>;

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            ApiError::MissingField(_) => (StatusCode::BAD_REQUEST, self.to_string()),
            ApiError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg.clone()),
            ApiError::Internal(e) => {
                error!(error = ?e, "request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".to_string(),
                )
            }
        };
        (status, Json(json!({ "error": message }))).into_response()
    }
}

/// Unwraps a required request field or reports it by name.
pub fn required<T>(value: Option<T>, field: &'static str) -> ApiResult<T> {
    value.ok_or(ApiError::MissingField(field))
}
