use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

/// Request-level failures. Bad form input never ends up here; it is
/// coerced to "unset" instead.
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("Pipeline error: {0}")]
    Pipeline(#[from] anyhow::Error),

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl From<tokio::task::JoinError> for AppError {
    fn from(err: tokio::task::JoinError) -> Self {
        AppError::Internal(err.to_string())
    }
}

impl From<std::fmt::Error> for AppError {
    fn from(_: std::fmt::Error) -> Self {
        AppError::Internal("failed to render page".to_string())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        tracing::error!("Request failed: {}", self);
        (StatusCode::INTERNAL_SERVER_ERROR, self.to_string()).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;
