use axum::http::StatusCode;
use thiserror::Error;

/// Failures while moving tracker state to or from disk. None of these reach
/// the user: loads fall back to a fresh state and saves are logged.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to read data file: {0}")]
    Read(#[source] std::io::Error),

    #[error("failed to parse data file: {0}")]
    Parse(#[source] serde_json::Error),

    #[error("failed to serialize tracker state: {0}")]
    Serialize(#[source] serde_json::Error),

    #[error("failed to write data file: {0}")]
    Write(#[source] std::io::Error),
}

#[derive(Debug)]
pub struct AppError {
    pub status: StatusCode,
    pub message: String,
}

impl AppError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
        }
    }
}

impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        (self.status, self.message).into_response()
    }
}
