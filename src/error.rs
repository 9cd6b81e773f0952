use axum::extract::multipart::MultipartError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;
use tracing::{error, warn};

#[derive(Error, Debug)]
pub enum ServeError {
    #[error("not found: {0}")]
    NotFound(String),

    #[error("not a directory: {0}")]
    NotADirectory(String),

    #[error("empty form")]
    EmptyForm,

    #[error("method {0} not allowed")]
    MethodNotAllowed(String),

    #[error("already exists: {0}")]
    AlreadyExists(String),

    #[error("upload too large: {size} bytes exceeds limit of {limit} bytes")]
    TooLarge { size: u64, limit: u64 },

    #[error("multipart parse error: {0}")]
    Multipart(#[from] MultipartError),

    #[error("unsupported file type: {0}")]
    Unsupported(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl ServeError {
    fn status(&self) -> StatusCode {
        match self {
            ServeError::NotFound(_) => StatusCode::NOT_FOUND,
            ServeError::NotADirectory(_)
            | ServeError::EmptyForm
            | ServeError::MethodNotAllowed(_) => StatusCode::BAD_REQUEST,
            ServeError::AlreadyExists(_) => StatusCode::FORBIDDEN,
            ServeError::TooLarge { .. } => StatusCode::PAYLOAD_TOO_LARGE,
            ServeError::Multipart(_) | ServeError::Unsupported(_) | ServeError::Io(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for ServeError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            error!("{}", self);
        } else {
            warn!("{}", self);
        }
        (status, self.to_string()).into_response()
    }
}
