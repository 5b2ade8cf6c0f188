use axum::extract::rejection::{BytesRejection, PathRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use blog_store::StoreError;
use blog_types::TypeError;
use thiserror::Error;

/// Failures that stop the server from starting or running.
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("internal error: {0}")]
    Internal(String),
}

pub type ServerResult<T> = Result<T, ServerError>;

/// Failure of a single API request.
///
/// Handlers return this instead of writing an error body; the
/// [`handle_errors`](crate::middleware::handle_errors) middleware renders it.
#[derive(Debug, Clone, Error)]
pub enum ApiError {
    /// Failure explicitly tagged with the status code to send.
    #[error("{message}")]
    Status { status: StatusCode, message: String },

    /// Malformed or missing input, detected before the service is called.
    #[error("{0}")]
    Validation(String),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("{0}")]
    Unclassified(String),
}

impl ApiError {
    pub fn with_status(status: StatusCode, message: impl Into<String>) -> Self {
        Self::Status { status, message: message.into() }
    }

    /// Status code sent for this failure.
    ///
    /// An explicit tag wins, then the "post not found" category maps to 404,
    /// and everything else is a 500.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Status { status, .. } => *status,
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::Store(StoreError::NotFound(_)) => StatusCode::NOT_FOUND,
            Self::Store(_) | Self::Unclassified(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<TypeError> for ApiError {
    fn from(e: TypeError) -> Self {
        Self::Validation(e.to_string())
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        Self::Validation(rejection.body_text())
    }
}

/// Body-read failures keep the status axum assigns them, e.g. 413.
impl From<BytesRejection> for ApiError {
    fn from(rejection: BytesRejection) -> Self {
        Self::with_status(rejection.status(), rejection.body_text())
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(e: serde_json::Error) -> Self {
        Self::Validation(e.to_string())
    }
}

/// An [`ApiError`] attached to a response that has not been rendered yet.
#[derive(Debug, Clone)]
pub struct RecordedError(pub ApiError);

impl IntoResponse for ApiError {
    /// Records the failure on an empty placeholder response.
    fn into_response(self) -> Response {
        let mut response = StatusCode::INTERNAL_SERVER_ERROR.into_response();
        response.extensions_mut().insert(RecordedError(self));
        response
    }
}
