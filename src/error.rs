use axum::{
    extract::rejection::FormRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;
use tracing::{error, warn};

#[derive(Debug, Error)]
pub enum AppError {
    /// Form body missing a field, undecodable, or sent with the wrong content type.
    #[error("bad request: {0}")]
    BadRequest(#[from] FormRejection),

    /// Anything the user store reports: connectivity, constraint violations, bad SQL.
    #[error("storage error: {0}")]
    Storage(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::BadRequest(e) => {
                warn!(error = %e, "rejected form body");
                (StatusCode::BAD_REQUEST, "Bad Request").into_response()
            }
            AppError::Storage(e) => {
                error!(error = %e, "user store failed");
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response()
            }
        }
    }
}
