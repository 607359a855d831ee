//! Error types and HTTP error response handling.
//!
//! Every handler returns `Result<_, AppError>`. The `IntoResponse` impl below
//! is the single error adapter of the service: whatever goes wrong, the client
//! receives `{"error": "<message>"}` and a status code derived from the
//! variant.

use axum::{
    Json,
    http::{Method, StatusCode},
    response::{IntoResponse, Response},
};
use serde_json::json;

/// Application-wide error type.
///
/// # Error Categories
///
/// - **Validation**: malformed path parameters or request bodies
/// - **Authorization**: missing, malformed, forged or expired tokens
/// - **Resource**: the requested account does not exist
/// - **Storage**: query failures and an unreachable backend
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Request body or parameters are invalid.
    #[error("{0}")]
    Validation(String),

    /// Token validation failed.
    ///
    /// The cause is logged by the authorization middleware but never echoed
    /// to the client.
    #[error("permission denied")]
    PermissionDenied,

    /// No account row matches the given id.
    #[error("account {0} not found")]
    NotFound(i32),

    /// A query failed. The driver's message is passed through unchanged.
    #[error(transparent)]
    Persistence(#[from] sqlx::Error),

    /// The backend could not be reached while connecting.
    #[error("database unreachable: {0}")]
    Connection(#[source] sqlx::Error),

    /// Signing a new token failed.
    #[error("token error: {0}")]
    Token(#[from] jsonwebtoken::errors::Error),

    /// The operation is declared but deliberately not implemented.
    #[error("{0} is not implemented")]
    Unimplemented(&'static str),

    /// The path exists but not for this method.
    #[error("method not allowed {0}")]
    MethodNotAllowed(Method),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::PermissionDenied => StatusCode::FORBIDDEN,
            _ => StatusCode::BAD_REQUEST,
        }
    }
}

/// Convert AppError into an HTTP response.
///
/// # Response Format
///
/// ```json
/// { "error": "permission denied" }
/// ```
///
/// # Status Code Mapping
///
/// - `PermissionDenied` → 403 Forbidden
/// - everything else → 400 Bad Request (unknown ids included)
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = Json(json!({ "error": self.to_string() }));

        (status, body).into_response()
    }
}
