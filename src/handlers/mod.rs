//! HTTP request handlers (route handlers).

use axum::http::Method;
use serde::de::DeserializeOwned;

use crate::error::AppError;

/// Account endpoints
pub mod accounts;
/// Transfer endpoint
pub mod transfer;

/// Fallback for a known path requested with an unsupported method.
pub async fn method_not_allowed(method: Method) -> AppError {
    AppError::MethodNotAllowed(method)
}

/// Decode a JSON request body.
///
/// The `Content-Type` header is not consulted; any body that parses is
/// accepted.
fn decode_body<T: DeserializeOwned>(body: &[u8]) -> Result<T, AppError> {
    serde_json::from_slice(body).map_err(|error| AppError::Validation(error.to_string()))
}
