//! Token authorization middleware.
//!
//! This middleware guards per-account routes:
//! 1. Extract the token from the `x-jwt-token` header (or `Authorization: Bearer`)
//! 2. Validate it with the `TokenService`
//! 3. On success, run the wrapped handler with the request untouched
//! 4. On failure, answer 403 `{"error":"permission denied"}` and stop

use axum::{
    extract::{Request, State},
    http::{HeaderMap, header::AUTHORIZATION},
    middleware::Next,
    response::Response,
};

use crate::{error::AppError, services::token_service::TokenService};

/// Header carrying the token.
pub const TOKEN_HEADER: &str = "x-jwt-token";

/// Token authorization middleware function.
///
/// # Headers
///
/// ```text
/// x-jwt-token: eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...
/// ```
///
/// `Authorization: Bearer <token>` is accepted when `x-jwt-token` is absent.
///
/// # Returns
///
/// - `Ok(Response)` from the wrapped handler if the token is valid
/// - `Err(AppError::PermissionDenied)` otherwise; the wrapped handler is
///   never called
pub async fn auth_middleware(
    State(tokens): State<TokenService>,
    request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let Some(token) = extract_token(request.headers()) else {
        tracing::warn!(path = %request.uri().path(), "request without token rejected");
        return Err(AppError::PermissionDenied);
    };

    match tokens.validate(token) {
        Ok(claims) => {
            tracing::debug!(account_number = claims.account_number, "token accepted");
            Ok(next.run(request).await)
        }
        Err(error) => {
            tracing::warn!(path = %request.uri().path(), %error, "invalid token rejected");
            Err(AppError::PermissionDenied)
        }
    }
}

fn extract_token(headers: &HeaderMap) -> Option<&str> {
    if let Some(value) = headers.get(TOKEN_HEADER) {
        return value.to_str().ok();
    }

    headers
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .and_then(|h| h.strip_prefix("Bearer "))
}
