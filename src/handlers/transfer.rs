//! Transfer HTTP handler.

use axum::{Json, body::Bytes};

use super::decode_body;
use crate::{error::AppError, models::transfer::TransferRequest};

/// Parse a transfer request and echo it back.
///
/// # Endpoint
///
/// `POST /transfer`
///
/// No money moves: the parsed request is returned as-is and no account is
/// read or written.
pub async fn create_transfer(body: Bytes) -> Result<Json<TransferRequest>, AppError> {
    let request: TransferRequest = decode_body(&body)?;
    tracing::info!(to_account = request.to_account, amount = request.amount, "transfer received");

    Ok(Json(request))
}
