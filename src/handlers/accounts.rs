//! Account HTTP handlers.
//!
//! This module implements the account endpoints:
//! - GET /account - List all accounts
//! - POST /account - Create a new account
//! - GET /account/{id} - Get account by id (token required)
//! - DELETE /account/{id} - Delete account by id (token required)

use axum::{
    Json,
    body::Bytes,
    extract::{Path, State},
};

use super::decode_body;
use crate::{
    app::AppState,
    error::AppError,
    models::account::{
        Account, CreateAccountRequest, CreateAccountResponse, DeleteAccountResponse, NewAccount,
    },
    storage::Storage,
};

/// List every account.
///
/// # Response
///
/// - **Success (200 OK)**: JSON array of accounts, possibly empty
/// - **Error (400)**: storage failure
pub async fn list_accounts<S: Storage>(
    State(state): State<AppState<S>>,
) -> Result<Json<Vec<Account>>, AppError> {
    let accounts = state.storage.get_accounts().await?;

    Ok(Json(accounts))
}

/// Create a new account.
///
/// # Request Body
///
/// ```json
/// { "firstName": "Ada", "secondName": "Lovelace" }
/// ```
///
/// The body is decoded whatever its `Content-Type`. Missing names default to
/// empty strings.
///
/// # Response
///
/// - **Success (200 OK)**: the stored account with its server-assigned id,
///   plus a `token` for the guarded per-account routes
/// - **Error (400)**: malformed body or storage failure
///
/// The account number is drawn at random and the balance starts at zero;
/// neither can be set by the client.
pub async fn create_account<S: Storage>(
    State(state): State<AppState<S>>,
    body: Bytes,
) -> Result<Json<CreateAccountResponse>, AppError> {
    let request: CreateAccountRequest = decode_body(&body)?;

    let new_account = NewAccount::new(request.first_name, request.second_name);
    let account = state.storage.create_account(&new_account).await?;

    let token = state.tokens.issue(&account)?;
    tracing::debug!(id = account.id, number = account.number, "token issued");

    Ok(Json(CreateAccountResponse { account, token }))
}

/// Get a specific account by id.
///
/// # Response
///
/// - **Success (200 OK)**: the account
/// - **Error (400)**: id is not an integer, or no account has this id
/// - **Error (403)**: rejected by the authorization middleware
pub async fn get_account<S: Storage>(
    State(state): State<AppState<S>>,
    Path(raw_id): Path<String>,
) -> Result<Json<Account>, AppError> {
    let id = parse_id(&raw_id)?;
    let account = state.storage.get_account_by_id(id).await?;

    Ok(Json(account))
}

/// Delete an account by id.
///
/// Answers `{"deleted": <id>}` whether or not the account existed.
pub async fn delete_account<S: Storage>(
    State(state): State<AppState<S>>,
    Path(raw_id): Path<String>,
) -> Result<Json<DeleteAccountResponse>, AppError> {
    let id = parse_id(&raw_id)?;
    state.storage.delete_account(id).await?;

    Ok(Json(DeleteAccountResponse { deleted: id }))
}

fn parse_id(raw: &str) -> Result<i32, AppError> {
    raw.parse()
        .map_err(|_| AppError::Validation(format!("invalid id given {raw}")))
}
