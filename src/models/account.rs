//! Account data models and API request/response types.
//!
//! This module defines:
//! - `Account`: a row of the `account` table
//! - `NewAccount`: the non-id fields written on insert
//! - `CreateAccountRequest`: request body for creating accounts
//! - `CreateAccountResponse`: the created account plus its issued token
//! - `DeleteAccountResponse`: acknowledgement of a delete

use chrono::{DateTime, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Account numbers are drawn uniformly from this range.
///
/// They are not guaranteed to be unique.
pub const ACCOUNT_NUMBER_RANGE: std::ops::Range<i64> = 0..1_000_000;

/// Represents an account record from the database.
///
/// # JSON Example
///
/// ```json
/// {
///   "id": 1,
///   "firstName": "Ada",
///   "secondName": "Lovelace",
///   "number": 424242,
///   "balance": 0,
///   "createdAt": "2025-12-20T10:00:00Z"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    /// Assigned by the database on insert.
    pub id: i32,

    pub first_name: String,

    pub second_name: String,

    /// Pseudo-random account number.
    pub number: i64,

    /// Current balance. Nothing in this service changes it after insert.
    pub balance: i64,

    pub created_at: DateTime<Utc>,
}

/// An account that has not been stored yet.
///
/// Carries no id: the storage layer assigns one on insert.
#[derive(Debug, Clone)]
pub struct NewAccount {
    pub first_name: String,
    pub second_name: String,
    pub number: i64,
    pub balance: i64,
    pub created_at: DateTime<Utc>,
}

impl NewAccount {
    /// Build a fresh account with a random number and a zero balance.
    pub fn new(first_name: impl Into<String>, second_name: impl Into<String>) -> Self {
        Self {
            first_name: first_name.into(),
            second_name: second_name.into(),
            number: rand::rng().random_range(ACCOUNT_NUMBER_RANGE),
            balance: 0,
            created_at: Utc::now(),
        }
    }
}

/// Request body for creating a new account.
///
/// ```json
/// { "firstName": "Ada", "secondName": "Lovelace" }
/// ```
///
/// Absent names are accepted and stored as empty strings.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateAccountRequest {
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub second_name: String,
}

/// Response body for `POST /account`.
///
/// The account fields are flattened into the top-level object and the
/// token issued for the account is returned alongside them.
#[derive(Debug, Serialize)]
pub struct CreateAccountResponse {
    #[serde(flatten)]
    pub account: Account,

    pub token: String,
}

/// Response body for `DELETE /account/{id}`.
#[derive(Debug, Serialize)]
pub struct DeleteAccountResponse {
    pub deleted: i32,
}
