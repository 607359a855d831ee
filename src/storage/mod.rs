//! Storage port: every persistence operation the handlers rely on.
//!
//! Handlers are generic over [`Storage`] and never touch SQL directly.
//! [`postgres::PostgresStore`] is the production adapter.

pub mod postgres;

#[cfg(test)]
pub mod memory;

use std::future::Future;

use crate::{
    error::AppError,
    models::account::{Account, NewAccount},
};

/// Persistence operations for accounts.
///
/// Uses native async fn in traits, so implementations are used through
/// generics rather than trait objects.
pub trait Storage: Clone + Send + Sync + 'static {
    /// Prepare the backing store. Idempotent; call once before any CRUD
    /// operation.
    fn init(&self) -> impl Future<Output = Result<(), AppError>> + Send;

    /// Insert a new account and return the stored row, including the id the
    /// store assigned.
    fn create_account(
        &self,
        account: &NewAccount,
    ) -> impl Future<Output = Result<Account, AppError>> + Send;

    /// Declared for completeness; every implementation fails with
    /// `AppError::Unimplemented` so that writes are never silently dropped.
    fn update_account(
        &self,
        account: &Account,
    ) -> impl Future<Output = Result<(), AppError>> + Send;

    /// Remove the account with this id.
    ///
    /// Succeeds whether or not a row matched: callers cannot tell "deleted"
    /// from "was already absent".
    fn delete_account(&self, id: i32) -> impl Future<Output = Result<(), AppError>> + Send;

    /// Fetch one account. `AppError::NotFound` when no row matches.
    fn get_account_by_id(&self, id: i32)
    -> impl Future<Output = Result<Account, AppError>> + Send;

    /// Fetch every account in storage order. Empty, not an error, when there
    /// are none.
    fn get_accounts(&self) -> impl Future<Output = Result<Vec<Account>, AppError>> + Send;
}
