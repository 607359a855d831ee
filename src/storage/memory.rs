//! In-process storage used by the handler tests.

use std::sync::{Arc, Mutex};

use super::Storage;
use crate::{
    error::AppError,
    models::account::{Account, NewAccount},
};

#[derive(Debug, Default)]
struct Inner {
    next_id: i32,
    accounts: Vec<Account>,
}

/// Vector-backed storage with auto-incrementing ids starting at 1.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    inner: Arc<Mutex<Inner>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Storage for MemoryStore {
    async fn init(&self) -> Result<(), AppError> {
        Ok(())
    }

    async fn create_account(&self, account: &NewAccount) -> Result<Account, AppError> {
        let mut inner = self.inner.lock().unwrap();
        inner.next_id += 1;

        let account = Account {
            id: inner.next_id,
            first_name: account.first_name.clone(),
            second_name: account.second_name.clone(),
            number: account.number,
            balance: account.balance,
            created_at: account.created_at,
        };
        inner.accounts.push(account.clone());

        Ok(account)
    }

    async fn update_account(&self, _account: &Account) -> Result<(), AppError> {
        Err(AppError::Unimplemented("update account"))
    }

    async fn delete_account(&self, id: i32) -> Result<(), AppError> {
        self.inner.lock().unwrap().accounts.retain(|a| a.id != id);
        Ok(())
    }

    async fn get_account_by_id(&self, id: i32) -> Result<Account, AppError> {
        self.inner
            .lock()
            .unwrap()
            .accounts
            .iter()
            .find(|a| a.id == id)
            .cloned()
            .ok_or(AppError::NotFound(id))
    }

    async fn get_accounts(&self) -> Result<Vec<Account>, AppError> {
        Ok(self.inner.lock().unwrap().accounts.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn empty_store_lists_nothing() {
        let store = MemoryStore::new();

        assert!(store.get_accounts().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn ids_are_assigned_on_insert() {
        let store = MemoryStore::new();

        let first = store.create_account(&NewAccount::new("A", "B")).await.unwrap();
        let second = store.create_account(&NewAccount::new("C", "D")).await.unwrap();

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
        assert_eq!(store.get_account_by_id(2).await.unwrap(), second);
    }

    #[tokio::test]
    async fn delete_of_absent_id_succeeds() {
        let store = MemoryStore::new();
        let created = store.create_account(&NewAccount::new("A", "B")).await.unwrap();

        store.delete_account(created.id + 1).await.unwrap();
        store.delete_account(created.id).await.unwrap();

        assert!(matches!(
            store.get_account_by_id(created.id).await,
            Err(AppError::NotFound(_))
        ));
    }
}
