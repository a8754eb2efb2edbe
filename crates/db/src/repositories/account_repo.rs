//! Repository for accounts.

use anken_core::error::CoreError;

use crate::models::account::{Account, AccountWithContacts, CreateAccount};
use crate::store::Tables;
use crate::MemStore;

/// Provides list/get/create/delete operations for accounts.
pub struct AccountRepo;

impl AccountRepo {
    /// Insert a new account, returning the created record.
    pub async fn create(store: &MemStore, input: CreateAccount) -> Account {
        let mut tables = store.write().await;
        let id = tables.next_id();
        let account = Account {
            id: id.clone(),
            name: input.account_name,
            created_at: chrono::Utc::now(),
        };
        tables.accounts.insert(id, account.clone());
        account
    }

    /// List all accounts in creation order, each with its contacts.
    pub async fn list(store: &MemStore) -> Vec<AccountWithContacts> {
        let tables = store.read().await;
        tables
            .accounts
            .values()
            .map(|account| with_contacts(&tables, account))
            .collect()
    }

    /// Find an account by id, with its contacts.
    pub async fn find_by_id(store: &MemStore, id: &str) -> Option<AccountWithContacts> {
        let tables = store.read().await;
        tables
            .accounts
            .get(id)
            .map(|account| with_contacts(&tables, account))
    }

    /// Delete an account that has no contacts.
    ///
    /// Returns `Ok(false)` if the account does not exist and
    /// [`CoreError::Conflict`] while contacts still reference it.
    pub async fn delete(store: &MemStore, id: &str) -> Result<bool, CoreError> {
        let mut tables = store.write().await;
        if !tables.accounts.contains_key(id) {
            return Ok(false);
        }
        if tables.contacts.values().any(|c| c.account_id == id) {
            return Err(CoreError::Conflict(
                "この取引先には担当者が登録されています。先に担当者を削除してください。".into(),
            ));
        }
        Ok(tables.accounts.shift_remove(id).is_some())
    }
}

fn with_contacts(tables: &Tables, account: &Account) -> AccountWithContacts {
    AccountWithContacts {
        account: account.clone(),
        contacts: tables
            .contacts
            .values()
            .filter(|c| c.account_id == account.id)
            .cloned()
            .collect(),
    }
}
