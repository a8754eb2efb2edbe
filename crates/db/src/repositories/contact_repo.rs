//! Repository for contacts.

use anken_core::error::CoreError;

use crate::models::contact::{Contact, ContactWithAccount, CreateContact};
use crate::store::Tables;
use crate::MemStore;

/// Provides list/get/create/delete operations for contacts.
pub struct ContactRepo;

impl ContactRepo {
    /// Insert a new contact under an existing account.
    ///
    /// Fails with [`CoreError::Validation`] if `account_id` is unknown.
    pub async fn create(
        store: &MemStore,
        input: CreateContact,
    ) -> Result<ContactWithAccount, CoreError> {
        let mut tables = store.write().await;
        let Some(account) = tables.accounts.get(&input.account_id).cloned() else {
            return Err(CoreError::Validation(format!(
                "account_id {} does not reference an existing account",
                input.account_id
            )));
        };

        let id = tables.next_id();
        let contact = Contact {
            id: id.clone(),
            name: input.contact_name,
            account_id: input.account_id,
            created_at: chrono::Utc::now(),
        };
        tables.contacts.insert(id, contact.clone());

        Ok(ContactWithAccount {
            contact,
            account: Some(account),
        })
    }

    /// List all contacts in creation order, each with its account.
    pub async fn list(store: &MemStore) -> Vec<ContactWithAccount> {
        let tables = store.read().await;
        tables
            .contacts
            .values()
            .map(|contact| with_account(&tables, contact))
            .collect()
    }

    /// Find a contact by id, with its account.
    pub async fn find_by_id(store: &MemStore, id: &str) -> Option<ContactWithAccount> {
        let tables = store.read().await;
        tables
            .contacts
            .get(id)
            .map(|contact| with_account(&tables, contact))
    }

    /// Permanently remove a contact. Returns `true` if a record was removed.
    ///
    /// Projects referencing the contact are left untouched.
    pub async fn delete(store: &MemStore, id: &str) -> bool {
        store.write().await.contacts.shift_remove(id).is_some()
    }
}

fn with_account(tables: &Tables, contact: &Contact) -> ContactWithAccount {
    ContactWithAccount {
        contact: contact.clone(),
        account: tables.accounts.get(&contact.account_id).cloned(),
    }
}
