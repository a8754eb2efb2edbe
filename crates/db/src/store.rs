use std::collections::HashSet;

use anken_core::types::{RecordId, Timestamp};
use indexmap::IndexMap;
use tokio::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::models::account::Account;
use crate::models::anken::Anken;
use crate::models::contact::Contact;

/// In-memory store holding every record collection.
///
/// Each repository call takes the lock once for its whole duration, so no
/// caller ever observes a partially applied write. Maps preserve insertion
/// order, which list operations use as their tie-break.
///
/// Designed to be wrapped in `Arc` and shared across handlers. Tests build a
/// fresh instance each.
pub struct MemStore {
    tables: RwLock<Tables>,
}

#[derive(Default)]
pub(crate) struct Tables {
    pub anken: IndexMap<RecordId, Anken>,
    pub accounts: IndexMap<RecordId, Account>,
    pub contacts: IndexMap<RecordId, Contact>,
    /// Every id ever handed out, so deleted ids are never reissued.
    issued_ids: HashSet<RecordId>,
}

impl Tables {
    /// Generate an id that has never been issued by this store.
    pub fn next_id(&mut self) -> RecordId {
        loop {
            let id = uuid::Uuid::new_v4().to_string();
            if self.issued_ids.insert(id.clone()) {
                return id;
            }
        }
    }
}

impl MemStore {
    /// Create a new, empty store.
    pub fn new() -> Self {
        Self {
            tables: RwLock::new(Tables::default()),
        }
    }

    pub(crate) async fn read(&self) -> RwLockReadGuard<'_, Tables> {
        self.tables.read().await
    }

    pub(crate) async fn write(&self) -> RwLockWriteGuard<'_, Tables> {
        self.tables.write().await
    }
}

impl Default for MemStore {
    fn default() -> Self {
        Self::new()
    }
}

/// Current time, never earlier than `floor`.
///
/// Keeps `updated_at` monotonic even if the wall clock steps backwards.
pub(crate) fn now_not_before(floor: Timestamp) -> Timestamp {
    chrono::Utc::now().max(floor)
}
