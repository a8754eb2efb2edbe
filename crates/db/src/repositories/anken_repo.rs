//! Repository for project (anken) records.

use anken_core::search::matches_term;
use anken_core::status::status_label;
use anken_core::types::StatusId;

use crate::models::anken::{Anken, AnkenWithContact, CreateAnken, UpdateAnken};
use crate::models::stats::AnkenStats;
use crate::store::{now_not_before, Tables};
use crate::MemStore;

/// Provides CRUD, search and aggregate operations for projects.
pub struct AnkenRepo;

impl AnkenRepo {
    /// Insert a new project, assigning its id and timestamps.
    pub async fn create(store: &MemStore, input: CreateAnken) -> Anken {
        let mut tables = store.write().await;
        let id = tables.next_id();
        let now = chrono::Utc::now();
        let anken = Anken {
            id: id.clone(),
            fields: input,
            created_at: now,
            updated_at: now,
        };
        tables.anken.insert(id, anken.clone());
        tracing::debug!(anken_id = %anken.id, "Inserted anken");
        anken
    }

    /// Find a project by id.
    pub async fn find_by_id(store: &MemStore, id: &str) -> Option<Anken> {
        store.read().await.anken.get(id).cloned()
    }

    /// List all projects, most recently created first.
    ///
    /// Records with equal `created_at` are ordered most recently inserted first.
    pub async fn list(store: &MemStore) -> Vec<Anken> {
        let tables = store.read().await;
        sorted_newest_first(&tables)
    }

    /// Merge `input` onto an existing project and refresh `updated_at`.
    ///
    /// Returns `None` without touching anything if no project has this id.
    pub async fn update(store: &MemStore, id: &str, input: UpdateAnken) -> Option<Anken> {
        let mut tables = store.write().await;
        let existing = tables.anken.get_mut(id)?;
        input.apply_to(&mut existing.fields);
        existing.updated_at = now_not_before(existing.updated_at);
        Some(existing.clone())
    }

    /// Permanently remove a project. Returns `true` if a record was removed.
    pub async fn delete(store: &MemStore, id: &str) -> bool {
        store.write().await.anken.shift_remove(id).is_some()
    }

    /// Filter the sorted project list.
    ///
    /// A non-empty `term` must appear (case-insensitively) in the name or
    /// detail; `status`, when given, must match exactly. An empty term and an
    /// absent status each match everything.
    pub async fn search(store: &MemStore, term: &str, status: Option<StatusId>) -> Vec<Anken> {
        let tables = store.read().await;
        sorted_newest_first(&tables)
            .into_iter()
            .filter(|a| {
                matches_term(
                    term,
                    [a.fields.name.as_deref(), a.fields.detail.as_deref()],
                )
            })
            .filter(|a| status.map_or(true, |s| a.fields.status == Some(s)))
            .collect()
    }

    /// Compute dashboard figures over the current collection.
    pub async fn stats(store: &MemStore) -> AnkenStats {
        let items = Self::list(store).await;
        AnkenStats::compute(&items, chrono::Utc::now())
    }

    /// Resolve contact and account names for a single project.
    pub async fn with_contact(store: &MemStore, anken: Anken) -> AnkenWithContact {
        let tables = store.read().await;
        attach_contact(&tables, anken)
    }

    /// Resolve contact and account names for each project.
    ///
    /// Dangling references resolve to `None`.
    pub async fn with_contacts(store: &MemStore, items: Vec<Anken>) -> Vec<AnkenWithContact> {
        let tables = store.read().await;
        items
            .into_iter()
            .map(|anken| attach_contact(&tables, anken))
            .collect()
    }
}

fn sorted_newest_first(tables: &Tables) -> Vec<Anken> {
    let mut items: Vec<Anken> = tables.anken.values().rev().cloned().collect();
    // Stable sort keeps the reversed insertion order for equal timestamps.
    items.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    items
}

fn attach_contact(tables: &Tables, anken: Anken) -> AnkenWithContact {
    let contact = anken
        .fields
        .contact_id
        .as_deref()
        .and_then(|id| tables.contacts.get(id));
    let account = contact.and_then(|c| tables.accounts.get(&c.account_id));

    AnkenWithContact {
        status_label: status_label(anken.fields.status),
        contact_name: contact.map(|c| c.name.clone()),
        account_name: account.map(|a| a.name.clone()),
        anken,
    }
}
