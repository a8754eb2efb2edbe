//! Contact (担当者) model and DTOs.

use anken_core::types::{RecordId, Timestamp};
use serde::{Deserialize, Serialize};

use crate::models::account::Account;

/// A person at an account, referenced by projects through `contact_id`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Contact {
    #[serde(rename = "contact_id")]
    pub id: RecordId,
    #[serde(rename = "contact_name")]
    pub name: String,
    pub account_id: RecordId,
    pub created_at: Timestamp,
}

/// DTO for creating a new contact. `account_id` must reference an existing account.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CreateContact {
    pub contact_name: String,
    pub account_id: RecordId,
}

/// A contact with its owning account, if that account still exists.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContactWithAccount {
    #[serde(flatten)]
    pub contact: Contact,
    pub account: Option<Account>,
}
