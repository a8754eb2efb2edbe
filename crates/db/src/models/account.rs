//! Account (取引先) model and DTOs.

use anken_core::types::{RecordId, Timestamp};
use serde::{Deserialize, Serialize};

use crate::models::contact::Contact;

/// An organization that contacts belong to.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Account {
    #[serde(rename = "account_id")]
    pub id: RecordId,
    #[serde(rename = "account_name")]
    pub name: String,
    pub created_at: Timestamp,
}

/// DTO for creating a new account.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CreateAccount {
    pub account_name: String,
}

/// An account with every contact that belongs to it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AccountWithContacts {
    #[serde(flatten)]
    pub account: Account,
    pub contacts: Vec<Contact>,
}
