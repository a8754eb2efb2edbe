//! Project (anken) record model and DTOs.
//!
//! The editable field list is declared once in [`define_anken_fields!`] and
//! expands into both the create payload ([`AnkenFields`]) and the partial
//! update payload ([`UpdateAnken`]), so the two can never drift apart.

use anken_core::types::{RecordId, StatusId, Timestamp};
use serde::{Deserialize, Deserializer, Serialize};

/// Deserialize a field that distinguishes "absent" from "explicitly null".
///
/// Used together with `#[serde(default)]`: absent stays `None`, `null`
/// becomes `Some(None)`, a value becomes `Some(Some(v))`.
fn nullable<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

macro_rules! define_anken_fields {
    (
        $( $(#[$fmeta:meta])* $field:ident : $ty:ty ),+ $(,)?
    ) => {
        /// Every client-editable project field. Also the create payload.
        ///
        /// Unknown keys, including the server-assigned `anken_id`,
        /// `created_at` and `updated_at`, are rejected.
        #[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
        #[serde(deny_unknown_fields)]
        pub struct AnkenFields {
            $(
                $(#[$fmeta])*
                #[serde(default)]
                pub $field: Option<$ty>,
            )+
        }

        /// Partial update payload.
        ///
        /// Absent keys keep their previous value, `null` clears the field,
        /// and any other value overwrites it.
        #[derive(Debug, Clone, Default, PartialEq, Deserialize)]
        #[serde(deny_unknown_fields)]
        pub struct UpdateAnken {
            $(
                $(#[$fmeta])*
                #[serde(default, deserialize_with = "nullable")]
                pub $field: Option<Option<$ty>>,
            )+
        }

        impl UpdateAnken {
            /// Shallow-merge the provided keys onto `fields`.
            pub fn apply_to(self, fields: &mut AnkenFields) {
                $(
                    if let Some(value) = self.$field {
                        fields.$field = value;
                    }
                )+
            }
        }
    };
}

define_anken_fields! {
    #[serde(rename = "anken_name")]
    name: String,
    detail: String,
    notes: String,
    /// ISO-8601 calendar date, stored unvalidated.
    start_date: String,
    end_date: String,
    limit_date: String,
    /// See [`anken_core::status::AnkenStatus`]; other values are kept as-is.
    #[serde(rename = "status_code")]
    status: StatusId,
    /// Free-text price, e.g. `"¥5,000,000"`.
    price: String,
    contract: String,
    meeting: String,
    foreigner: String,
    telework: String,
    /// 0 = no, 1 = yes, null = unspecified.
    #[serde(rename = "telework_yn")]
    telework_allowed: i32,
    required_skills: String,
    nice_skills: String,
    process: String,
    platform: String,
    framework: String,
    program: String,
    db: String,
    location: String,
    /// Prefecture.
    ken: String,
    time_from: String,
    time_to: String,
    duplicate_check: String,
    persons: String,
    contact_id: RecordId,
}

/// DTO for creating a new project.
pub type CreateAnken = AnkenFields;

/// A stored project record.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Anken {
    #[serde(rename = "anken_id")]
    pub id: RecordId,
    #[serde(flatten)]
    pub fields: AnkenFields,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A project together with the names resolved from its contact reference.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnkenWithContact {
    #[serde(flatten)]
    pub anken: Anken,
    /// Display label for `status_code`; `"unknown"` when absent or unrecognized.
    pub status_label: &'static str,
    pub contact_name: Option<String>,
    pub account_name: Option<String>,
}
