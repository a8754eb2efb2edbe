//! Project status codes and their fixed display table.
//!
//! The codes, labels and colors are consumed verbatim by the dashboard UI
//! and must not change.

use serde::Serialize;

use crate::types::StatusId;

/// Label shown for absent or unrecognized status codes.
pub const UNKNOWN_STATUS_LABEL: &str = "unknown";

/// Project lifecycle stage.
#[repr(i32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnkenStatus {
    New = 1,
    InProgress = 2,
    Done = 3,
    OnHold = 4,
}

impl AnkenStatus {
    /// Every status, in code order.
    pub const ALL: [AnkenStatus; 4] = [
        AnkenStatus::New,
        AnkenStatus::InProgress,
        AnkenStatus::Done,
        AnkenStatus::OnHold,
    ];

    /// Return the stored status code.
    pub fn id(self) -> StatusId {
        self as StatusId
    }

    /// Look up a status by its stored code.
    pub fn from_id(id: StatusId) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.id() == id)
    }

    /// Machine-readable key.
    pub fn key(self) -> &'static str {
        match self {
            AnkenStatus::New => "new",
            AnkenStatus::InProgress => "in_progress",
            AnkenStatus::Done => "done",
            AnkenStatus::OnHold => "on_hold",
        }
    }

    /// Display label.
    pub fn label(self) -> &'static str {
        match self {
            AnkenStatus::New => "新規",
            AnkenStatus::InProgress => "進行中",
            AnkenStatus::Done => "完了",
            AnkenStatus::OnHold => "保留",
        }
    }

    /// Badge CSS classes.
    pub fn color(self) -> &'static str {
        match self {
            AnkenStatus::New => "bg-blue-100 text-blue-800",
            AnkenStatus::InProgress => "bg-green-100 text-green-800",
            AnkenStatus::Done => "bg-gray-100 text-gray-800",
            AnkenStatus::OnHold => "bg-yellow-100 text-yellow-800",
        }
    }
}

impl From<AnkenStatus> for StatusId {
    fn from(value: AnkenStatus) -> Self {
        value as StatusId
    }
}

/// Display label for a stored (possibly absent) status code.
pub fn status_label(code: Option<StatusId>) -> &'static str {
    code.and_then(AnkenStatus::from_id)
        .map(AnkenStatus::label)
        .unwrap_or(UNKNOWN_STATUS_LABEL)
}

/// One row of the status table served to the UI.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusInfo {
    pub code: StatusId,
    pub key: &'static str,
    pub label: &'static str,
    pub color: &'static str,
}

impl From<AnkenStatus> for StatusInfo {
    fn from(status: AnkenStatus) -> Self {
        StatusInfo {
            code: status.id(),
            key: status.key(),
            label: status.label(),
            color: status.color(),
        }
    }
}

/// The full status table, in code order.
pub fn status_table() -> Vec<StatusInfo> {
    AnkenStatus::ALL.into_iter().map(StatusInfo::from).collect()
}
