//! Query parameter types for API handlers.

use anken_core::types::StatusId;
use serde::Deserialize;

use crate::error::AppError;

/// Project list filters (`?q=&status=`).
///
/// `search` is accepted as an alias of `q`. Empty values disable their
/// filter.
#[derive(Debug, Default, Deserialize)]
pub struct AnkenListParams {
    #[serde(alias = "search")]
    pub q: Option<String>,
    pub status: Option<String>,
}

impl AnkenListParams {
    /// The search term, or `""` when absent.
    pub fn term(&self) -> &str {
        self.q.as_deref().unwrap_or("")
    }

    /// The parsed status filter.
    ///
    /// Absent or blank disables the filter; anything that is not an integer
    /// is a bad request.
    pub fn status_filter(&self) -> Result<Option<StatusId>, AppError> {
        match self.status.as_deref().map(str::trim) {
            None | Some("") => Ok(None),
            Some(raw) => raw.parse().map(Some).map_err(|_| {
                AppError::BadRequest(format!("status must be an integer, got '{raw}'"))
            }),
        }
    }

    /// Whether any filter is active; when none is, the handler lists everything.
    pub fn has_filters(&self) -> bool {
        !self.term().is_empty() || self.status.as_deref().is_some_and(|s| !s.trim().is_empty())
    }
}
