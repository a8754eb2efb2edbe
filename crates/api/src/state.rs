use std::sync::Arc;

use anken_db::MemStore;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// The record store. Handlers only reach it through the repositories.
    pub store: Arc<MemStore>,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}
