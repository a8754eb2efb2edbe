pub mod account;
pub mod anken;
pub mod contact;
pub mod health;

use axum::routing::get;
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /projects                 list (?q=&status=), create
/// /projects/{id}            get, update, delete
///
/// /accounts                 list, create
/// /accounts/{id}            get, delete
///
/// /contacts                 list, create
/// /contacts/{id}            get, delete
///
/// /stats                    dashboard aggregate
/// /statuses                 status code table
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/projects", anken::router())
        .nest("/accounts", account::router())
        .nest("/contacts", contact::router())
        .route("/stats", get(handlers::stats::get_stats))
        .route("/statuses", get(handlers::stats::list_statuses))
}
