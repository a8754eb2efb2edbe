//! Handlers for the `/accounts` resource.

use anken_core::error::CoreError;
use anken_core::validation::validate_required;
use anken_db::models::account::{Account, AccountWithContacts, CreateAccount};
use anken_db::repositories::AccountRepo;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use crate::error::AppResult;
use crate::extract::ValidatedJson;
use crate::response::MessageResponse;
use crate::state::AppState;

/// POST /api/v1/accounts
pub async fn create(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<CreateAccount>,
) -> AppResult<(StatusCode, Json<Account>)> {
    validate_required("account_name", &input.account_name).map_err(CoreError::Validation)?;

    let account = AccountRepo::create(&state.store, input).await;
    tracing::info!(account_id = %account.id, "Created account");
    Ok((StatusCode::CREATED, Json(account)))
}

/// GET /api/v1/accounts
pub async fn list(State(state): State<AppState>) -> Json<Vec<AccountWithContacts>> {
    Json(AccountRepo::list(&state.store).await)
}

/// GET /api/v1/accounts/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<AccountWithContacts>> {
    let account = AccountRepo::find_by_id(&state.store, &id)
        .await
        .ok_or_else(|| CoreError::not_found("Account", id))?;
    Ok(Json(account))
}

/// DELETE /api/v1/accounts/{id}
///
/// Refused with 409 while the account still has contacts.
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<MessageResponse>> {
    if !AccountRepo::delete(&state.store, &id).await? {
        return Err(CoreError::not_found("Account", id).into());
    }
    tracing::info!(account_id = %id, "Deleted account");
    Ok(Json(MessageResponse::new("Account deleted successfully")))
}
