//! Handlers for the `/contacts` resource.

use anken_core::error::CoreError;
use anken_core::validation::validate_required;
use anken_db::models::contact::{ContactWithAccount, CreateContact};
use anken_db::repositories::ContactRepo;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use crate::error::AppResult;
use crate::extract::ValidatedJson;
use crate::response::MessageResponse;
use crate::state::AppState;

/// POST /api/v1/contacts
pub async fn create(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<CreateContact>,
) -> AppResult<(StatusCode, Json<ContactWithAccount>)> {
    validate_required("contact_name", &input.contact_name).map_err(CoreError::Validation)?;

    let contact = ContactRepo::create(&state.store, input).await?;
    tracing::info!(
        contact_id = %contact.contact.id,
        account_id = %contact.contact.account_id,
        "Created contact"
    );
    Ok((StatusCode::CREATED, Json(contact)))
}

/// GET /api/v1/contacts
pub async fn list(State(state): State<AppState>) -> Json<Vec<ContactWithAccount>> {
    Json(ContactRepo::list(&state.store).await)
}

/// GET /api/v1/contacts/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<ContactWithAccount>> {
    let contact = ContactRepo::find_by_id(&state.store, &id)
        .await
        .ok_or_else(|| CoreError::not_found("Contact", id))?;
    Ok(Json(contact))
}

/// DELETE /api/v1/contacts/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<MessageResponse>> {
    if !ContactRepo::delete(&state.store, &id).await {
        return Err(CoreError::not_found("Contact", id).into());
    }
    tracing::info!(contact_id = %id, "Deleted contact");
    Ok(Json(MessageResponse::new("Contact deleted successfully")))
}
