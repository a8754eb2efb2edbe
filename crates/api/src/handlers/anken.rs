//! Handlers for the `/projects` resource.

use anken_core::error::CoreError;
use anken_db::models::anken::{AnkenWithContact, CreateAnken, UpdateAnken};
use anken_db::repositories::AnkenRepo;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use crate::error::AppResult;
use crate::extract::{ValidatedJson, ValidatedQuery};
use crate::query::AnkenListParams;
use crate::response::MessageResponse;
use crate::state::AppState;

/// POST /api/v1/projects
pub async fn create(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<CreateAnken>,
) -> AppResult<(StatusCode, Json<AnkenWithContact>)> {
    let anken = AnkenRepo::create(&state.store, input).await;
    tracing::info!(anken_id = %anken.id, "Created project");

    let view = AnkenRepo::with_contact(&state.store, anken).await;
    Ok((StatusCode::CREATED, Json(view)))
}

/// GET /api/v1/projects
///
/// Lists everything unless `q` or `status` is given, in which case the
/// filters are applied.
pub async fn list(
    State(state): State<AppState>,
    ValidatedQuery(params): ValidatedQuery<AnkenListParams>,
) -> AppResult<Json<Vec<AnkenWithContact>>> {
    let items = if params.has_filters() {
        let status = params.status_filter()?;
        AnkenRepo::search(&state.store, params.term(), status).await
    } else {
        AnkenRepo::list(&state.store).await
    };

    tracing::debug!(
        query = params.term(),
        status = ?params.status,
        results = items.len(),
        "Listed projects"
    );
    Ok(Json(AnkenRepo::with_contacts(&state.store, items).await))
}

/// GET /api/v1/projects/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<AnkenWithContact>> {
    let anken = AnkenRepo::find_by_id(&state.store, &id)
        .await
        .ok_or_else(|| CoreError::not_found("Project", id))?;
    Ok(Json(AnkenRepo::with_contact(&state.store, anken).await))
}

/// PUT /api/v1/projects/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ValidatedJson(input): ValidatedJson<UpdateAnken>,
) -> AppResult<Json<AnkenWithContact>> {
    let anken = AnkenRepo::update(&state.store, &id, input)
        .await
        .ok_or_else(|| CoreError::not_found("Project", id))?;
    tracing::info!(anken_id = %anken.id, "Updated project");
    Ok(Json(AnkenRepo::with_contact(&state.store, anken).await))
}

/// DELETE /api/v1/projects/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<MessageResponse>> {
    if !AnkenRepo::delete(&state.store, &id).await {
        return Err(CoreError::not_found("Project", id).into());
    }
    tracing::info!(anken_id = %id, "Deleted project");
    Ok(Json(MessageResponse::new("Project deleted successfully")))
}
