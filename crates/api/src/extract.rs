//! Request extractors with uniform JSON error responses.

use anken_core::error::CoreError;
use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{FromRequest, FromRequestParts, Query, Request};
use axum::http::request::Parts;
use axum::Json;
use serde::de::DeserializeOwned;

use crate::error::AppError;

/// JSON body extractor that reports every rejection as a 400 `VALIDATION_ERROR`.
///
/// Axum's plain [`Json`] answers type mismatches with 422 and missing
/// content types with 415; payload problems here are all client validation
/// failures and carry the parser's message as detail.
///
/// ```ignore
/// async fn create(ValidatedJson(input): ValidatedJson<CreateAnken>) -> AppResult<Json<Anken>> {
///     ...
/// }
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidatedJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(ValidatedJson(value)),
            Err(rejection) => Err(validation_error(rejection)),
        }
    }
}

fn validation_error(rejection: JsonRejection) -> AppError {
    tracing::debug!(error = %rejection.body_text(), "Rejected request body");
    AppError::Core(CoreError::Validation(format!(
        "Invalid data: {}",
        rejection.body_text()
    )))
}

/// Query string extractor that reports rejections as a 400 `BAD_REQUEST`
/// with the standard `{error, code}` body.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidatedQuery<T>(pub T);

impl<S, T> FromRequestParts<S> for ValidatedQuery<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match Query::<T>::from_request_parts(parts, state).await {
            Ok(Query(value)) => Ok(ValidatedQuery(value)),
            Err(rejection) => Err(query_error(rejection)),
        }
    }
}

fn query_error(rejection: QueryRejection) -> AppError {
    tracing::debug!(error = %rejection.body_text(), "Rejected query string");
    AppError::BadRequest(rejection.body_text())
}
