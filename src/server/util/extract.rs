//! Request extractors that report every input problem as a 422 `message` list.
//!
//! Axum's own extractors reject with plain-text bodies and a mix of 400, 415 and 422
//! statuses. These wrappers funnel all of them into `AppError::Validation`.

use axum::{
    extract::{FromRequest, FromRequestParts, Path, Query, Request},
    http::request::Parts,
    Form, Json,
};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::{model::validation::Validate, server::error::AppError};

fn invalid(location: &str, reason: impl std::fmt::Display) -> AppError {
    AppError::Validation(vec![format!("{}: {}", location, reason)])
}

/// JSON body checked against the accepted keys and field validators of `T`.
///
/// Rejects, in order: malformed JSON, anything but an object, unknown and missing keys (one
/// message per key), type mismatches, a partial update that sets nothing, then failed field
/// validators.
pub struct ApiJson<T>(pub T);

impl<S, T> FromRequest<S> for ApiJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<Value>::from_request(req, state)
            .await
            .map_err(|e| invalid("body", e.body_text()))?;

        let Value::Object(fields) = &value else {
            return Err(invalid("body", "expected a JSON object"));
        };

        let mut errors: Vec<String> = fields
            .keys()
            .filter(|key| !T::FIELDS.contains(&key.as_str()))
            .map(|key| format!("{}: extra fields not permitted", key))
            .collect();
        errors.extend(
            T::REQUIRED
                .iter()
                .filter(|key| fields.get(**key).map_or(true, Value::is_null))
                .map(|key| format!("{}: field required", key)),
        );
        if !errors.is_empty() {
            return Err(AppError::Validation(errors));
        }

        let body: T = serde_json::from_value(value).map_err(|e| invalid("body", e))?;

        if body.is_empty() {
            return Err(AppError::Validation(vec![T::empty_message()]));
        }

        let errors = body.validate();
        if !errors.is_empty() {
            return Err(AppError::Validation(errors));
        }

        Ok(ApiJson(body))
    }
}

/// Query string extractor with 422 rejections.
pub struct ApiQuery<T>(pub T);

impl<S, T> FromRequestParts<S> for ApiQuery<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        Query::<T>::from_request_parts(parts, state)
            .await
            .map(|Query(query)| ApiQuery(query))
            .map_err(|e| invalid("query", e.body_text()))
    }
}

/// Path parameter extractor with 422 rejections, e.g. for ids that are not UUIDs.
pub struct ApiPath<T>(pub T);

impl<S, T> FromRequestParts<S> for ApiPath<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Send,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        Path::<T>::from_request_parts(parts, state)
            .await
            .map(|Path(path)| ApiPath(path))
            .map_err(|e| invalid("path", e.body_text()))
    }
}

/// Form-urlencoded body extractor with 422 rejections, used by login.
pub struct ApiForm<T>(pub T);

impl<S, T> FromRequest<S> for ApiForm<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        Form::<T>::from_request(req, state)
            .await
            .map(|Form(form)| ApiForm(form))
            .map_err(|e| invalid("body", e.body_text()))
    }
}
