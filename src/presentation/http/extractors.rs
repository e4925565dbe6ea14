// src/presentation/http/extractors.rs
use crate::application::validation::{ConstraintViolationSet, ValidationFailureSet};
use axum::{
    Json,
    extract::{FromRequest, FromRequestParts, Path, Query, Request},
    http::request::Parts,
};
use serde::de::DeserializeOwned;
use validator::Validate;

use super::error::HttpError;

/// JSON body that has been deserialized and validated.
///
/// Malformed bodies and rule failures are both reported as a
/// [`ValidationFailureSet`].
#[derive(Debug, Clone)]
pub struct ValidatedJson<T>(pub T);

/// Query string parameters that have been parsed and validated.
#[derive(Debug, Clone)]
pub struct ValidatedQuery<T>(pub T);

/// Path parameters that have been parsed and validated.
#[derive(Debug, Clone)]
pub struct ValidatedPath<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate + Send,
    S: Send + Sync,
{
    type Rejection = HttpError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| {
                tracing::debug!(rejection = %rejection.body_text(), "request body rejected");
                ValidationFailureSet::from_rejection(rejection.body_text())
            })?;

        value.validate().map_err(ValidationFailureSet::from)?;
        Ok(Self(value))
    }
}

impl<T, S> FromRequestParts<S> for ValidatedQuery<T>
where
    T: DeserializeOwned + Validate + Send,
    S: Send + Sync,
{
    type Rejection = HttpError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(value) = Query::<T>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| {
                tracing::debug!(rejection = %rejection.body_text(), "query string rejected");
                ConstraintViolationSet::from_rejection("query", rejection.body_text())
            })?;

        value.validate().map_err(ConstraintViolationSet::from)?;
        Ok(Self(value))
    }
}

impl<T, S> FromRequestParts<S> for ValidatedPath<T>
where
    T: DeserializeOwned + Validate + Send,
    S: Send + Sync,
{
    type Rejection = HttpError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(value) = Path::<T>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| -> HttpError {
                // A route without matching parameters is a wiring bug, not bad input.
                if rejection.status().is_server_error() {
                    tracing::error!(
                        rejection = %rejection.body_text(),
                        "path extractor used without matching route parameters"
                    );
                    return HttpError::from(rejection);
                }
                tracing::debug!(rejection = %rejection.body_text(), "path parameters rejected");
                ConstraintViolationSet::from_rejection("path", rejection.body_text()).into()
            })?;

        value.validate().map_err(ConstraintViolationSet::from)?;
        Ok(Self(value))
    }
}
