// src/presentation/http/error.rs
use crate::domain::errors::DomainResult;
use crate::presentation::http::classifier::active_registry;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::error::Error as StdError;
use utoipa::ToSchema;

/// Body returned for every classified failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// When the response was built (RFC 3339).
    pub timestamp: DateTime<Utc>,
    /// Short summary of the failure category.
    pub message: String,
    /// One entry per individual failure; empty for a plain domain error.
    #[serde(default)]
    pub errors: Vec<String>,
}

impl ErrorResponse {
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self::at(Utc::now(), message)
    }

    #[must_use]
    pub fn at(timestamp: DateTime<Utc>, message: impl Into<String>) -> Self {
        Self {
            timestamp,
            message: message.into(),
            errors: Vec::new(),
        }
    }

    pub fn push_error(&mut self, error: impl Into<String>) {
        self.errors.push(error.into());
    }
}

/// A failure that escaped a handler or extractor.
///
/// Any `std::error::Error` converts into it, so handlers can use `?` on
/// domain results and validation reports alike. The response is decided by
/// the handler registry when the error is turned into a response.
#[derive(Debug)]
pub struct HttpError(Box<dyn StdError + Send + Sync + 'static>);

impl HttpError {
    #[must_use]
    pub fn from_error<E>(err: E) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        Self(Box::new(err))
    }

    #[must_use]
    pub fn inner(&self) -> &(dyn StdError + Send + Sync + 'static) {
        self.0.as_ref()
    }
}

impl<E> From<E> for HttpError
where
    E: StdError + Send + Sync + 'static,
{
    fn from(err: E) -> Self {
        Self::from_error(err)
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        match active_registry().classify(self.inner()) {
            Some(handled) => {
                tracing::debug!(
                    status = handled.status.as_u16(),
                    summary = %handled.body.message,
                    entries = handled.body.errors.len(),
                    "request failure classified"
                );
                handled.into_response()
            }
            None => {
                // No ErrorResponse for unclassified failures; the host's
                // default behaviour applies.
                tracing::error!(error = %self.0, "unclassified request failure");
                StatusCode::INTERNAL_SERVER_ERROR.into_response()
            }
        }
    }
}

pub type HttpResult<T> = Result<T, HttpError>;

pub trait IntoHttpResult<T> {
    fn into_http(self) -> HttpResult<T>;
}

impl<T> IntoHttpResult<T> for DomainResult<T> {
    fn into_http(self) -> HttpResult<T> {
        self.map_err(HttpError::from_error)
    }
}
