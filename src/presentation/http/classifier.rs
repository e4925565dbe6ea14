// src/presentation/http/classifier.rs
//! Maps a failure escaping a request to a status code and an [`ErrorResponse`].
//!
//! Handlers are tried in registration order and the first one that recognises
//! the failure wins. A failure none of them recognise is left to the caller.
use crate::application::{
    ports::time::Clock,
    validation::{ConstraintViolationSet, ValidationFailureSet, extend_messages},
};
use crate::domain::errors::CalculatorError;
use crate::infrastructure::time::SystemClock;
use crate::presentation::http::error::ErrorResponse;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::{DateTime, Utc};
use once_cell::sync::OnceCell;
use std::{error::Error as StdError, sync::Arc};

pub const VALIDATION_MESSAGE: &str = "Validation errors found";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HandledFailure {
    pub status: StatusCode,
    pub body: ErrorResponse,
}

impl IntoResponse for HandledFailure {
    fn into_response(self) -> Response {
        (self.status, Json(self.body)).into_response()
    }
}

pub trait FailureHandler: Send + Sync {
    fn name(&self) -> &'static str;

    /// Returns `None` when the failure is not of the kind this handler owns.
    fn handle(
        &self,
        failure: &(dyn StdError + 'static),
        now: DateTime<Utc>,
    ) -> Option<HandledFailure>;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct DomainFailureHandler;

impl FailureHandler for DomainFailureHandler {
    fn name(&self) -> &'static str {
        "domain"
    }

    fn handle(
        &self,
        failure: &(dyn StdError + 'static),
        now: DateTime<Utc>,
    ) -> Option<HandledFailure> {
        let err = failure.downcast_ref::<CalculatorError>()?;
        Some(HandledFailure {
            status: StatusCode::BAD_REQUEST,
            body: ErrorResponse::at(now, err.message()),
        })
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct ValidationFailureHandler;

impl FailureHandler for ValidationFailureHandler {
    fn name(&self) -> &'static str {
        "validation"
    }

    fn handle(
        &self,
        failure: &(dyn StdError + 'static),
        now: DateTime<Utc>,
    ) -> Option<HandledFailure> {
        let set = failure.downcast_ref::<ValidationFailureSet>()?;
        let mut body = ErrorResponse::at(now, VALIDATION_MESSAGE);
        extend_messages(&mut body.errors, set);
        Some(HandledFailure {
            status: StatusCode::BAD_REQUEST,
            body,
        })
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct ConstraintViolationHandler;

impl FailureHandler for ConstraintViolationHandler {
    fn name(&self) -> &'static str {
        "constraint-violation"
    }

    fn handle(
        &self,
        failure: &(dyn StdError + 'static),
        now: DateTime<Utc>,
    ) -> Option<HandledFailure> {
        let set = failure.downcast_ref::<ConstraintViolationSet>()?;
        let mut body = ErrorResponse::at(now, VALIDATION_MESSAGE);
        extend_messages(&mut body.errors, set);
        Some(HandledFailure {
            status: StatusCode::BAD_REQUEST,
            body,
        })
    }
}

/// Ordered set of failure handlers sharing one clock.
///
/// Holds no per-request data and is safe to share across requests.
pub struct HandlerRegistry {
    clock: Arc<dyn Clock>,
    handlers: Vec<Box<dyn FailureHandler>>,
}

impl HandlerRegistry {
    /// Domain, then body validation, then parameter constraints.
    #[must_use]
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self {
            clock,
            handlers: vec![
                Box::new(DomainFailureHandler),
                Box::new(ValidationFailureHandler),
                Box::new(ConstraintViolationHandler),
            ],
        }
    }

    #[must_use]
    pub fn empty(clock: Arc<dyn Clock>) -> Self {
        Self {
            clock,
            handlers: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_handler(mut self, handler: impl FailureHandler + 'static) -> Self {
        self.handlers.push(Box::new(handler));
        self
    }

    #[must_use]
    pub fn handler_names(&self) -> Vec<&'static str> {
        self.handlers.iter().map(|h| h.name()).collect()
    }

    /// `None` means the failure is unclassified.
    #[must_use]
    pub fn classify(&self, failure: &(dyn StdError + 'static)) -> Option<HandledFailure> {
        let now = self.clock.now();
        self.handlers
            .iter()
            .find_map(|handler| handler.handle(failure, now))
    }
}

impl Default for HandlerRegistry {
    fn default() -> Self {
        Self::new(Arc::new(SystemClock))
    }
}

impl std::fmt::Debug for HandlerRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HandlerRegistry")
            .field("handlers", &self.handler_names())
            .finish_non_exhaustive()
    }
}

static REGISTRY: OnceCell<HandlerRegistry> = OnceCell::new();

/// Install the registry used at the HTTP boundary.
///
/// Call once during bootstrap, before the first request is served.
///
/// # Errors
///
/// Hands the registry back when one is already active, either because it was
/// installed earlier or because a failure was already rendered with the
/// default registry.
pub fn install_registry(registry: HandlerRegistry) -> Result<(), HandlerRegistry> {
    REGISTRY.set(registry)
}

/// Registry used when an [`HttpError`](super::error::HttpError) becomes a
/// response. Falls back to [`HandlerRegistry::default`] when the host has not
/// installed one.
#[must_use]
pub fn active_registry() -> &'static HandlerRegistry {
    REGISTRY.get_or_init(HandlerRegistry::default)
}
