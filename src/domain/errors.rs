// src/domain/errors.rs
use thiserror::Error;

pub const DEFAULT_MESSAGE: &str = "Unexpected error in Calculator!";

pub type DomainResult<T> = Result<T, CalculatorError>;

/// Raised by business logic when a request is semantically invalid.
///
/// Carries only a message. Callers that need per-field detail report a
/// [`ValidationFailureSet`](crate::application::validation::ValidationFailureSet)
/// instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct CalculatorError {
    message: String,
}

impl CalculatorError {
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl Default for CalculatorError {
    fn default() -> Self {
        Self::new(DEFAULT_MESSAGE)
    }
}
