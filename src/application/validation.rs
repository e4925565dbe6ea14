// src/application/validation.rs
//! Failure sets produced by request validation and the aggregator that
//! flattens them into the `errors` list of an error response.
//!
//! Two sets exist because the boundary reports them differently: a
//! [`ValidationFailureSet`] describes a request body that failed its declared
//! rules, while a [`ConstraintViolationSet`] describes query or path
//! parameters that did. Both are built from `validator::ValidationErrors`.
use thiserror::Error;
use validator::{ValidationErrors, ValidationErrorsKind};

/// Anything that can contribute one line to an error response.
pub trait FailureDescriptor {
    /// Display message, or `None` when the failure carries no message.
    fn message(&self) -> Option<&str>;
}

/// Append one entry per descriptor that has a message, in iteration order.
///
/// Messages are copied verbatim and duplicates are kept. Descriptors without
/// a message contribute nothing.
pub fn extend_messages<'a, D>(
    target: &mut Vec<String>,
    failures: impl IntoIterator<Item = &'a D>,
) where
    D: FailureDescriptor + 'a,
{
    target.extend(
        failures
            .into_iter()
            .filter_map(|failure| failure.message())
            .map(str::to_owned),
    );
}

#[must_use]
pub fn aggregate_messages<'a, D>(failures: impl IntoIterator<Item = &'a D>) -> Vec<String>
where
    D: FailureDescriptor + 'a,
{
    let mut messages = Vec::new();
    extend_messages(&mut messages, failures);
    messages
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldFailure {
    pub field: String,
    pub message: Option<String>,
}

impl FieldFailure {
    #[must_use]
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: Some(message.into()),
        }
    }

    #[must_use]
    pub fn without_message(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: None,
        }
    }
}

impl FailureDescriptor for FieldFailure {
    fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}

/// Field-level failures on a bound request body.
#[derive(Debug, Clone, Default, PartialEq, Eq, Error)]
#[error("request body failed validation on {} field(s)", .failures.len())]
pub struct ValidationFailureSet {
    failures: Vec<FieldFailure>,
}

impl ValidationFailureSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A body that could not be bound at all (bad JSON, wrong content type).
    #[must_use]
    pub fn from_rejection(text: impl Into<String>) -> Self {
        Self {
            failures: vec![FieldFailure::new("body", text)],
        }
    }

    #[must_use]
    pub fn iter(&self) -> std::slice::Iter<'_, FieldFailure> {
        self.failures.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.failures.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.failures.is_empty()
    }
}

impl From<Vec<FieldFailure>> for ValidationFailureSet {
    fn from(failures: Vec<FieldFailure>) -> Self {
        Self { failures }
    }
}

impl FromIterator<FieldFailure> for ValidationFailureSet {
    fn from_iter<I: IntoIterator<Item = FieldFailure>>(iter: I) -> Self {
        Self {
            failures: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a ValidationFailureSet {
    type Item = &'a FieldFailure;
    type IntoIter = std::slice::Iter<'a, FieldFailure>;

    fn into_iter(self) -> Self::IntoIter {
        self.failures.iter()
    }
}

impl From<ValidationErrors> for ValidationFailureSet {
    fn from(errors: ValidationErrors) -> Self {
        flatten(&errors)
            .into_iter()
            .map(|(field, message)| FieldFailure::new(field, message))
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConstraintViolation {
    pub path: String,
    pub message: Option<String>,
}

impl ConstraintViolation {
    #[must_use]
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: Some(message.into()),
        }
    }

    #[must_use]
    pub fn without_message(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: None,
        }
    }
}

impl FailureDescriptor for ConstraintViolation {
    fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}

/// Constraint violations on query or path parameters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Error)]
#[error("request parameters violated {} constraint(s)", .violations.len())]
pub struct ConstraintViolationSet {
    violations: Vec<ConstraintViolation>,
}

impl ConstraintViolationSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parameters that could not be parsed into the target type.
    #[must_use]
    pub fn from_rejection(path: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            violations: vec![ConstraintViolation::new(path, text)],
        }
    }

    #[must_use]
    pub fn iter(&self) -> std::slice::Iter<'_, ConstraintViolation> {
        self.violations.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.violations.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }
}

impl From<Vec<ConstraintViolation>> for ConstraintViolationSet {
    fn from(violations: Vec<ConstraintViolation>) -> Self {
        Self { violations }
    }
}

impl FromIterator<ConstraintViolation> for ConstraintViolationSet {
    fn from_iter<I: IntoIterator<Item = ConstraintViolation>>(iter: I) -> Self {
        Self {
            violations: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a ConstraintViolationSet {
    type Item = &'a ConstraintViolation;
    type IntoIter = std::slice::Iter<'a, ConstraintViolation>;

    fn into_iter(self) -> Self::IntoIter {
        self.violations.iter()
    }
}

impl From<ValidationErrors> for ConstraintViolationSet {
    fn from(errors: ValidationErrors) -> Self {
        flatten(&errors)
            .into_iter()
            .map(|(path, message)| ConstraintViolation::new(path, message))
            .collect()
    }
}

/// Walk a validator report into `(path, message)` pairs.
///
/// validator keys its report by a hash map, so fields are visited in sorted
/// path order. Errors recorded against one field keep validator's order.
/// The message is validator's display text: the custom `message` when the
/// rule sets one, otherwise `Validation error: <code> [<params>]`.
fn flatten(errors: &ValidationErrors) -> Vec<(String, String)> {
    let mut out = Vec::new();
    flatten_into(errors, "", &mut out);
    out
}

fn flatten_into(errors: &ValidationErrors, prefix: &str, out: &mut Vec<(String, String)>) {
    let mut entries: Vec<_> = errors.errors().iter().collect();
    entries.sort_by(|(left, _), (right, _)| left.cmp(right));

    for (name, kind) in entries {
        let path = if prefix.is_empty() {
            name.to_string()
        } else {
            format!("{prefix}.{name}")
        };

        match kind {
            ValidationErrorsKind::Field(list) => {
                out.extend(list.iter().map(|err| (path.clone(), err.to_string())));
            }
            ValidationErrorsKind::Struct(inner) => flatten_into(inner, &path, out),
            ValidationErrorsKind::List(items) => {
                for (index, inner) in items {
                    flatten_into(inner, &format!("{path}[{index}]"), out);
                }
            }
        }
    }
}
