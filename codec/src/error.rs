//! Error types for validation

use crate::context::Context;
use serde_json::Value;
use std::fmt;
use thiserror::Error;

/// Classification of a validation failure.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum ErrorKind {
    /// The raw value has the wrong shape for the codec (e.g. a number where text was expected).
    TypeMismatch,
    /// The value is well-typed but violates a size or membership constraint.
    ConstraintViolation,
    /// The value is text but could not be parsed into the target domain value.
    ParseFailure,
}

/// A single failure, annotated with the path that led to the offending value.
#[derive(Error, Clone, Debug, PartialEq)]
#[error("{}", render(.context, .message))]
pub struct ValidationError {
    kind: ErrorKind,
    value: Option<Value>,
    context: Context,
    message: String,
}

fn render(context: &Context, message: &str) -> String {
    let path = context.path();
    if path.is_empty() {
        return message.to_string();
    }
    format!("{path}: {message}")
}

impl ValidationError {
    /// Creates a new error for `value` (`None` when the key was missing) at `context`.
    pub fn new(
        kind: ErrorKind,
        value: Option<&Value>,
        context: &Context,
        message: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            value: value.cloned(),
            context: context.clone(),
            message: message.into(),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// The offending raw value, or `None` if the key was missing.
    pub fn value(&self) -> Option<&Value> {
        self.value.as_ref()
    }

    pub fn context(&self) -> &Context {
        &self.context
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Dotted/bracketed location of the offending value (e.g. `rules[2].expiry`).
    pub fn path(&self) -> String {
        self.context.path()
    }
}

/// A non-empty, ordered collection of [ValidationError]s.
#[derive(Clone, Debug, PartialEq)]
pub struct Errors(Vec<ValidationError>);

impl Errors {
    /// Returns the errors in the order they were reported.
    pub fn iter(&self) -> impl Iterator<Item = &ValidationError> {
        self.0.iter()
    }

    /// Number of errors (always at least one).
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always `false`; present for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// The first error reported.
    pub fn first(&self) -> &ValidationError {
        &self.0[0]
    }

    /// Appends all errors of `other`, preserving order.
    pub fn extend(&mut self, other: Errors) {
        self.0.extend(other.0);
    }

    pub fn into_vec(self) -> Vec<ValidationError> {
        self.0
    }
}

/// Merges `errors` into `slot`, preserving the order failures were found in.
pub(crate) fn merge(slot: &mut Option<Errors>, errors: Errors) {
    match slot {
        Some(existing) => existing.extend(errors),
        None => *slot = Some(errors),
    }
}

impl From<ValidationError> for Errors {
    fn from(error: ValidationError) -> Self {
        Self(vec![error])
    }
}

impl TryFrom<Vec<ValidationError>> for Errors {
    type Error = ();

    fn try_from(errors: Vec<ValidationError>) -> Result<Self, ()> {
        if errors.is_empty() {
            return Err(());
        }
        Ok(Self(errors))
    }
}

impl IntoIterator for Errors {
    type Item = ValidationError;
    type IntoIter = std::vec::IntoIter<ValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl fmt::Display for Errors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, error) in self.0.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{error}")?;
        }
        Ok(())
    }
}

impl std::error::Error for Errors {}

/// The size function was applied to a shape it cannot measure.
///
/// This indicates a schema-definition bug rather than bad input.
#[derive(Error, Clone, Debug, Eq, PartialEq)]
#[error("unsupported size: cannot measure {0}")]
pub struct UnsupportedSize(pub String);

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_display_with_path() {
        let context = Context::root("Config").field("rules", "Rules").index(2, "Rule");
        let error = ValidationError::new(
            ErrorKind::ConstraintViolation,
            Some(&json!("")),
            &context,
            "Value can not be empty.",
        );
        assert_eq!(error.path(), "rules[2]");
        assert_eq!(error.to_string(), "rules[2]: Value can not be empty.");
    }

    #[test]
    fn test_display_at_root() {
        let error = ValidationError::new(
            ErrorKind::TypeMismatch,
            None,
            &Context::root("string"),
            "Value undefined should be a string.",
        );
        assert_eq!(error.to_string(), "Value undefined should be a string.");
        assert!(error.value().is_none());
    }

    #[test]
    fn test_errors_non_empty() {
        assert!(Errors::try_from(Vec::new()).is_err());

        let context = Context::root("x");
        let a = ValidationError::new(ErrorKind::TypeMismatch, None, &context, "a");
        let b = ValidationError::new(ErrorKind::TypeMismatch, None, &context, "b");
        let mut errors = Errors::from(a);
        errors.extend(Errors::from(b));
        assert_eq!(errors.len(), 2);
        assert_eq!(errors.first().message(), "a");
        assert_eq!(errors.to_string(), "a\nb");
    }
}
