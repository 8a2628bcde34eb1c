//! Codec for homogeneous sequences.

use crate::{
    codec::{describe, Emit},
    error::merge,
    Codec, Context, ErrorKind, Errors, Validation, ValidationError,
};
use serde_json::Value;

/// Accepts an array whose every element is accepted by `T`.
///
/// Failures from all elements are collected; each is annotated with the
/// element index.
#[derive(Clone, Debug)]
pub struct List<T> {
    inner: T,
    name: String,
}

impl<T: Codec> List<T> {
    pub fn new(inner: T) -> Self {
        let name = format!("Array<{}>", inner.name());
        Self { inner, name }
    }

    pub fn inner(&self) -> &T {
        &self.inner
    }
}

impl<T: Codec> Codec for List<T> {
    type Decoded = Vec<T::Decoded>;
    type Encoded = Value;

    fn name(&self) -> &str {
        &self.name
    }

    fn is(&self, raw: Option<&Value>) -> bool {
        match raw {
            Some(Value::Array(items)) => items.iter().all(|item| self.inner.is(Some(item))),
            _ => false,
        }
    }

    fn validate(&self, raw: Option<&Value>, context: &Context) -> Validation<Self::Decoded> {
        let Some(Value::Array(items)) = raw else {
            return Err(ValidationError::new(
                ErrorKind::TypeMismatch,
                raw,
                context,
                format!("Value {} should be an array.", describe(raw)),
            )
            .into());
        };

        let mut decoded = Vec::with_capacity(items.len());
        let mut failures: Option<Errors> = None;
        for (i, item) in items.iter().enumerate() {
            let child = context.index(i, self.inner.name());
            match self.inner.validate(Some(item), &child) {
                Ok(value) => decoded.push(value),
                Err(errors) => merge(&mut failures, errors),
            }
        }
        match failures {
            Some(errors) => Err(errors),
            None => Ok(decoded),
        }
    }

    fn encode(&self, value: &Self::Decoded) -> Value {
        Value::Array(
            value
                .iter()
                .map(|item| self.inner.encode(item).emit().unwrap_or(Value::Null))
                .collect(),
        )
    }
}
