//! Restricts input to a fixed set of literal values.

use crate::{Codec, Context, ErrorKind, Validation, ValidationError};
use serde_json::Value;
use std::fmt::Display;

/// Trait for literal values that can appear in an [Enum].
pub trait Literal: Clone + Display + Send + Sync {
    /// Returns true if `raw` is exactly this literal.
    fn matches(&self, raw: &Value) -> bool;

    /// Raw representation of this literal.
    fn to_value(&self) -> Value;
}

impl Literal for &'static str {
    fn matches(&self, raw: &Value) -> bool {
        raw.as_str() == Some(*self)
    }

    fn to_value(&self) -> Value {
        Value::String((*self).to_string())
    }
}

impl Literal for String {
    fn matches(&self, raw: &Value) -> bool {
        raw.as_str() == Some(self.as_str())
    }

    fn to_value(&self) -> Value {
        Value::String(self.clone())
    }
}

macro_rules! impl_literal_int {
    ($($type:ty),*) => {
        $(
            impl Literal for $type {
                fn matches(&self, raw: &Value) -> bool {
                    match raw {
                        Value::Number(n) => {
                            n.as_i64().is_some_and(|v| i128::from(v) == i128::from(*self))
                                || n.as_u64().is_some_and(|v| i128::from(v) == i128::from(*self))
                        }
                        _ => false,
                    }
                }

                fn to_value(&self) -> Value {
                    Value::from(*self)
                }
            }
        )*
    };
}

impl_literal_int!(i8, i16, i32, i64, u8, u16, u32, u64);

/// Accepts exactly one of an ordered list of literal values.
///
/// Decoding yields the matching member; encoding is the identity.
#[derive(Clone, Debug)]
pub struct Enum<L> {
    name: String,
    values: Vec<L>,
    message: Option<String>,
}

impl<L: Literal> Enum<L> {
    /// Creates an enum named `name` accepting `values` (in declaration order).
    pub fn new(name: impl Into<String>, values: impl IntoIterator<Item = L>) -> Self {
        Self {
            name: name.into(),
            values: values.into_iter().collect(),
            message: None,
        }
    }

    /// Reports `message` instead of the generated message on failure.
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Allowed values in declaration order.
    pub fn values(&self) -> &[L] {
        &self.values
    }

    fn find(&self, raw: Option<&Value>) -> Option<&L> {
        let raw = raw?;
        self.values.iter().find(|v| v.matches(raw))
    }

    fn message(&self) -> String {
        if let Some(message) = &self.message {
            return message.clone();
        }
        let allowed = self
            .values
            .iter()
            .map(|v| format!("\"{v}\""))
            .collect::<Vec<_>>()
            .join(", ");
        format!("Value should be one of {allowed}")
    }
}

impl<L: Literal> Codec for Enum<L> {
    type Decoded = L;
    type Encoded = Value;

    fn name(&self) -> &str {
        &self.name
    }

    fn is(&self, raw: Option<&Value>) -> bool {
        self.find(raw).is_some()
    }

    fn validate(&self, raw: Option<&Value>, context: &Context) -> Validation<L> {
        match self.find(raw) {
            Some(value) => Ok(value.clone()),
            None => Err(ValidationError::new(
                ErrorKind::ConstraintViolation,
                raw,
                context,
                self.message(),
            )
            .into()),
        }
    }

    fn encode(&self, value: &L) -> Value {
        value.to_value()
    }
}
