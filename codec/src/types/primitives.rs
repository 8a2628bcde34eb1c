//! Codecs for scalar values.
//!
//! Each scalar codec checks only the runtime shape of its input and reports a
//! [ErrorKind::TypeMismatch] otherwise. Absent input (missing or null) is
//! rejected like any other mismatch; wrap in [crate::Optional] or
//! [crate::Defaulted] to accept it.

use crate::{codec::describe, Codec, Context, ErrorKind, Validation, ValidationError};
use serde_json::{Number as JsonNumber, Value};

fn mismatch(raw: Option<&Value>, context: &Context, expected: &str) -> ValidationError {
    ValidationError::new(
        ErrorKind::TypeMismatch,
        raw,
        context,
        format!("Value {} should be {expected}.", describe(raw)),
    )
}

/// Accepts text.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Text;

impl Codec for Text {
    type Decoded = String;
    type Encoded = Value;

    fn name(&self) -> &str {
        "string"
    }

    fn is(&self, raw: Option<&Value>) -> bool {
        matches!(raw, Some(Value::String(_)))
    }

    fn validate(&self, raw: Option<&Value>, context: &Context) -> Validation<String> {
        match raw {
            Some(Value::String(s)) => Ok(s.clone()),
            _ => Err(mismatch(raw, context, "a string").into()),
        }
    }

    fn encode(&self, value: &String) -> Value {
        Value::String(value.clone())
    }
}

/// Accepts numbers representable as a signed 64-bit integer.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Integer;

impl Codec for Integer {
    type Decoded = i64;
    type Encoded = Value;

    fn name(&self) -> &str {
        "integer"
    }

    fn is(&self, raw: Option<&Value>) -> bool {
        matches!(raw, Some(Value::Number(n)) if n.is_i64())
    }

    fn validate(&self, raw: Option<&Value>, context: &Context) -> Validation<i64> {
        match raw.and_then(Value::as_i64) {
            Some(i) => Ok(i),
            None => Err(mismatch(raw, context, "an integer").into()),
        }
    }

    fn encode(&self, value: &i64) -> Value {
        Value::from(*value)
    }
}

/// Accepts any finite number.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Number;

impl Codec for Number {
    type Decoded = f64;
    type Encoded = Value;

    fn name(&self) -> &str {
        "number"
    }

    fn is(&self, raw: Option<&Value>) -> bool {
        matches!(raw, Some(Value::Number(_)))
    }

    fn validate(&self, raw: Option<&Value>, context: &Context) -> Validation<f64> {
        match raw.and_then(Value::as_f64) {
            Some(n) => Ok(n),
            None => Err(mismatch(raw, context, "a number").into()),
        }
    }

    fn encode(&self, value: &f64) -> Value {
        // Non-finite values cannot be produced by validate.
        JsonNumber::from_f64(*value).map_or(Value::Null, Value::Number)
    }
}

/// Accepts `true` or `false`.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Boolean;

impl Codec for Boolean {
    type Decoded = bool;
    type Encoded = Value;

    fn name(&self) -> &str {
        "boolean"
    }

    fn is(&self, raw: Option<&Value>) -> bool {
        matches!(raw, Some(Value::Bool(_)))
    }

    fn validate(&self, raw: Option<&Value>, context: &Context) -> Validation<bool> {
        match raw {
            Some(Value::Bool(b)) => Ok(*b),
            _ => Err(mismatch(raw, context, "a boolean").into()),
        }
    }

    fn encode(&self, value: &bool) -> Value {
        Value::Bool(*value)
    }
}
