//! Core codec traits

use crate::{context::Context, error::Errors};
use serde_json::Value;
use tracing::{debug, trace};

/// Outcome of validating a raw value: the decoded value or every failure found.
pub type Validation<T> = Result<T, Errors>;

/// Trait for encoded representations that may be absent.
///
/// Absence is how an optional value that was never supplied is written back:
/// records drop the key and sequences write `null`.
pub trait Emit {
    /// Converts into a raw value, returning `None` when absent.
    fn emit(self) -> Option<Value>;
}

impl Emit for Value {
    #[inline]
    fn emit(self) -> Option<Value> {
        Some(self)
    }
}

impl<T: Emit> Emit for Option<T> {
    #[inline]
    fn emit(self) -> Option<Value> {
        self.and_then(Emit::emit)
    }
}

/// Trait for types that validate untyped input into a typed value and encode it back.
///
/// Raw input is `None` when the key was missing from its parent and `Some(&Value::Null)`
/// when it was explicitly null.
///
/// Codecs are immutable once constructed and may be shared freely across threads.
pub trait Codec: Send + Sync {
    /// The typed domain value produced by a successful validation.
    type Decoded;

    /// The representation produced by [Codec::encode].
    type Encoded: Emit;

    /// Name used in error messages and introspection.
    fn name(&self) -> &str;

    /// Returns true if `raw` already conforms to this codec.
    ///
    /// For every `a` produced by a successful [Codec::validate], `is(encode(a))` holds.
    fn is(&self, raw: Option<&Value>) -> bool;

    /// Validates `raw` at `context`, returning the decoded value or all failures.
    fn validate(&self, raw: Option<&Value>, context: &Context) -> Validation<Self::Decoded>;

    /// Encodes a decoded value. Never fails.
    fn encode(&self, value: &Self::Decoded) -> Self::Encoded;

    /// Name under which this codec is registered as a definition, if any.
    fn definition_name(&self) -> Option<&str> {
        None
    }
}

/// Validates `raw` with `codec`, starting from a root context.
pub fn decode<C: Codec + ?Sized>(codec: &C, raw: Option<&Value>) -> Validation<C::Decoded> {
    let context = Context::root(codec.name());
    let result = codec.validate(raw, &context);
    match &result {
        Ok(_) => trace!(codec = codec.name(), "validated"),
        Err(errors) => debug!(
            codec = codec.name(),
            errors = errors.len(),
            "validation failed"
        ),
    }
    result
}

/// Encodes `value` with `codec` into a raw value (`None` when absent).
pub fn encode<C: Codec + ?Sized>(codec: &C, value: &C::Decoded) -> Option<Value> {
    codec.encode(value).emit()
}

/// Returns true if `raw` is absent (missing or null).
#[inline]
pub fn is_absent(raw: Option<&Value>) -> bool {
    matches!(raw, None | Some(Value::Null))
}

/// Renders a raw value for use in messages.
///
/// Strings are rendered without quotes and missing values as `undefined`.
pub(crate) fn describe(raw: Option<&Value>) -> String {
    match raw {
        None => "undefined".to_string(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_emit() {
        assert_eq!(json!(1).emit(), Some(json!(1)));
        assert_eq!(Some(json!("a")).emit(), Some(json!("a")));
        assert_eq!(None::<Value>.emit(), None);
        assert_eq!(Some(None::<Value>).emit(), None);
    }

    #[test]
    fn test_is_absent() {
        assert!(is_absent(None));
        assert!(is_absent(Some(&Value::Null)));
        assert!(!is_absent(Some(&json!(0))));
        assert!(!is_absent(Some(&json!(""))));
    }

    #[test]
    fn test_describe() {
        assert_eq!(describe(None), "undefined");
        assert_eq!(describe(Some(&json!("not-a-cidr"))), "not-a-cidr");
        assert_eq!(describe(Some(&json!(42))), "42");
        assert_eq!(describe(Some(&json!(null))), "null");
        assert_eq!(describe(Some(&json!([1, 2]))), "[1,2]");
    }
}
