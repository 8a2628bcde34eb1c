//! Constrains the size of a decoded value.

use crate::{size::Measure, Codec, Context, ErrorKind, SizeCfg, Validation, ValidationError};
use serde_json::Value;

/// Wraps `T`, requiring the size of the decoded value to fall within [SizeCfg].
///
/// The size is only checked once `T` has accepted the value; failures of `T`
/// are returned untouched. Encoding does not re-check the size.
///
/// # Panics
///
/// Validation panics if the decoded value cannot be measured (see
/// [crate::size]), which indicates a schema-definition bug. Every number,
/// fractional or not, can be measured.
#[derive(Clone, Debug)]
pub struct Bounded<T> {
    inner: T,
    cfg: SizeCfg,
}

impl<T: Codec> Bounded<T>
where
    T::Decoded: Measure,
{
    pub fn new(inner: T, cfg: impl Into<SizeCfg>) -> Self {
        Self {
            inner,
            cfg: cfg.into(),
        }
    }

    pub fn inner(&self) -> &T {
        &self.inner
    }

    pub fn cfg(&self) -> &SizeCfg {
        &self.cfg
    }
}

impl<T: Codec> Codec for Bounded<T>
where
    T::Decoded: Measure,
{
    type Decoded = T::Decoded;
    type Encoded = T::Encoded;

    fn name(&self) -> &str {
        self.inner.name()
    }

    fn is(&self, raw: Option<&Value>) -> bool {
        self.inner.is(raw)
    }

    fn validate(&self, raw: Option<&Value>, context: &Context) -> Validation<T::Decoded> {
        let value = self.inner.validate(raw, context)?;
        let size = value
            .size()
            .unwrap_or_else(|err| panic!("{} cannot be sized: {err}", self.inner.name()));
        if !self.cfg.contains(size) {
            return Err(ValidationError::new(
                ErrorKind::ConstraintViolation,
                raw,
                context,
                self.cfg.message(),
            )
            .into());
        }
        Ok(value)
    }

    fn encode(&self, value: &T::Decoded) -> T::Encoded {
        self.inner.encode(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{decode, encode, non_empty, Integer, List, Number, Optional, Text};
    use serde_json::json;
    use test_case::test_case;

    #[test]
    fn test_non_empty() {
        let codec = non_empty(Text);
        let errors = decode(&codec, Some(&json!(""))).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.first().message(), "Value can not be empty.");
        assert_eq!(errors.first().kind(), ErrorKind::ConstraintViolation);
        assert_eq!(errors.first().value(), Some(&json!("")));

        assert_eq!(decode(&codec, Some(&json!("a"))).unwrap(), "a");
    }

    #[test_case(json!(""), false; "below")]
    #[test_case(json!("ab"), true; "at min")]
    #[test_case(json!("abcd"), true; "at max")]
    #[test_case(json!("abcde"), false; "above")]
    fn test_text_bounds(raw: Value, ok: bool) {
        let codec = Bounded::new(Text, 2..=4);
        let result = decode(&codec, Some(&raw));
        assert_eq!(result.is_ok(), ok);
        if let Err(errors) = result {
            assert_eq!(errors.first().message(), "Value should be of size [2, 4]");
        }
    }

    #[test]
    fn test_number_bounds() {
        let codec = Bounded::new(Integer, ..=30);
        assert_eq!(decode(&codec, Some(&json!(30))).unwrap(), 30);
        assert_eq!(decode(&codec, Some(&json!(-100))).unwrap(), -100);
        let errors = decode(&codec, Some(&json!(31))).unwrap_err();
        assert_eq!(errors.first().message(), "Value should be of size [-∞, 30]");
    }

    #[test_case(2.5, true; "fraction inside")]
    #[test_case(1.0, true; "at min")]
    #[test_case(10.0, true; "at max")]
    #[test_case(0.5, false; "fraction below")]
    #[test_case(10.5, false; "fraction above")]
    #[test_case(-1e300, false; "far below")]
    fn test_fractional_bounds(raw: f64, ok: bool) {
        let codec = Bounded::new(Number, 1..=10);
        match decode(&codec, Some(&json!(raw))) {
            Ok(value) => {
                assert!(ok);
                assert_eq!(value, raw);
            }
            Err(errors) => {
                assert!(!ok);
                assert_eq!(errors.len(), 1);
                assert_eq!(errors.first().kind(), ErrorKind::ConstraintViolation);
                assert_eq!(errors.first().message(), "Value should be of size [1, 10]");
            }
        }
    }

    #[test]
    fn test_list_bounds() {
        let codec = Bounded::new(List::new(Integer), 1..);
        assert_eq!(decode(&codec, Some(&json!([1]))).unwrap(), vec![1]);
        let errors = decode(&codec, Some(&json!([]))).unwrap_err();
        assert_eq!(errors.first().message(), "Value should be of size [1, ∞]");
    }

    #[test]
    fn test_unbounded() {
        let codec = Bounded::new(Text, ..);
        assert!(decode(&codec, Some(&json!(""))).is_ok());
    }

    #[test]
    fn test_inner_failure_untouched() {
        // Size is not checked on a value the inner codec rejected
        let codec = Bounded::new(List::new(Text), 5..);
        let errors = decode(&codec, Some(&json!([1, 2]))).unwrap_err();
        assert_eq!(errors.len(), 2);
        assert!(errors
            .iter()
            .all(|e| e.kind() == ErrorKind::TypeMismatch));
    }

    #[test]
    fn test_custom_message() {
        let codec = Bounded::new(Text, SizeCfg::from(..=3).with_message("Too long."));
        let errors = decode(&codec, Some(&json!("abcd"))).unwrap_err();
        assert_eq!(errors.first().message(), "Too long.");
    }

    #[test]
    fn test_encode_skips_check() {
        let codec = non_empty(Text);
        assert_eq!(encode(&codec, &String::new()), Some(json!("")));
    }

    #[test]
    fn test_optional_sized() {
        let codec = Optional::new(non_empty(Text));
        assert_eq!(decode(&codec, None).unwrap(), None);
        assert!(decode(&codec, Some(&json!(""))).is_err());
    }

    #[test]
    #[should_panic(expected = "cannot be sized")]
    fn test_unsupported_size_panics() {
        struct Anything;
        impl Codec for Anything {
            type Decoded = Value;
            type Encoded = Value;
            fn name(&self) -> &str {
                "unknown"
            }
            fn is(&self, raw: Option<&Value>) -> bool {
                raw.is_some()
            }
            fn validate(&self, raw: Option<&Value>, _: &Context) -> Validation<Value> {
                Ok(raw.cloned().unwrap_or(Value::Null))
            }
            fn encode(&self, value: &Value) -> Value {
                value.clone()
            }
        }

        let codec = Bounded::new(Anything, 1..);
        let _ = decode(&codec, Some(&json!(true)));
    }

    #[test]
    fn test_round_trip() {
        let codec = Bounded::new(Text, 1..=8);
        let decoded = decode(&codec, Some(&json!("abc"))).unwrap();
        let encoded = encode(&codec, &decoded);
        assert_eq!(decode(&codec, encoded.as_ref()).unwrap(), decoded);
    }
}
