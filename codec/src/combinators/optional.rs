//! Accepts absent input as "no value".

use crate::{codec::is_absent, Codec, Context, Validation};
use serde_json::Value;

/// Wraps `T`, decoding absent input (missing or null) to `None`.
///
/// Unlike [crate::Defaulted], no value is ever fabricated: callers must handle
/// `None`. Encoding `None` yields the absent representation without consulting
/// `T`.
#[derive(Clone, Debug)]
pub struct Optional<T> {
    inner: T,
    name: String,
}

impl<T: Codec> Optional<T> {
    pub fn new(inner: T) -> Self {
        let name = format!("{} | undefined", inner.name());
        Self { inner, name }
    }

    pub fn inner(&self) -> &T {
        &self.inner
    }
}

impl<T: Codec> Codec for Optional<T> {
    type Decoded = Option<T::Decoded>;
    type Encoded = Option<T::Encoded>;

    fn name(&self) -> &str {
        &self.name
    }

    fn is(&self, raw: Option<&Value>) -> bool {
        is_absent(raw) || self.inner.is(raw)
    }

    fn validate(&self, raw: Option<&Value>, context: &Context) -> Validation<Self::Decoded> {
        if is_absent(raw) {
            return Ok(None);
        }
        self.inner.validate(raw, context).map(Some)
    }

    fn encode(&self, value: &Self::Decoded) -> Self::Encoded {
        value.as_ref().map(|v| self.inner.encode(v))
    }
}
