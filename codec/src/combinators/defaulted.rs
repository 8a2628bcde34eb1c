//! Substitutes a fixed value for absent input.

use crate::{codec::is_absent, Codec, Context, Validation};
use serde_json::Value;
use tracing::trace;

/// Wraps `T`, decoding absent input (missing or null) to a fixed default.
///
/// The default is trusted: it is returned as-is without running the inner
/// codec's validation. Absent input is therefore always accepted, by both
/// [Codec::is] and [Codec::validate]. Present input is delegated to `T` unchanged, and
/// encoding always goes through `T` (the default is not hidden on output).
#[derive(Clone, Debug)]
pub struct Defaulted<T: Codec> {
    inner: T,
    default: T::Decoded,
}

impl<T: Codec> Defaulted<T> {
    pub fn new(inner: T, default: T::Decoded) -> Self {
        Self { inner, default }
    }

    pub fn inner(&self) -> &T {
        &self.inner
    }

    pub fn default_value(&self) -> &T::Decoded {
        &self.default
    }
}

impl<T> Codec for Defaulted<T>
where
    T: Codec,
    T::Decoded: Clone + Send + Sync,
{
    type Decoded = T::Decoded;
    type Encoded = T::Encoded;

    fn name(&self) -> &str {
        self.inner.name()
    }

    fn is(&self, raw: Option<&Value>) -> bool {
        is_absent(raw) || self.inner.is(raw)
    }

    fn validate(&self, raw: Option<&Value>, context: &Context) -> Validation<T::Decoded> {
        if is_absent(raw) {
            trace!(path = %context.path(), codec = self.name(), "using default");
            return Ok(self.default.clone());
        }
        self.inner.validate(raw, context)
    }

    fn encode(&self, value: &T::Decoded) -> T::Encoded {
        self.inner.encode(value)
    }
}
