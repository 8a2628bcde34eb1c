//! Validate untyped configuration trees into typed values.
//!
//! # Overview
//!
//! A library of composable codecs designed to:
//! - Validate untrusted, untyped input (e.g. a parsed configuration document) into typed values
//! - Report every problem found in one pass, each annotated with its location
//! - Encode typed values back into the untyped representation
//!
//! Input is a [serde_json::Value] tree. A key that is missing from its parent
//! is passed as `None`; an explicit `null` is passed as `Some(&Value::Null)`.
//!
//! # Supported Codecs
//!
//! - Scalars: [Text], [Integer], [Number], [Boolean]
//! - Network ranges: [Cidr] (IPv4 CIDR notation, decoded into [NetworkRange])
//! - Structures: [List], [Record], and named [Definition]s
//! - Wrappers: [Defaulted], [Optional], [Bounded] (size limits), and [Enum] (literal values)
//!
//! User-defined codecs can be composed with these by implementing the [Codec] trait.
//!
//! # Example
//!
//! ```
//! use confcodec::{
//!     cidr, decode, defaulted, definition, enumeration, non_empty, optional, Fields, Integer,
//!     List, Text,
//! };
//! use serde_json::json;
//!
//! let rule = definition(
//!     "Rule",
//!     Fields::new()
//!         .with("name", non_empty(Text))
//!         .with("effect", defaulted(enumeration("Effect", ["allow", "deny"]), "deny"))
//!         .with("sources", optional(List::new(cidr())))
//!         .with("priority", Integer),
//! );
//!
//! // Valid input is normalized
//! let raw = json!({"name": "office", "sources": ["10.1.2.3/16"], "priority": 1});
//! let decoded = decode(&rule, Some(&raw)).unwrap();
//! assert_eq!(decoded["effect"], json!("deny"));
//! assert_eq!(decoded["sources"], json!(["10.1.0.0/16"]));
//!
//! // Every failure is reported with its location
//! let raw = json!({"name": "", "effect": "maybe", "sources": ["nope"]});
//! let errors = decode(&rule, Some(&raw)).unwrap_err();
//! assert_eq!(
//!     errors.to_string(),
//!     [
//!         "name: Value can not be empty.",
//!         "effect: Value should be one of \"allow\", \"deny\"",
//!         "sources[0]: Value nope should be a CIDR range.",
//!         "priority: Value undefined should be an integer.",
//!     ]
//!     .join("\n")
//! );
//! ```

pub mod codec;
pub mod combinators;
pub mod config;
pub mod context;
pub mod error;
pub mod size;
pub mod types;

// Re-export main types and traits
pub use codec::{decode, encode, is_absent, Codec, Emit, Validation};
pub use combinators::{
    defaulted::Defaulted,
    literal::{Enum, Literal},
    optional::Optional,
    sized::Bounded,
};
pub use config::SizeCfg;
pub use context::{Context, ContextEntry, Step};
pub use error::{ErrorKind, Errors, UnsupportedSize, ValidationError};
pub use size::{size, Measure, Size};
pub use types::{
    cidr::{Cidr, CidrError, NetworkRange},
    primitives::{Boolean, Integer, Number, Text},
    record::{definition, is_definition, Definition, Fields, Record},
    vec::List,
};

/// Message reported by [non_empty].
pub const EMPTY_MESSAGE: &str = "Value can not be empty.";

/// Creates a codec for IPv4 CIDR ranges.
pub fn cidr() -> Cidr {
    Cidr
}

/// Wraps `inner`, decoding absent input to `default`.
pub fn defaulted<T: Codec>(inner: T, default: T::Decoded) -> Defaulted<T> {
    Defaulted::new(inner, default)
}

/// Wraps `inner`, decoding absent input to `None`.
pub fn optional<T: Codec>(inner: T) -> Optional<T> {
    Optional::new(inner)
}

/// Wraps `inner`, requiring the decoded value's size to satisfy `cfg`.
pub fn sized<T>(inner: T, cfg: impl Into<SizeCfg>) -> Bounded<T>
where
    T: Codec,
    T::Decoded: Measure,
{
    Bounded::new(inner, cfg)
}

/// Wraps `inner`, rejecting values of size zero with [EMPTY_MESSAGE].
pub fn non_empty<T>(inner: T) -> Bounded<T>
where
    T: Codec,
    T::Decoded: Measure,
{
    Bounded::new(inner, SizeCfg::from(1..).with_message(EMPTY_MESSAGE))
}

/// Creates a codec named `name` accepting only `values`.
pub fn enumeration<L: Literal>(
    name: impl Into<String>,
    values: impl IntoIterator<Item = L>,
) -> Enum<L> {
    Enum::new(name, values)
}
