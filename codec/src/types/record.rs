//! Codecs for records with named fields.
//!
//! A [Record] validates each declared field with its own codec and collects
//! the failures of every field in one pass. Fields may use different codecs,
//! so the decoded record is the normalized raw form of each field (the
//! field's codec decodes and then re-encodes it). Keys that are not declared
//! are dropped, as are fields whose encoding is absent.
//!
//! A [Definition] is a record registered under a name, which downstream
//! tooling can discover through [is_definition].

use crate::{
    codec::{describe, Emit},
    error::merge,
    Codec, Context, ErrorKind, Errors, Validation, ValidationError,
};
use serde_json::{Map, Value};
use std::fmt;

/// Type-erased field codec.
trait Field: Send + Sync {
    fn field_name(&self) -> &str;

    fn accepts(&self, raw: Option<&Value>) -> bool;

    /// Validates `raw` and returns its normalized raw form (`None` when absent).
    fn normalize(&self, raw: Option<&Value>, context: &Context) -> Validation<Option<Value>>;
}

impl<C: Codec> Field for C {
    fn field_name(&self) -> &str {
        self.name()
    }

    fn accepts(&self, raw: Option<&Value>) -> bool {
        self.is(raw)
    }

    fn normalize(&self, raw: Option<&Value>, context: &Context) -> Validation<Option<Value>> {
        let decoded = self.validate(raw, context)?;
        Ok(self.encode(&decoded).emit())
    }
}

/// Ordered set of named fields, each with its own codec.
#[derive(Default)]
pub struct Fields(Vec<(String, Box<dyn Field>)>);

impl Fields {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds the field `key`, validated by `codec`.
    ///
    /// # Panics
    ///
    /// Panics if `key` was already declared.
    pub fn with(mut self, key: impl Into<String>, codec: impl Codec + 'static) -> Self {
        let key = key.into();
        assert!(
            self.0.iter().all(|(k, _)| *k != key),
            "duplicate field: {key}"
        );
        self.0.push((key, Box::new(codec)));
        self
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Debug for Fields {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.0.iter().map(|(k, c)| (k, c.field_name())))
            .finish()
    }
}

/// Accepts an object whose declared fields are each accepted by their codec.
#[derive(Debug)]
pub struct Record {
    fields: Fields,
    name: String,
}

impl Record {
    pub fn new(fields: Fields) -> Self {
        let name = if fields.is_empty() {
            "{}".to_string()
        } else {
            let inner = fields
                .0
                .iter()
                .map(|(k, c)| format!("{k}: {}", c.field_name()))
                .collect::<Vec<_>>()
                .join(", ");
            format!("{{ {inner} }}")
        };
        Self { fields, name }
    }

    /// Declared fields as `(key, codec name)` pairs, in declaration order.
    pub fn fields(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.0.iter().map(|(k, c)| (k.as_str(), c.field_name()))
    }
}

impl Codec for Record {
    type Decoded = Map<String, Value>;
    type Encoded = Value;

    fn name(&self) -> &str {
        &self.name
    }

    fn is(&self, raw: Option<&Value>) -> bool {
        match raw {
            Some(Value::Object(object)) => self
                .fields
                .0
                .iter()
                .all(|(key, codec)| codec.accepts(object.get(key))),
            _ => false,
        }
    }

    fn validate(&self, raw: Option<&Value>, context: &Context) -> Validation<Self::Decoded> {
        let Some(Value::Object(object)) = raw else {
            return Err(ValidationError::new(
                ErrorKind::TypeMismatch,
                raw,
                context,
                format!("Value {} should be an object.", describe(raw)),
            )
            .into());
        };

        let mut decoded = Map::new();
        let mut failures: Option<Errors> = None;
        for (key, codec) in &self.fields.0 {
            let child = context.field(key.as_str(), codec.field_name());
            match codec.normalize(object.get(key), &child) {
                Ok(Some(value)) => {
                    decoded.insert(key.clone(), value);
                }
                Ok(None) => {}
                Err(errors) => merge(&mut failures, errors),
            }
        }
        match failures {
            Some(errors) => Err(errors),
            None => Ok(decoded),
        }
    }

    fn encode(&self, value: &Self::Decoded) -> Value {
        Value::Object(value.clone())
    }
}

/// A [Record] registered under a name.
///
/// Validation and encoding are exactly those of the underlying record; only
/// the name differs.
#[derive(Debug)]
pub struct Definition {
    record: Record,
    name: String,
}

impl Definition {
    pub fn record(&self) -> &Record {
        &self.record
    }

    /// Declared fields as `(key, codec name)` pairs, in declaration order.
    pub fn fields(&self) -> impl Iterator<Item = (&str, &str)> {
        self.record.fields()
    }
}

impl Codec for Definition {
    type Decoded = Map<String, Value>;
    type Encoded = Value;

    fn name(&self) -> &str {
        &self.name
    }

    fn is(&self, raw: Option<&Value>) -> bool {
        self.record.is(raw)
    }

    fn validate(&self, raw: Option<&Value>, context: &Context) -> Validation<Self::Decoded> {
        self.record.validate(raw, context)
    }

    fn encode(&self, value: &Self::Decoded) -> Value {
        self.record.encode(value)
    }

    fn definition_name(&self) -> Option<&str> {
        Some(&self.name)
    }
}

/// Creates a record over `fields` registered as the definition `name`.
pub fn definition(name: impl Into<String>, fields: Fields) -> Definition {
    Definition {
        record: Record::new(fields),
        name: name.into(),
    }
}

/// Returns true if `codec` is a registered definition.
pub fn is_definition<C: Codec + ?Sized>(codec: &C) -> bool {
    codec.definition_name().is_some()
}
