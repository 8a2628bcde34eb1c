//! Navigation context used to annotate failures with their location.

use std::{fmt::Write as _, sync::Arc};

/// How a [ContextEntry] was reached from its parent.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Step {
    /// The value being decoded.
    Root,
    /// A named field of a record.
    Field,
    /// An element of a sequence.
    Index,
}

/// One step of navigation into a structural value.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct ContextEntry {
    pub step: Step,
    /// Field name, element index (as digits), or empty for the root.
    pub key: String,
    /// Name of the codec active at this step.
    pub codec: String,
}

/// Ordered path of [ContextEntry]s from the root to the value being validated.
///
/// Contexts are immutable: descending returns a new context and leaves the
/// parent untouched, so siblings can share a common prefix.
#[derive(Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct Context(Arc<Vec<ContextEntry>>);

impl Context {
    /// Creates a root context for the codec named `codec`.
    pub fn root(codec: impl Into<String>) -> Self {
        Self(Arc::new(vec![ContextEntry {
            step: Step::Root,
            key: String::new(),
            codec: codec.into(),
        }]))
    }

    /// Descends into the field `key`, validated by the codec named `codec`.
    pub fn field(&self, key: impl Into<String>, codec: impl Into<String>) -> Self {
        self.push(Step::Field, key.into(), codec.into())
    }

    /// Descends into element `index` of a sequence.
    pub fn index(&self, index: usize, codec: impl Into<String>) -> Self {
        self.push(Step::Index, index.to_string(), codec.into())
    }

    fn push(&self, step: Step, key: String, codec: String) -> Self {
        let mut entries = Vec::with_capacity(self.0.len() + 1);
        entries.extend(self.0.iter().cloned());
        entries.push(ContextEntry { step, key, codec });
        Self(Arc::new(entries))
    }

    pub fn entries(&self) -> &[ContextEntry] {
        &self.0
    }

    /// The innermost entry, if any.
    pub fn last(&self) -> Option<&ContextEntry> {
        self.0.last()
    }

    /// Renders the path as a dotted/bracketed string (e.g. `s3.lifecycleRules[2].transitionAfter`).
    ///
    /// The root is skipped, fields are joined with `.` and indices are bracketed.
    pub fn path(&self) -> String {
        let mut out = String::new();
        for entry in self.0.iter() {
            match entry.step {
                Step::Root => {}
                Step::Index => {
                    let _ = write!(out, "[{}]", entry.key);
                }
                Step::Field => {
                    if !out.is_empty() {
                        out.push('.');
                    }
                    out.push_str(&entry.key);
                }
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_rendering() {
        let ctx = Context::root("Config")
            .field("destinationsConfig", "Destinations")
            .field("s3", "S3")
            .field("lifecycleRules", "Array<Rule>")
            .index(2, "Rule")
            .field("transitionAfter", "number");
        assert_eq!(
            ctx.path(),
            "destinationsConfig.s3.lifecycleRules[2].transitionAfter"
        );
        assert_eq!(ctx.entries().len(), 6);
        assert_eq!(ctx.last().unwrap().codec, "number");
    }

    #[test]
    fn test_numeric_field_name() {
        let ctx = Context::root("Config")
            .field("zones", "Zones")
            .field("2", "string");
        assert_eq!(ctx.path(), "zones.2");
        assert_eq!(ctx.last().unwrap().step, Step::Field);

        let ctx = Context::root("Config").field("2", "string").index(2, "string");
        assert_eq!(ctx.path(), "2[2]");
    }

    #[test]
    fn test_root_path_is_empty() {
        assert_eq!(Context::root("string").path(), "");
        assert_eq!(Context::default().path(), "");
    }

    #[test]
    fn test_leading_index() {
        let ctx = Context::root("Array<string>").index(0, "string");
        assert_eq!(ctx.path(), "[0]");
    }

    #[test]
    fn test_parent_unchanged() {
        let parent = Context::root("Config");
        let child = parent.field("name", "string");
        assert_eq!(parent.entries().len(), 1);
        assert_eq!(child.entries().len(), 2);
    }
}
