//! `Schema`: a named, recursively nestable collection of validation units.
//!
//! Each entry is either a leaf ([`FieldCheck`], usually a [`Field`]) or a
//! nested `Schema`. Traversal:
//!
//! - a leaf validates against the *current* node, under its entry name;
//! - a nested schema obtains (or creates) the child node for its entry
//!   name and recurses into it.
//!
//! Sibling order is unspecified. Rules must not depend on it or on results
//! from siblings. Every entry is visited exactly once per pass, whatever
//! failed before it.

use std::collections::BTreeMap;
use std::fmt;

use assay_contracts::ValidationError;

use crate::field::Field;
use crate::nested::Nested;
use crate::traits::FieldCheck;

/// One schema entry.
pub enum Entry {
    /// A leaf validated at the enclosing level.
    Leaf(Box<dyn FieldCheck>),
    /// A nested schema validated one level down.
    Composite(Schema),
}

impl Entry {
    /// Wrap any leaf implementation.
    pub fn leaf(check: impl FieldCheck + 'static) -> Self {
        Entry::Leaf(Box::new(check))
    }

    /// Validate this entry, registered under `name`, into `errors`.
    pub fn validate(&self, errors: &mut ValidationError, name: &str) {
        match self {
            Entry::Leaf(check) => check.validate(errors, name),
            Entry::Composite(schema) => schema.validate(errors.get_or_create_nested(name)),
        }
    }

    pub fn is_composite(&self) -> bool {
        matches!(self, Entry::Composite(_))
    }
}

impl<T: Send + Sync + 'static> From<Field<T>> for Entry {
    fn from(field: Field<T>) -> Self {
        Entry::Leaf(Box::new(field))
    }
}

impl<T, F> From<Nested<T, F>> for Entry
where
    T: Send + Sync + 'static,
    F: Fn(&T) -> Schema + Send + Sync + 'static,
{
    fn from(nested: Nested<T, F>) -> Self {
        Entry::Leaf(Box::new(nested))
    }
}

impl From<Schema> for Entry {
    fn from(schema: Schema) -> Self {
        Entry::Composite(schema)
    }
}

impl fmt::Debug for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Entry::Leaf(_) => f.write_str("Leaf"),
            Entry::Composite(schema) => f.debug_tuple("Composite").field(schema).finish(),
        }
    }
}

/// A mapping from unique field names to entries.
#[derive(Debug, Default)]
pub struct Schema {
    entries: BTreeMap<String, Entry>,
}

impl Schema {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: register a field under `name`, replacing any previous entry.
    pub fn field<T: Send + Sync + 'static>(mut self, name: impl Into<String>, field: Field<T>) -> Self {
        self.insert(name, field);
        self
    }

    /// Builder: register a nested schema under `name`, replacing any
    /// previous entry.
    pub fn nested(mut self, name: impl Into<String>, schema: Schema) -> Self {
        self.insert(name, schema);
        self
    }

    /// Builder: register `value` under `name`, validated by the schema
    /// `build` returns for it. Failures land under `name` as if `build`'s
    /// schema had been nested directly.
    pub fn nested_from<T, F>(mut self, name: impl Into<String>, value: T, build: F) -> Self
    where
        T: Send + Sync + 'static,
        F: Fn(&T) -> Schema + Send + Sync + 'static,
    {
        self.insert(name, Nested::new(value, build));
        self
    }

    /// Register an entry under `name`. Returns the entry it replaced.
    pub fn insert(&mut self, name: impl Into<String>, entry: impl Into<Entry>) -> Option<Entry> {
        self.entries.insert(name.into(), entry.into())
    }

    pub fn get(&self, name: &str) -> Option<&Entry> {
        self.entries.get(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Validate every entry into `errors`, the node for this schema's level.
    pub fn validate(&self, errors: &mut ValidationError) {
        for (name, entry) in &self.entries {
            entry.validate(errors, name);
        }
    }

    /// Run a self-contained pass against a fresh root and return the tree.
    pub fn errors(&self) -> ValidationError {
        let mut errors = ValidationError::new();
        self.validate(&mut errors);
        errors
    }
}

impl FromIterator<(String, Entry)> for Schema {
    fn from_iter<I: IntoIterator<Item = (String, Entry)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl Extend<(String, Entry)> for Schema {
    fn extend<I: IntoIterator<Item = (String, Entry)>>(&mut self, iter: I) {
        self.entries.extend(iter);
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    use assay_contracts::{FieldState, RuleFailure, ValidationError};

    use super::{Entry, Schema};
    use crate::field::Field;
    use crate::traits::FieldCheck;

    // ── Helpers ───────────────────────────────────────────────────────────────

    /// A leaf that counts its visits and optionally fails.
    struct Probe {
        visits: Arc<AtomicUsize>,
        fails: bool,
    }

    impl FieldCheck for Probe {
        fn validate(&self, errors: &mut ValidationError, name: &str) {
            self.visits.fetch_add(1, Ordering::SeqCst);
            if self.fails {
                errors.add_error(name, "probe failed");
            }
        }
    }

    fn probe(visits: &Arc<AtomicUsize>, fails: bool) -> Entry {
        Entry::leaf(Probe {
            visits: Arc::clone(visits),
            fails,
        })
    }

    fn required(state: &FieldState<'_, String>) -> Result<(), RuleFailure> {
        if state.value().is_empty() {
            Err(RuleFailure::new("value is required but has zero value"))
        } else {
            Ok(())
        }
    }

    // ── Traversal ─────────────────────────────────────────────────────────────

    #[test]
    fn test_empty_schema_passes() {
        let schema = Schema::new();
        let errors = schema.errors();

        assert!(schema.is_empty());
        assert!(!errors.has_errors());
        assert!(errors.to_map().is_none());
    }

    /// Every leaf is visited exactly once, failing or not, at every depth.
    #[test]
    fn test_every_entry_visited_once() {
        let visits = Arc::new(AtomicUsize::new(0));

        let mut inner = Schema::new();
        inner.insert("c", probe(&visits, true));
        inner.insert("d", probe(&visits, false));

        let mut schema = Schema::new();
        schema.insert("a", probe(&visits, true));
        schema.insert("b", probe(&visits, false));
        schema.insert("inner", inner);

        let errors = schema.errors();

        assert_eq!(visits.load(Ordering::SeqCst), 4);
        assert_eq!(errors.failures().len(), 2);
        assert_eq!(errors.messages_at("a").unwrap(), ["probe failed"]);
        assert_eq!(errors.messages_at("inner.c").unwrap(), ["probe failed"]);
    }

    /// A nested failure lands under its own path only.
    #[test]
    fn test_nested_failure_mirrors_schema_shape() {
        let schema = Schema::new().nested(
            "user",
            Schema::new().field("name", Field::new(String::new()).check(required)),
        );

        let errors = schema.errors();

        assert!(errors.errors().is_empty(), "root must have no direct errors");
        assert_eq!(
            errors.messages_at("user.name").unwrap(),
            ["value is required but has zero value"]
        );
        assert_eq!(errors.failures().len(), 1);
    }

    /// Composite entries always produce their child node, even when it
    /// stays empty.
    #[test]
    fn test_composite_creates_child_node() {
        let schema = Schema::new()
            .nested("address", Schema::new().field("city", Field::new("Boston".to_string()).check(required)));

        let errors = schema.errors();
        let address = errors.nested("address").unwrap();

        assert!(!address.has_errors());
        assert_eq!(address.path(), ["address"]);
    }

    #[test]
    fn test_insert_replaces_same_name() {
        let mut schema = Schema::new();
        assert!(schema.insert("x", Field::new(1_u8)).is_none());
        let replaced = schema.insert("x", Schema::new());

        assert!(replaced.is_some_and(|e| !e.is_composite()));
        assert_eq!(schema.len(), 1);
        assert!(schema.get("x").unwrap().is_composite());
    }

    #[test]
    fn test_from_iterator() {
        let schema: Schema = vec![
            ("b".to_string(), Entry::from(Field::new(2_u8))),
            ("a".to_string(), Entry::from(Schema::new())),
        ]
        .into_iter()
        .collect();

        assert_eq!(schema.names().collect::<Vec<_>>(), ["a", "b"]);
    }
}
