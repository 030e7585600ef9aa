//! `Nested`: a leaf that validates a value through a schema built from it.
//!
//! A composite [`Entry`](crate::schema::Entry) needs its schema up front.
//! `Nested` defers that: it owns the value and a builder, and at traversal
//! time builds the schema, runs it against a fresh sub-tree, and grafts the
//! sub-tree under its own name. Failures stay structured, so they are
//! addressable as `name.field` like any composite's.

use std::fmt;

use tracing::debug;

use assay_contracts::ValidationError;

use crate::schema::Schema;
use crate::traits::FieldCheck;

/// A value validated by the schema `build` returns for it.
pub struct Nested<T, F> {
    value: T,
    build: F,
}

impl<T, F> Nested<T, F>
where
    F: Fn(&T) -> Schema,
{
    pub fn new(value: T, build: F) -> Self {
        Self { value, build }
    }

    pub fn value(&self) -> &T {
        &self.value
    }
}

impl<T, F> FieldCheck for Nested<T, F>
where
    T: Send + Sync,
    F: Fn(&T) -> Schema + Send + Sync,
{
    /// Always creates the child node for `name`, as a composite entry does,
    /// then merges the sub-tree into it.
    fn validate(&self, errors: &mut ValidationError, name: &str) {
        let sub = (self.build)(&self.value).errors();
        if sub.has_errors() {
            debug!(
                field = %name,
                failure_count = sub.failure_count(),
                "nested schema failed"
            );
        }
        errors.get_or_create_nested(name).merge(sub);
    }
}

impl<T: fmt::Debug, F> fmt::Debug for Nested<T, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Nested").field("value", &self.value).finish()
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
