//! The leaf capability of a schema.
//!
//! A schema entry is either a leaf or a nested schema (see
//! [`Entry`](crate::schema::Entry)). Leaves are type-erased behind
//! `FieldCheck` so that one schema can hold fields over different value
//! types. [`Field`](crate::field::Field) is the standard implementation;
//! callers may supply their own.

use assay_contracts::ValidationError;

/// A validatable leaf.
pub trait FieldCheck: Send + Sync {
    /// Run every rule and record each failure under `name` in `errors`.
    ///
    /// `errors` is the node for the level the leaf sits at, not a node of
    /// its own. Implementations must visit all of their rules and must not
    /// touch any other part of the tree.
    fn validate(&self, errors: &mut ValidationError, name: &str);
}
