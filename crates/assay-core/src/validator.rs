//! The validator: entry point of a validation pass.
//!
//! A `Validator` owns one schema. Each call to [`Validator::validate`]
//! builds a fresh root tree, walks the schema into it, and either discards
//! it (success) or hands it back as the failure value. The validator keeps
//! no tree between calls, so calls never leak state into each other and
//! `validate` can take `&self`: concurrent calls on a shared validator are
//! safe because no mutable state is shared.

use tracing::debug;

use assay_contracts::ValidationError;

use crate::schema::Schema;

/// Runs whole-tree validation passes over one schema.
#[derive(Debug)]
pub struct Validator {
    schema: Schema,
}

impl Validator {
    pub fn new(schema: Schema) -> Self {
        Self { schema }
    }

    /// Run one full pass.
    ///
    /// Returns `Ok(())` when no rule failed anywhere in the tree, otherwise
    /// the populated error tree holding every failure found in this pass.
    pub fn validate(&self) -> Result<(), ValidationError> {
        debug!(entries = self.schema.len(), "validation starting");

        let mut errors = ValidationError::new();
        self.schema.validate(&mut errors);

        let passed = !errors.has_errors();
        debug!(
            passed,
            failure_count = errors.failure_count(),
            "validation complete"
        );

        if passed {
            Ok(())
        } else {
            Err(errors)
        }
    }

    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    pub fn into_schema(self) -> Schema {
        self.schema
    }
}

impl From<Schema> for Validator {
    fn from(schema: Schema) -> Self {
        Self::new(schema)
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
