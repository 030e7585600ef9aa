//! `Field`: one value bound to an ordered list of rules.
//!
//! A field is nameless until placed into a schema; the schema supplies the
//! name at traversal time. Every rule runs on every pass and every failure
//! is kept. There is no short-circuit on the first failure.

use std::fmt;

use tracing::debug;

use assay_contracts::{FieldState, Rule, RuleResult, ValidationError};

use crate::traits::FieldCheck;

/// A value and the rules it must satisfy.
pub struct Field<T> {
    value: T,
    rules: Vec<Rule<T>>,
}

impl<T> Field<T> {
    /// A field with no rules. It always passes until rules are added.
    pub fn new(value: T) -> Self {
        Self {
            value,
            rules: Vec::new(),
        }
    }

    /// A field with the given rules, applied in order.
    pub fn with_rules(value: T, rules: Vec<Rule<T>>) -> Self {
        Self { value, rules }
    }

    /// Append a boxed rule, such as one returned by `assay-rules`.
    pub fn rule(mut self, rule: Rule<T>) -> Self {
        self.rules.push(rule);
        self
    }

    /// Append a closure or function item as a rule.
    pub fn check<F>(mut self, f: F) -> Self
    where
        F: for<'a> Fn(&FieldState<'a, T>) -> RuleResult + Send + Sync + 'static,
    {
        self.rules.push(Box::new(f));
        self
    }

    pub fn value(&self) -> &T {
        &self.value
    }

    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }

    /// Run this field alone under `name` against a fresh tree.
    pub fn errors(&self, name: &str) -> ValidationError
    where
        T: Send + Sync,
    {
        let mut errors = ValidationError::new();
        self.validate(&mut errors, name);
        errors
    }
}

impl<T: Send + Sync> FieldCheck for Field<T> {
    fn validate(&self, errors: &mut ValidationError, name: &str) {
        let state = FieldState::new(&self.value, name);
        for rule in &self.rules {
            if let Err(failure) = rule(&state) {
                debug!(field = %name, message = %failure, "rule failed");
                errors.add_error(name, failure.into_message());
            }
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Field<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Field")
            .field("value", &self.value)
            .field("rules", &self.rules.len())
            .finish()
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
