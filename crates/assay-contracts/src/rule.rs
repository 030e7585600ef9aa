//! The rule contract.
//!
//! A rule is a pure predicate over one typed value. It receives a
//! [`FieldState`] snapshot and either passes (`Ok(())`) or fails with a
//! human-readable [`RuleFailure`]. Rules are written once per value family
//! and close over whatever parameters they compare against.

use thiserror::Error;

/// The immutable snapshot handed to every rule.
///
/// Built fresh for each rule invocation from the field's value and the name
/// its enclosing schema registered it under. The value is borrowed: rules
/// read caller data but never mutate it.
#[derive(Debug)]
pub struct FieldState<'a, T> {
    value: &'a T,
    name: &'a str,
}

impl<'a, T> FieldState<'a, T> {
    pub fn new(value: &'a T, name: &'a str) -> Self {
        Self { value, name }
    }

    /// The value under validation.
    pub fn value(&self) -> &'a T {
        self.value
    }

    /// The field's name within its enclosing schema.
    pub fn name(&self) -> &'a str {
        self.name
    }
}

/// The single engine-level failure kind: a message attached to whichever
/// field produced it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct RuleFailure {
    message: String,
}

impl RuleFailure {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn into_message(self) -> String {
        self.message
    }
}

impl From<String> for RuleFailure {
    fn from(message: String) -> Self {
        Self { message }
    }
}

impl From<&str> for RuleFailure {
    fn from(message: &str) -> Self {
        Self::new(message)
    }
}

/// Outcome of one rule: pass, or fail with a message.
pub type RuleResult = Result<(), RuleFailure>;

/// A boxed rule over values of type `T`.
///
/// `Send + Sync` so a schema built on one thread can be validated on another.
pub type Rule<T> = Box<dyn for<'a> Fn(&FieldState<'a, T>) -> RuleResult + Send + Sync>;

/// Box a closure or function item as a [`Rule`].
///
/// ```rust,ignore
/// use assay_contracts::rule::{rule_fn, RuleFailure};
///
/// let email = rule_fn(|state: &FieldState<'_, String>| {
///     if state.value().contains('@') {
///         Ok(())
///     } else {
///         Err(RuleFailure::new("must be a valid email address"))
///     }
/// });
/// ```
pub fn rule_fn<T, F>(f: F) -> Rule<T>
where
    F: for<'a> Fn(&FieldState<'a, T>) -> RuleResult + Send + Sync + 'static,
{
    Box::new(f)
}
