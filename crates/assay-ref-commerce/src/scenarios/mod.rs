//! Commerce reference scenarios.
//!
//! Each scenario is a self-contained module that builds schemas from mock
//! records, runs the validator, and prints the outcome.

pub mod order_checkout;
pub mod registration;
pub mod user_profile;

use assay_contracts::{rule_fn, FieldState, Rule, RuleFailure};

/// A deliberately loose email check: one `@` with text on both sides.
pub fn valid_email() -> Rule<String> {
    rule_fn(|state: &FieldState<'_, String>| {
        match state.value().split_once('@') {
            Some((local, domain)) if !local.is_empty() && !domain.is_empty() && !domain.contains('@') => Ok(()),
            _ => Err(RuleFailure::new("must be a valid email address")),
        }
    })
}

/// Print a validation outcome in the scenario report format.
pub(crate) fn print_outcome(label: &str, outcome: &Result<(), assay_contracts::ValidationError>) {
    match outcome {
        Ok(()) => println!("  {label:<24} PASS"),
        Err(errors) => {
            println!("  {label:<24} FAIL ({} failure(s))", errors.failure_count());
            for (path, message) in errors.failures() {
                for (i, line) in message.lines().enumerate() {
                    if i == 0 {
                        println!("    {path}: {line}");
                    } else {
                        println!("    {:width$}  {line}", "", width = path.len());
                    }
                }
            }
        }
    }
}
