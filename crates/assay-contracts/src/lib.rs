//! # assay-contracts
//!
//! Shared types and contracts for the assay validation engine.
//!
//! All crates in the workspace import from here. No traversal logic lives in
//! this crate, only the rule contract, the error tree, and error types.

pub mod error;
pub mod rule;
pub mod tree;

pub use error::{AssayError, AssayResult};
pub use rule::{rule_fn, FieldState, Rule, RuleFailure, RuleResult};
pub use tree::ValidationError;

#[cfg(test)]
mod tests {
    use super::*;

    // ── FieldState ───────────────────────────────────────────────────────────

    #[test]
    fn field_state_exposes_value_and_name() {
        let value = 42_u32;
        let state = FieldState::new(&value, "answer");

        assert_eq!(*state.value(), 42);
        assert_eq!(state.name(), "answer");
    }

    // ── Rule contract ────────────────────────────────────────────────────────

    #[test]
    fn rule_fn_boxes_a_closure() {
        let at_least_three: Rule<String> = rule_fn(|state: &FieldState<'_, String>| {
            if state.value().len() >= 3 {
                Ok(())
            } else {
                Err(RuleFailure::new(format!("'{}' is too short", state.name())))
            }
        });

        let short = "ab".to_string();
        let long = "abc".to_string();

        assert!(at_least_three(&FieldState::new(&long, "username")).is_ok());
        let failure = at_least_three(&FieldState::new(&short, "username")).unwrap_err();
        assert_eq!(failure.message(), "'username' is too short");
    }

    #[test]
    fn rule_failure_conversions() {
        let from_str: RuleFailure = "must be a valid email address".into();
        let from_string: RuleFailure = String::from("must be a valid email address").into();

        assert_eq!(from_str, from_string);
        assert_eq!(from_str.to_string(), "must be a valid email address");
        assert_eq!(from_string.into_message(), "must be a valid email address");
    }

    // ── AssayError display messages ──────────────────────────────────────────

    #[test]
    fn error_config_error_display() {
        let err = AssayError::ConfigError {
            reason: "missing limits file".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("configuration error"));
        assert!(msg.contains("missing limits file"));
    }

    #[test]
    fn error_invalid_input_display() {
        let err = AssayError::InvalidInput {
            reason: "expected value at line 1 column 1".to_string(),
        };
        assert!(err.to_string().contains("invalid input"));
    }

    /// A failed pass propagated with `?` keeps its flattened form in the
    /// error message.
    #[test]
    fn error_validation_display_embeds_tree() {
        let mut tree = ValidationError::new();
        tree.add_error("age", "value is 15, but needs to be at least 18");

        let err: AssayError = tree.into();
        let msg = err.to_string();
        assert!(msg.starts_with("validation failed: "));
        assert!(msg.contains(r#""age":{"errors":["value is 15, but needs to be at least 18"]}"#));
    }
}
