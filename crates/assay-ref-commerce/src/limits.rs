//! Registration limits loaded from TOML.
//!
//! The engine itself reads no configuration; limits are a property of this
//! reference crate's registration scenario. A default file is compiled in
//! from `limits/registration.toml`; operators may point the demo at their
//! own file instead.
//!
//! Loaded limits are themselves checked with an assay schema, so an
//! inconsistent file (e.g. `username_min > username_max`) is rejected with
//! the same error tree a request would produce.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use assay_contracts::{
    error::{AssayError, AssayResult},
    FieldState, RuleFailure,
};
use assay_core::{Field, Schema, Validator};
use assay_rules::min_n;

/// The compiled-in limits file.
pub const BUNDLED_LIMITS: &str = include_str!("../limits/registration.toml");

/// Bounds the registration schema is built from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistrationLimits {
    /// Minimum username length, in characters.
    pub username_min: usize,
    /// Maximum username length, in characters.
    pub username_max: usize,
    /// Minimum password length, in characters.
    pub password_min: usize,
    /// Youngest age accepted, inclusive.
    pub minimum_age: i64,
    /// Oldest age accepted, inclusive.
    pub maximum_age: i64,
}

impl Default for RegistrationLimits {
    fn default() -> Self {
        Self {
            username_min: 3,
            username_max: 20,
            password_min: 8,
            minimum_age: 18,
            maximum_age: 120,
        }
    }
}

impl RegistrationLimits {
    /// Parse `s` as TOML and check the resulting limits for consistency.
    ///
    /// Returns `AssayError::ConfigError` if the TOML is malformed, does not
    /// match `RegistrationLimits`, or describes an empty range.
    pub fn from_toml_str(s: &str) -> AssayResult<Self> {
        let limits: RegistrationLimits = toml::from_str(s).map_err(|e| AssayError::ConfigError {
            reason: format!("failed to parse limits TOML: {}", e),
        })?;
        limits.check()?;
        debug!(?limits, "registration limits loaded");
        Ok(limits)
    }

    /// Read the file at `path` and parse it as limits TOML.
    pub fn from_file(path: &Path) -> AssayResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| AssayError::ConfigError {
            reason: format!("failed to read limits file '{}': {}", path.display(), e),
        })?;
        Self::from_toml_str(&contents)
    }

    /// The limits compiled into this crate.
    pub fn bundled() -> AssayResult<Self> {
        Self::from_toml_str(BUNDLED_LIMITS)
    }

    /// Reject limits no request could satisfy.
    pub fn check(&self) -> AssayResult<()> {
        let username_min = self.username_min;
        let minimum_age = self.minimum_age;

        let schema = Schema::new()
            .nested(
                "username",
                Schema::new()
                    .field("min", Field::new(self.username_min).rule(min_n(1)))
                    .field(
                        "max",
                        Field::new(self.username_max).check(move |state: &FieldState<'_, usize>| {
                            if *state.value() < username_min {
                                Err(RuleFailure::new(format!(
                                    "value is {}, but must not be below username_min ({})",
                                    state.value(),
                                    username_min
                                )))
                            } else {
                                Ok(())
                            }
                        }),
                    ),
            )
            .field("password_min", Field::new(self.password_min).rule(min_n(1)))
            .nested(
                "age",
                Schema::new()
                    .field("minimum", Field::new(self.minimum_age).rule(min_n(0)))
                    .field("maximum", Field::new(self.maximum_age).rule(min_n(minimum_age))),
            );

        Validator::new(schema)
            .validate()
            .map_err(|errors| AssayError::ConfigError {
                reason: format!("inconsistent registration limits: {errors}"),
            })
    }
}

#[cfg(test)]
mod tests {
    use assay_contracts::error::AssayError;

    use super::RegistrationLimits;

    #[test]
    fn test_bundled_limits_match_default() {
        let limits = RegistrationLimits::bundled().unwrap();
        assert_eq!(limits, RegistrationLimits::default());
    }

    #[test]
    fn test_custom_limits() {
        let toml = r#"
            username_min = 5
            username_max = 12
            password_min = 12
            minimum_age = 21
            maximum_age = 99
        "#;

        let limits = RegistrationLimits::from_toml_str(toml).unwrap();
        assert_eq!(limits.username_min, 5);
        assert_eq!(limits.minimum_age, 21);
    }

    /// Malformed TOML must produce an `AssayError::ConfigError`.
    #[test]
    fn test_toml_parse_error() {
        match RegistrationLimits::from_toml_str("this is not valid toml ][[[") {
            Err(AssayError::ConfigError { reason }) => {
                assert!(
                    reason.contains("failed to parse limits TOML"),
                    "expected parse error message, got: {reason}"
                );
            }
            other => panic!("expected ConfigError, got {:?}", other),
        }
    }

    /// A missing key is a shape mismatch, reported the same way.
    #[test]
    fn test_missing_key() {
        let result = RegistrationLimits::from_toml_str("username_min = 3");
        assert!(matches!(result, Err(AssayError::ConfigError { .. })));
    }

    /// An empty range is rejected with the failing path in the reason.
    #[test]
    fn test_inconsistent_limits() {
        let toml = r#"
            username_min = 10
            username_max = 4
            password_min = 8
            minimum_age = 18
            maximum_age = 120
        "#;

        match RegistrationLimits::from_toml_str(toml) {
            Err(AssayError::ConfigError { reason }) => {
                assert!(reason.contains("inconsistent registration limits"));
                assert!(reason.contains(r#""username":{"max""#), "got: {reason}");
            }
            other => panic!("expected ConfigError, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_file() {
        let result = RegistrationLimits::from_file(std::path::Path::new("/nonexistent/limits.toml"));
        match result {
            Err(AssayError::ConfigError { reason }) => {
                assert!(reason.contains("failed to read limits file"));
            }
            other => panic!("expected ConfigError, got {:?}", other),
        }
    }
}
