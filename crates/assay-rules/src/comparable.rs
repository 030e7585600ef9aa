//! Equality rules for any comparable value.

use std::fmt::Debug;

use assay_contracts::{FieldState, Rule, RuleFailure};

/// The value must differ from its type's default ("zero") value.
///
/// Use it for required fields: an empty string, `0`, `false`, or an empty
/// collection all fail.
pub fn not_zero<T>() -> Rule<T>
where
    T: Default + PartialEq + Send + Sync + 'static,
{
    Box::new(|state: &FieldState<'_, T>| {
        if *state.value() == T::default() {
            Err(RuleFailure::new("value is required but has zero value"))
        } else {
            Ok(())
        }
    })
}

/// The value must equal `other`. Useful for confirmation fields.
pub fn same_as<T>(other: T) -> Rule<T>
where
    T: PartialEq + Debug + Send + Sync + 'static,
{
    Box::new(move |state: &FieldState<'_, T>| {
        if *state.value() == other {
            Ok(())
        } else {
            Err(RuleFailure::new(format!(
                "{:?} does not match {:?}",
                state.value(),
                other
            )))
        }
    })
}

#[cfg(test)]
mod tests {
    use assay_contracts::FieldState;

    use super::*;

    #[test]
    fn test_not_zero_strings() {
        let rule = not_zero::<String>();
        let empty = String::new();
        let filled = "user@example.com".to_string();

        assert!(rule(&FieldState::new(&filled, "email")).is_ok());
        assert_eq!(
            rule(&FieldState::new(&empty, "email")).unwrap_err().message(),
            "value is required but has zero value"
        );
    }

    #[test]
    fn test_not_zero_numbers_and_bools() {
        assert!(not_zero::<i32>()(&FieldState::new(&0, "n")).is_err());
        assert!(not_zero::<i32>()(&FieldState::new(&25, "n")).is_ok());
        assert!(not_zero::<bool>()(&FieldState::new(&false, "b")).is_err());
    }

    #[test]
    fn test_same_as() {
        let rule = same_as("Password123".to_string());
        let matching = "Password123".to_string();
        let other = "Password124".to_string();

        assert!(rule(&FieldState::new(&matching, "password")).is_ok());
        assert_eq!(
            rule(&FieldState::new(&other, "password")).unwrap_err().message(),
            r#""Password124" does not match "Password123""#
        );
    }
}
