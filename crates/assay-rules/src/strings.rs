//! String rules. Lengths are counted in characters, not bytes.

use assay_contracts::{FieldState, Rule, RuleFailure};

fn length_rule(n: usize, holds: fn(usize, usize) -> bool, requirement: &'static str) -> Rule<String> {
    Box::new(move |state: &FieldState<'_, String>| {
        let len = state.value().chars().count();
        if holds(len, n) {
            Ok(())
        } else {
            Err(RuleFailure::new(format!(
                "length is {len}, but needs to be {requirement} {n}"
            )))
        }
    })
}

/// At least `n` characters.
pub fn min_s(n: usize) -> Rule<String> {
    length_rule(n, |len, n| len >= n, "at least")
}

/// At most `n` characters.
pub fn max_s(n: usize) -> Rule<String> {
    length_rule(n, |len, n| len <= n, "at most")
}

/// Exactly `n` characters.
pub fn len_s(n: usize) -> Rule<String> {
    length_rule(n, |len, n| len == n, "exactly")
}

fn collect_set<I, S>(set: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    set.into_iter().map(Into::into).collect()
}

/// The value must be one of `set`.
pub fn in_s<I, S>(set: I) -> Rule<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let set = collect_set(set);
    Box::new(move |state: &FieldState<'_, String>| {
        if set.contains(state.value()) {
            Ok(())
        } else {
            Err(RuleFailure::new(format!(
                "{:?} is not in {:?}, but should be",
                state.value(),
                set
            )))
        }
    })
}

/// The value must not be any of `set`.
pub fn not_in_s<I, S>(set: I) -> Rule<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let set = collect_set(set);
    Box::new(move |state: &FieldState<'_, String>| {
        if set.contains(state.value()) {
            Err(RuleFailure::new(format!(
                "{:?} is in {:?}, but shouldn't be",
                state.value(),
                set
            )))
        } else {
            Ok(())
        }
    })
}

/// The value must contain `needle`.
pub fn contains_s(needle: impl Into<String>) -> Rule<String> {
    let needle = needle.into();
    Box::new(move |state: &FieldState<'_, String>| {
        if state.value().contains(needle.as_str()) {
            Ok(())
        } else {
            Err(RuleFailure::new(format!(
                "{:?} does not contain {:?}, but needs to",
                state.value(),
                needle
            )))
        }
    })
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use assay_contracts::{FieldState, Rule, RuleResult};

    use super::*;

    fn run(rule: &Rule<String>, value: &str) -> RuleResult {
        let value = value.to_string();
        rule(&FieldState::new(&value, "s"))
    }

    #[test]
    fn test_length_rules() {
        assert!(run(&min_s(3), "john").is_ok());
        assert_eq!(
            run(&min_s(3), "j").unwrap_err().message(),
            "length is 1, but needs to be at least 3"
        );
        assert_eq!(
            run(&max_s(5), "johnathan").unwrap_err().message(),
            "length is 9, but needs to be at most 5"
        );
        assert!(run(&len_s(6), "123456").is_ok());
        assert_eq!(
            run(&len_s(6), "12345").unwrap_err().message(),
            "length is 5, but needs to be exactly 6"
        );
    }

    /// Multi-byte characters count once.
    #[test]
    fn test_length_counts_characters() {
        assert!(run(&len_s(4), "café").is_ok());
    }

    #[test]
    fn test_in_s() {
        let rule = in_s(["small", "medium", "large"]);
        assert!(run(&rule, "medium").is_ok());
        assert_eq!(
            run(&rule, "huge").unwrap_err().message(),
            r#""huge" is not in ["small", "medium", "large"], but should be"#
        );
    }

    #[test]
    fn test_not_in_s() {
        let rule = not_in_s(vec!["rejected".to_string(), "invalid".to_string()]);
        assert!(run(&rule, "completed").is_ok());
        assert_eq!(
            run(&rule, "rejected").unwrap_err().message(),
            r#""rejected" is in ["rejected", "invalid"], but shouldn't be"#
        );
    }

    #[test]
    fn test_contains_s() {
        let rule = contains_s("Street");
        assert!(run(&rule, "123 London Street").is_ok());
        assert_eq!(
            run(&rule, "123 London Road").unwrap_err().message(),
            r#""123 London Road" does not contain "Street", but needs to"#
        );
    }
}
