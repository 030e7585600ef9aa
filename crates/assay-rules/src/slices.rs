//! Rules over `Vec<T>`: length bounds, membership, and quantified rules
//! that apply an element rule to each item.
//!
//! Quantified rules report the indices that decided the outcome in a
//! single message:
//!
//! ```text
//! 2 elements failed validation
//!   [0]: length is 1, but needs to be at least 3
//!   [3]: length is 2, but needs to be at least 3
//! ```

use std::fmt::Debug;

use assay_contracts::{FieldState, Rule, RuleFailure};

fn length_rule<T>(n: usize, holds: fn(usize, usize) -> bool, requirement: &'static str) -> Rule<Vec<T>>
where
    T: Send + Sync + 'static,
{
    Box::new(move |state: &FieldState<'_, Vec<T>>| {
        let len = state.value().len();
        if holds(len, n) {
            Ok(())
        } else {
            Err(RuleFailure::new(format!(
                "length is {len}, but needs to be {requirement} {n}"
            )))
        }
    })
}

/// At least `n` elements.
pub fn min_len<T: Send + Sync + 'static>(n: usize) -> Rule<Vec<T>> {
    length_rule(n, |len, n| len >= n, "at least")
}

/// At most `n` elements.
pub fn max_len<T: Send + Sync + 'static>(n: usize) -> Rule<Vec<T>> {
    length_rule(n, |len, n| len <= n, "at most")
}

/// Exactly `n` elements.
pub fn exact_len<T: Send + Sync + 'static>(n: usize) -> Rule<Vec<T>> {
    length_rule(n, |len, n| len == n, "exactly")
}

/// The slice must contain `member`.
pub fn contains<T>(member: T) -> Rule<Vec<T>>
where
    T: PartialEq + Debug + Send + Sync + 'static,
{
    Box::new(move |state: &FieldState<'_, Vec<T>>| {
        if state.value().contains(&member) {
            Ok(())
        } else {
            Err(RuleFailure::new(format!(
                "{:?} does not contain {:?}, but needs to",
                state.value(),
                member
            )))
        }
    })
}

/// Apply `rule` to every element, under the slice's field name. Returns
/// the index and outcome of each element.
fn outcomes<'s, T>(
    rule: &'s Rule<T>,
    state: &'s FieldState<'s, Vec<T>>,
) -> impl Iterator<Item = (usize, Result<(), RuleFailure>)> + 's {
    let name = state.name();
    state
        .value()
        .iter()
        .enumerate()
        .map(move |(i, item)| (i, rule(&FieldState::new(item, name))))
}

fn indexed_report(header: String, lines: impl IntoIterator<Item = String>) -> RuleFailure {
    let mut report = vec![header];
    report.extend(lines);
    RuleFailure::new(report.join("\n"))
}

/// Every element must satisfy `rule`. An empty slice passes.
pub fn every<T: Send + Sync + 'static>(rule: Rule<T>) -> Rule<Vec<T>> {
    Box::new(move |state: &FieldState<'_, Vec<T>>| {
        let failures: Vec<(usize, RuleFailure)> = outcomes(&rule, state)
            .filter_map(|(i, outcome)| outcome.err().map(|f| (i, f)))
            .collect();

        if failures.is_empty() {
            return Ok(());
        }
        Err(indexed_report(
            format!("{} elements failed validation", failures.len()),
            failures.iter().map(|(i, f)| format!("  [{i}]: {f}")),
        ))
    })
}

/// At least one element must satisfy `rule`. An empty slice fails.
pub fn some<T: Send + Sync + 'static>(rule: Rule<T>) -> Rule<Vec<T>> {
    Box::new(move |state: &FieldState<'_, Vec<T>>| {
        if state.value().is_empty() {
            return Err(RuleFailure::new(
                "slice is empty, but needs at least one valid element",
            ));
        }

        let mut failures = Vec::new();
        for (i, outcome) in outcomes(&rule, state) {
            match outcome {
                Ok(()) => return Ok(()),
                Err(f) => failures.push((i, f)),
            }
        }

        Err(indexed_report(
            format!("all {} elements failed validation", failures.len()),
            failures.iter().map(|(i, f)| format!("  [{i}]: {f}")),
        ))
    })
}

/// No element may satisfy `rule`. An empty slice passes.
pub fn none<T: Send + Sync + 'static>(rule: Rule<T>) -> Rule<Vec<T>> {
    Box::new(move |state: &FieldState<'_, Vec<T>>| {
        let passed: Vec<usize> = outcomes(&rule, state)
            .filter_map(|(i, outcome)| outcome.is_ok().then_some(i))
            .collect();

        if passed.is_empty() {
            return Ok(());
        }
        Err(indexed_report(
            format!(
                "{} elements unexpectedly passed validation (expected none to pass rule)",
                passed.len()
            ),
            passed.iter().map(|i| format!("  [{i}]: passed")),
        ))
    })
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use assay_contracts::{rule_fn, FieldState, Rule, RuleFailure, RuleResult};

    use super::*;
    use crate::strings::min_s;

    fn run<T>(rule: &Rule<Vec<T>>, value: Vec<T>) -> RuleResult {
        rule(&FieldState::new(&value, "items"))
    }

    fn words(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn is_banned() -> Rule<String> {
        rule_fn(|state: &FieldState<'_, String>| {
            if ["forbidden", "banned"].contains(&state.value().as_str()) {
                Ok(())
            } else {
                Err(RuleFailure::new("word is not banned"))
            }
        })
    }

    // ── Length ────────────────────────────────────────────────────────────────

    #[test]
    fn test_length_rules() {
        assert!(run(&min_len::<u8>(1), vec![1]).is_ok());
        assert_eq!(
            run(&min_len::<u8>(1), vec![]).unwrap_err().message(),
            "length is 0, but needs to be at least 1"
        );
        assert!(run(&max_len::<u8>(2), vec![1, 2, 3]).is_err());
        assert!(run(&exact_len::<u8>(5), vec![1, 2, 3, 4, 5]).is_ok());
    }

    #[test]
    fn test_contains() {
        assert!(run(&contains("GK".to_string()), words(&["GK", "DF"])).is_ok());
        assert_eq!(
            run(&contains(3_u8), vec![1, 2]).unwrap_err().message(),
            "[1, 2] does not contain 3, but needs to"
        );
    }

    // ── Quantified ────────────────────────────────────────────────────────────

    #[test]
    fn test_every() {
        assert!(run(&every(min_s(3)), words(&[])).is_ok());
        assert!(run(&every(min_s(3)), words(&["reading", "cycling"])).is_ok());
        assert_eq!(
            run(&every(min_s(3)), words(&["ab", "reading", "cd"])).unwrap_err().message(),
            "2 elements failed validation\n  [0]: length is 2, but needs to be at least 3\n  [2]: length is 2, but needs to be at least 3"
        );
    }

    #[test]
    fn test_some() {
        assert_eq!(
            run(&some(min_s(3)), words(&[])).unwrap_err().message(),
            "slice is empty, but needs at least one valid element"
        );
        assert!(run(&some(min_s(3)), words(&["a", "abc"])).is_ok());
        assert_eq!(
            run(&some(min_s(3)), words(&["a"])).unwrap_err().message(),
            "all 1 elements failed validation\n  [0]: length is 1, but needs to be at least 3"
        );
    }

    #[test]
    fn test_none() {
        assert!(run(&none(is_banned()), words(&[])).is_ok());
        assert!(run(&none(is_banned()), words(&["hello", "world"])).is_ok());
        assert_eq!(
            run(&none(is_banned()), words(&["hello", "banned"])).unwrap_err().message(),
            "1 elements unexpectedly passed validation (expected none to pass rule)\n  [1]: passed"
        );
    }

    /// Element rules see the slice's field name.
    #[test]
    fn test_element_rules_see_field_name() {
        let named: Rule<u8> = rule_fn(|state: &FieldState<'_, u8>| {
            Err(RuleFailure::new(format!("{} item rejected", state.name())))
        });

        assert!(run(&every(named), vec![7])
            .unwrap_err()
            .message()
            .contains("items item rejected"));
    }
}
