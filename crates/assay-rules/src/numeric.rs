//! Ordering rules for numbers and any other ordered, displayable value.

use std::fmt::Display;

use assay_contracts::{FieldState, Rule, RuleFailure};

/// Values the ordering rules accept.
pub trait Ordered: PartialOrd + Display + Send + Sync + 'static {}

impl<T: PartialOrd + Display + Send + Sync + 'static> Ordered for T {}

fn ordering_rule<T: Ordered>(
    n: T,
    holds: fn(&T, &T) -> bool,
    requirement: &'static str,
) -> Rule<T> {
    Box::new(move |state: &FieldState<'_, T>| {
        let value = state.value();
        if holds(value, &n) {
            Ok(())
        } else {
            Err(RuleFailure::new(format!(
                "value is {value}, but needs to {requirement} {n}"
            )))
        }
    })
}

/// The value must be at least `n`.
pub fn min_n<T: Ordered>(n: T) -> Rule<T> {
    ordering_rule(n, |v, n| v >= n, "be at least")
}

/// The value must be at most `n`.
pub fn max_n<T: Ordered>(n: T) -> Rule<T> {
    ordering_rule(n, |v, n| v <= n, "be at most")
}

/// The value must be strictly greater than `n`.
pub fn gt<T: Ordered>(n: T) -> Rule<T> {
    ordering_rule(n, |v, n| v > n, "be greater than")
}

/// Same as [`min_n`].
pub fn gte<T: Ordered>(n: T) -> Rule<T> {
    min_n(n)
}

/// The value must be strictly less than `n`.
pub fn lt<T: Ordered>(n: T) -> Rule<T> {
    ordering_rule(n, |v, n| v < n, "be less than")
}

/// Same as [`max_n`].
pub fn lte<T: Ordered>(n: T) -> Rule<T> {
    max_n(n)
}

/// The value must differ from `n`.
pub fn neq_n<T: Ordered>(n: T) -> Rule<T> {
    ordering_rule(n, |v, n| v != n, "not equal to")
}

// ── Tests ─────────────────────────────────────────────────────────────────────
