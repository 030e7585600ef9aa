//! Rules that validate a value through a schema of its own.

use tracing::debug;

use assay_contracts::{FieldState, Rule, RuleFailure};
use assay_core::{Schema, Validator};

/// Build a schema from the value and validate it.
///
/// A failing pass is reported as one ordinary failure whose message is the
/// sub-tree's flattened JSON, so it can sit inside slice rules such as
/// [`every`](crate::every). Where the sub-tree should stay addressable by
/// path, register the value with
/// [`Schema::nested_from`](assay_core::Schema::nested_from) instead.
///
/// ```rust,ignore
/// let items = Field::new(order.items.clone()).rule(every(nested(|item: &OrderItem| {
///     Schema::new().field("quantity", Field::new(item.quantity).rule(min_n(1)))
/// })));
/// ```
pub fn nested<T, F>(build: F) -> Rule<T>
where
    T: Send + Sync + 'static,
    F: Fn(&T) -> Schema + Send + Sync + 'static,
{
    Box::new(move |state: &FieldState<'_, T>| {
        match Validator::new(build(state.value())).validate() {
            Ok(()) => Ok(()),
            Err(errors) => {
                debug!(
                    field = %state.name(),
                    failure_count = errors.failure_count(),
                    "nested schema failed"
                );
                Err(RuleFailure::new(errors.to_string()))
            }
        }
    })
}
