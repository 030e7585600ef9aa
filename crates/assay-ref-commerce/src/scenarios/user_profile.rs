//! Scenario 1: User Profile
//!
//! Validates a flat user record with one nested schema (`address`). The
//! valid profile passes; the invalid one fails at both levels and the
//! report shows every failure from a single pass.

use tracing::info;

use assay_contracts::error::AssayResult;
use assay_core::{Field, Schema, Validator};
use assay_rules::{every, max_n, max_s, min_len, min_n, min_s, not_zero};

use crate::mock_data::{invalid_user, valid_user};
use crate::records::User;
use crate::scenarios::{print_outcome, valid_email};

/// Build the profile schema for `user`.
pub fn user_schema(user: &User) -> Schema {
    Schema::new()
        .field(
            "username",
            Field::new(user.username.clone()).rule(min_s(3)).rule(max_s(20)),
        )
        .field(
            "email",
            Field::new(user.email.clone()).rule(not_zero()).rule(valid_email()),
        )
        .field("age", Field::new(user.age).rule(min_n(18)).rule(max_n(120)))
        .field("isActive", Field::new(user.is_active))
        .nested(
            "address",
            Schema::new()
                .field(
                    "street",
                    Field::new(user.address.street.clone()).rule(not_zero()).rule(min_s(5)),
                )
                .field(
                    "city",
                    Field::new(user.address.city.clone()).rule(not_zero()).rule(min_s(2)),
                )
                .field(
                    "country",
                    Field::new(user.address.country.clone()).rule(not_zero()).rule(min_s(2)),
                )
                .field("zipCode", Field::new(user.address.zip_code.clone()).rule(not_zero())),
        )
        .field(
            "interests",
            Field::new(user.interests.clone()).rule(min_len(1)).rule(every(min_s(3))),
        )
}

/// Run Scenario 1: User Profile.
pub fn run_scenario() -> AssayResult<()> {
    println!("=== Scenario 1: User Profile ===");
    println!();

    // The valid profile must pass; a failure here is a scenario error.
    let user = valid_user();
    Validator::new(user_schema(&user)).validate()?;
    print_outcome("valid profile", &Ok(()));

    let user = invalid_user();
    let outcome = Validator::new(user_schema(&user)).validate();
    if let Err(errors) = &outcome {
        info!(failure_count = errors.failure_count(), "invalid profile rejected as expected");
    }
    print_outcome("invalid profile", &outcome);

    println!();
    println!("  Scenario 1 complete.");
    println!();

    Ok(())
}
