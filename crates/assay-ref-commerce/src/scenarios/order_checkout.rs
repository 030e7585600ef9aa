//! Scenario 2: Order Checkout
//!
//! Validates an order with date rules, slice rules over the line items, a
//! per-item nested schema, and nested shipping and payment sections. Rules
//! that compare against the clock take `now` as a parameter so results are
//! reproducible.

use chrono::{DateTime, Datelike, Utc};
use tracing::info;

use assay_contracts::{error::AssayResult, rule_fn, FieldState, Rule, RuleFailure};
use assay_core::{Entry, Field, Schema, Validator};
use assay_rules::{in_s, len_s, max_len, min_len, min_n, min_s, not_zero, some};

use crate::mock_data::{invalid_order, valid_order};
use crate::records::{Order, OrderItem, PaymentInfo};
use crate::scenarios::print_outcome;

/// Payment methods the checkout accepts.
pub const PAYMENT_METHODS: [&str; 4] = ["credit_card", "debit_card", "paypal", "bank_transfer"];

/// Order statuses the checkout recognises.
pub const ORDER_STATUSES: [&str; 5] = ["pending", "processing", "shipped", "delivered", "cancelled"];

// ── Rules ─────────────────────────────────────────────────────────────────────

/// The date must not be after `now`.
pub fn past_date(now: DateTime<Utc>) -> Rule<DateTime<Utc>> {
    rule_fn(move |state: &FieldState<'_, DateTime<Utc>>| {
        if *state.value() > now {
            Err(RuleFailure::new("date must be in the past"))
        } else {
            Ok(())
        }
    })
}

/// The date, when present, must be after `now`.
pub fn future_date(now: DateTime<Utc>) -> Rule<Option<DateTime<Utc>>> {
    rule_fn(move |state: &FieldState<'_, Option<DateTime<Utc>>>| match state.value() {
        Some(date) if *date <= now => Err(RuleFailure::new("date must be in the future")),
        _ => Ok(()),
    })
}

/// A line item must be worth at least `min_value` after discount.
pub fn has_minimum_value(min_value: f64) -> Rule<OrderItem> {
    rule_fn(move |state: &FieldState<'_, OrderItem>| {
        let total = state.value().total_value();
        if total < min_value {
            Err(RuleFailure::new(format!(
                "total item value ({total:.2}) is below minimum threshold of {min_value:.2}"
            )))
        } else {
            Ok(())
        }
    })
}

fn valid_payment_method() -> Rule<String> {
    rule_fn(|state: &FieldState<'_, String>| {
        if PAYMENT_METHODS.contains(&state.value().as_str()) {
            Ok(())
        } else {
            Err(RuleFailure::new(format!(
                "invalid payment method: must be one of {}",
                PAYMENT_METHODS.join(", ")
            )))
        }
    })
}

/// `(month, year)` must not be before the month of `now`.
fn valid_card_expiration(now: DateTime<Utc>) -> Rule<(u32, i32)> {
    rule_fn(move |state: &FieldState<'_, (u32, i32)>| {
        let (month, year) = *state.value();
        if !(1..=12).contains(&month) {
            return Err(RuleFailure::new(format!("expiration month {month} is not a month")));
        }
        if (year, month) < (now.year(), now.month()) {
            Err(RuleFailure::new("card expiration date is invalid"))
        } else {
            Ok(())
        }
    })
}

// ── Schemas ───────────────────────────────────────────────────────────────────

fn item_schema(item: &OrderItem) -> Schema {
    Schema::new()
        .field("productID", Field::new(item.product_id.clone()).rule(not_zero()))
        .field("quantity", Field::new(item.quantity).rule(min_n(1)))
        .field("unitPrice", Field::new(item.unit_price).rule(min_n(0.01)))
}

/// Schema for one payment record, with expiration judged against `now`.
pub fn payment_schema(payment: &PaymentInfo, now: DateTime<Utc>) -> Schema {
    Schema::new()
        .field("method", Field::new(payment.method.clone()).rule(valid_payment_method()))
        .field(
            "cardLastFour",
            Field::new(payment.card_last_four.clone()).rule(not_zero()).rule(len_s(4)),
        )
        .field(
            "expiration",
            Field::new((payment.expiration_month, payment.expiration_year))
                .rule(valid_card_expiration(now)),
        )
}

/// Build the checkout schema for `order`, judging dates against `now`.
pub fn order_schema(order: &Order, now: DateTime<Utc>) -> Schema {
    let line_items: Schema = order
        .items
        .iter()
        .enumerate()
        .map(|(i, item)| (format!("item{i}"), Entry::from(item_schema(item))))
        .collect();

    Schema::new()
        .field(
            "orderID",
            Field::new(order.order_id.clone()).rule(not_zero()).rule(min_s(5)),
        )
        .field("customerID", Field::new(order.customer_id.clone()).rule(not_zero()))
        .field("orderDate", Field::new(order.order_date).rule(past_date(now)))
        .field(
            "shipDate",
            Field::new(order.ship_date).rule(not_zero()).rule(future_date(now)),
        )
        .field(
            "items",
            Field::new(order.items.clone())
                .rule(min_len(1))
                .rule(max_len(10))
                .rule(some(has_minimum_value(100.0))),
        )
        .nested("lineItems", line_items)
        .nested(
            "shippingInfo",
            Schema::new()
                .field(
                    "street",
                    Field::new(order.shipping_info.street.clone()).rule(not_zero()).rule(min_s(5)),
                )
                .field(
                    "city",
                    Field::new(order.shipping_info.city.clone()).rule(not_zero()).rule(min_s(2)),
                )
                .field(
                    "state",
                    Field::new(order.shipping_info.state.clone()).rule(not_zero()).rule(min_s(2)),
                )
                .field(
                    "country",
                    Field::new(order.shipping_info.country.clone()).rule(not_zero()).rule(min_s(2)),
                )
                .field(
                    "postalCode",
                    Field::new(order.shipping_info.postal_code.clone()).rule(not_zero()),
                ),
        )
        .nested_from(
            "paymentInfo",
            order.payment_info.clone(),
            move |payment: &PaymentInfo| payment_schema(payment, now),
        )
        .field("totalAmount", Field::new(order.total_amount).rule(min_n(0.0)))
        .field("status", Field::new(order.status.clone()).rule(in_s(ORDER_STATUSES)))
}

// ── Scenario runner ───────────────────────────────────────────────────────────

/// Run Scenario 2: Order Checkout.
pub fn run_scenario() -> AssayResult<()> {
    println!("=== Scenario 2: Order Checkout ===");
    println!();

    let now = Utc::now();

    let order = valid_order(now);
    Validator::new(order_schema(&order, now)).validate()?;
    print_outcome("valid order", &Ok(()));

    let order = invalid_order(now);
    let outcome = Validator::new(order_schema(&order, now)).validate();
    if let Err(errors) = &outcome {
        info!(
            order_id = %order.order_id,
            failure_count = errors.failure_count(),
            "invalid order rejected as expected"
        );
    }
    print_outcome("invalid order", &outcome);

    println!();
    println!("  Scenario 2 complete.");
    println!();

    Ok(())
}
