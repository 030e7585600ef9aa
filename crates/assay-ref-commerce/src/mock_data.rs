//! Sample records for the assay commerce reference scenarios.
//!
//! All data in this module is hardcoded and fictional. Order dates are
//! computed relative to a caller-supplied `now` so the scenarios stay
//! deterministic under test.

use chrono::{DateTime, Datelike, Duration, Utc};

use crate::records::{Address, Order, OrderItem, PaymentInfo, ShippingAddress, User};

// ── Users ─────────────────────────────────────────────────────────────────────

/// A user that satisfies every profile rule.
pub fn valid_user() -> User {
    User {
        username: "john".to_string(),
        email: "johndoe@example.com".to_string(),
        age: 25,
        is_active: true,
        address: Address {
            street: "123 Main St".to_string(),
            city: "London".to_string(),
            country: "UK".to_string(),
            zip_code: "W1A 1AA".to_string(),
        },
        interests: vec!["reading".to_string(), "cycling".to_string()],
    }
}

/// A user that breaks rules at the top level and inside `address`.
///
/// Expected failures: `username` (too short), `email` (no `@`), `age`
/// (under 18), `interests` (empty), `address.street` (too short),
/// `address.city`, `address.country`, `address.zipCode` (all empty).
pub fn invalid_user() -> User {
    User {
        username: "j".to_string(),
        email: "invalid-email".to_string(),
        age: 15,
        is_active: false,
        address: Address {
            street: "123".to_string(),
            ..Address::default()
        },
        interests: Vec::new(),
    }
}

// ── Orders ────────────────────────────────────────────────────────────────────

fn headphones() -> OrderItem {
    OrderItem {
        product_id: "PROD-001".to_string(),
        quantity: 2,
        unit_price: 49.99,
        discount: 5.00,
        description: "Wireless Headphones".to_string(),
    }
}

/// An order placed at `now` that ships tomorrow.
pub fn valid_order(now: DateTime<Utc>) -> Order {
    Order {
        order_id: "ORD-12345".to_string(),
        customer_id: "CUST-789".to_string(),
        order_date: now - Duration::minutes(5),
        ship_date: Some(now + Duration::days(1)),
        items: vec![
            headphones(),
            OrderItem {
                product_id: "PROD-002".to_string(),
                quantity: 1,
                unit_price: 999.99,
                discount: 0.00,
                description: "Smartphone".to_string(),
            },
        ],
        shipping_info: ShippingAddress {
            street: "123 Main St".to_string(),
            city: "Boston".to_string(),
            state: "MA".to_string(),
            country: "USA".to_string(),
            postal_code: "02108".to_string(),
            is_residential: true,
        },
        payment_info: PaymentInfo {
            method: "credit_card".to_string(),
            card_last_four: "1234".to_string(),
            expiration_month: 12,
            expiration_year: now.year() + 2,
            paid: true,
        },
        total_amount: 1094.97,
        status: "processing".to_string(),
    }
}

/// The valid order with a ship date in the past, only cheap items, a
/// zero-quantity line, an unsupported payment method, and an unknown status.
pub fn invalid_order(now: DateTime<Utc>) -> Order {
    let mut order = valid_order(now);
    order.ship_date = Some(now - Duration::days(1));
    order.items = vec![
        headphones(),
        OrderItem {
            product_id: "PROD-003".to_string(),
            quantity: 0,
            unit_price: 9.99,
            discount: 0.00,
            description: "Budget Earbuds".to_string(),
        },
    ];
    order.payment_info.method = "bitcoin".to_string();
    order.status = "lost".to_string();
    order
}

// ── Registration bodies ───────────────────────────────────────────────────────

/// A request body that passes registration.
pub const VALID_REGISTRATION: &str = r#"{
  "username": "johndoe",
  "email": "john@example.com",
  "password": "Password123",
  "confirmPassword": "Password123",
  "age": 25
}"#;

/// A decodable body that fails several rules.
pub const INVALID_REGISTRATION: &str = r#"{
  "username": "jo",
  "email": "john.example.com",
  "password": "password",
  "confirmPassword": "Password123",
  "age": 16
}"#;

/// A body that cannot be decoded at all.
pub const MALFORMED_REGISTRATION: &str = r#"{ "username": "johndoe", "age": "#;
