//! Plain data records the reference scenarios validate.
//!
//! These are ordinary, already-decoded values. Schemas are built from them
//! field by field; nothing here knows about validation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ── User profile ──────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub username: String,
    pub email: String,
    pub age: i64,
    pub is_active: bool,
    pub address: Address,
    pub interests: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    pub street: String,
    pub city: String,
    pub country: String,
    pub zip_code: String,
}

// ── Orders ────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub order_id: String,
    pub customer_id: String,
    pub order_date: DateTime<Utc>,
    pub ship_date: Option<DateTime<Utc>>,
    pub items: Vec<OrderItem>,
    pub shipping_info: ShippingAddress,
    pub payment_info: PaymentInfo,
    pub total_amount: f64,
    pub status: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    pub product_id: String,
    pub quantity: i64,
    pub unit_price: f64,
    pub discount: f64,
    pub description: String,
}

impl OrderItem {
    /// Line value after discount.
    pub fn total_value(&self) -> f64 {
        self.unit_price * self.quantity as f64 - self.discount
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShippingAddress {
    pub street: String,
    pub city: String,
    pub state: String,
    pub country: String,
    pub postal_code: String,
    pub is_residential: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentInfo {
    pub method: String,
    pub card_last_four: String,
    pub expiration_month: u32,
    pub expiration_year: i32,
    pub paid: bool,
}

// ── Registration ──────────────────────────────────────────────────────────────

/// A user registration request body, as decoded from JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationRequest {
    pub username: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub age: i64,
}
