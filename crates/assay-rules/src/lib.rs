//! # assay-rules
//!
//! Ready-made rules for the assay validation engine.
//!
//! Every rule here plugs into a [`Field`](assay_core::Field) through the
//! single rule contract: it receives a [`FieldState`](assay_contracts::FieldState)
//! and passes or fails with a message. Rules close over their comparison
//! parameters and hold no other state.
//!
//! | Module | Value type | Rules |
//! |---|---|---|
//! | [`numeric`] | any ordered value | `min_n`, `max_n`, `gt`, `gte`, `lt`, `lte`, `neq_n` |
//! | [`strings`] | `String` | `min_s`, `max_s`, `len_s`, `in_s`, `not_in_s`, `contains_s` |
//! | [`comparable`] | any `PartialEq` value | `not_zero`, `same_as` |
//! | [`slices`] | `Vec<T>` | `min_len`, `max_len`, `exact_len`, `contains`, `every`, `some`, `none` |
//! | [`nested`] | any value | `nested` |
//!
//! ## Quick start
//!
//! ```rust,ignore
//! use assay_core::{Field, Schema, Validator};
//! use assay_rules::{max_s, min_n, min_s};
//!
//! let schema = Schema::new()
//!     .field("username", Field::new("john doe".to_string()).rule(min_s(3)).rule(max_s(20)))
//!     .field("age", Field::new(25).rule(min_n(18)));
//!
//! assert!(Validator::new(schema).validate().is_ok());
//! ```

pub mod comparable;
pub mod nested;
pub mod numeric;
pub mod slices;
pub mod strings;

pub use comparable::{not_zero, same_as};
pub use nested::nested;
pub use numeric::{gt, gte, lt, lte, max_n, min_n, neq_n, Ordered};
pub use slices::{contains, every, exact_len, max_len, min_len, none, some};
pub use strings::{contains_s, in_s, len_s, max_s, min_s, not_in_s};
