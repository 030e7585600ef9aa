//! # assay-core
//!
//! The schema-driven validation engine.
//!
//! This crate provides:
//! - [`Field`], one value bound to an ordered list of rules
//! - [`Schema`], a recursively nestable map of fields and schemas
//! - [`Nested`], a leaf that builds its schema from its own value
//! - [`Validator`], which runs a whole-tree pass and returns the error tree
//!
//! ## Usage
//!
//! ```rust,ignore
//! use assay_core::{Field, Schema, Validator};
//! use assay_rules::{min_n, min_s, not_zero};
//!
//! let schema = Schema::new()
//!     .field("username", Field::new(name).rule(min_s(3)))
//!     .field("age", Field::new(age).rule(min_n(18)))
//!     .nested("address", Schema::new().field("city", Field::new(city).rule(not_zero())));
//!
//! if let Err(errors) = Validator::new(schema).validate() {
//!     println!("{errors}");
//! }
//! ```

pub mod field;
pub mod nested;
pub mod schema;
pub mod traits;
pub mod validator;

pub use field::Field;
pub use nested::Nested;
pub use schema::{Entry, Schema};
pub use traits::FieldCheck;
pub use validator::Validator;
