//! Ambient error types for the assay workspace.
//!
//! Rule failures are not errors in this sense: they are collected into a
//! [`ValidationError`] tree and never short-circuit a pass. `AssayError`
//! covers everything around the engine: rendering a tree, loading
//! configuration, decoding caller payloads, and propagating a failed pass
//! with `?`.

use thiserror::Error;

use crate::tree::ValidationError;

/// The unified error type for the assay crates.
#[derive(Debug, Error)]
pub enum AssayError {
    /// An error tree could not be rendered to, or rebuilt from, JSON.
    #[error("serialization error: {reason}")]
    Serialization { reason: String },

    /// A configuration file is missing or does not match its expected shape.
    #[error("configuration error: {reason}")]
    ConfigError { reason: String },

    /// A caller-supplied payload could not be decoded into the value it
    /// describes. Raised before any schema is built.
    #[error("invalid input: {reason}")]
    InvalidInput { reason: String },

    /// A validation pass failed. The full tree is preserved.
    #[error("validation failed: {0}")]
    Validation(Box<ValidationError>),
}

impl From<ValidationError> for AssayError {
    fn from(tree: ValidationError) -> Self {
        AssayError::Validation(Box::new(tree))
    }
}

/// Convenience alias used throughout the assay crates.
pub type AssayResult<T> = Result<T, AssayError>;
