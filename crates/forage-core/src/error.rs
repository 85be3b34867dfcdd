//! Core error type.
//!
//! Sub-crates define their own error enums for their own failure modes
//! (`WalkError`, `SearchError`, `SpatialError`, `OutputError`); this enum
//! covers construction errors for the primitives that live here.

use thiserror::Error;

/// Errors raised when constructing `forage-core` primitives.
#[derive(Debug, Error)]
pub enum ForageError {
    #[error("power-law exponent must exceed 1, got {0}")]
    InvalidExponent(f64),

    #[error("invalid length bounds [{low}, {high}]")]
    InvalidBounds { low: f64, high: f64 },

    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for `forage-core` constructors.
pub type ForageResult<T> = Result<T, ForageError>;
