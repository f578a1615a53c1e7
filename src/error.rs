//! Crate-wide error type.

use thiserror::Error;

/// Errors raised by the matrix substrate, the engine and the schema layer.
#[derive(Debug, Error)]
pub enum Error {
    /// Operand shapes are incompatible for `op`. Shapes are `(rows, cols)`.
    #[error("shape mismatch in {op}: {left:?} vs {right:?}")]
    ShapeMismatch {
        op: &'static str,
        left: (usize, usize),
        right: (usize, usize),
    },

    #[error("model has not been trained")]
    Untrained,

    #[error("feature `{feature}` expects a {expected} value, got {found}")]
    TypeMismatch {
        feature: String,
        expected: &'static str,
        found: &'static str,
    },

    #[error("invalid config: {0}")]
    InvalidConfig(String),

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
