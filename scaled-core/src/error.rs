//! Errors reported by checked quantity arithmetic.

use thiserror::Error;

/// Why a checked operation on a [`Quantity`](crate::Quantity) was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum QuantityError {
    /// The result is above the largest value of the element type.
    #[error("arithmetic overflow")]
    Overflow,
    /// The result is below the smallest value of the element type.
    #[error("arithmetic underflow")]
    Underflow,
    /// Rescaling an operand into the common unit overflowed the element type.
    #[error("rescaling by {factor} overflows the element type")]
    RescaleOverflow {
        /// The rescale factor that was applied.
        factor: u64,
    },
    /// Division by a zero scalar.
    #[error("division by zero")]
    DivisionByZero,
}

/// Result alias for checked quantity arithmetic.
pub type QuantityResult<T> = core::result::Result<T, QuantityError>;
