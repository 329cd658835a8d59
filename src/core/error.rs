//! Calculation error taxonomy.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Reasons a calculation can fail.
///
/// The taxonomy is flat: no error wraps another, and none is fatal to the
/// session.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CalcError {
    /// Divisor too close to zero, zero modulus divisor, or zero raised to a
    /// negative power.
    #[error("Division by zero is not allowed")]
    DivisionByZero,

    /// Operand outside the mathematical domain of the operation.
    #[error("Math domain error: invalid input for this operation")]
    DomainError,

    /// Result is positive infinity.
    #[error("Result overflowed")]
    Overflow,

    /// Result is negative infinity.
    #[error("Result underflowed")]
    Underflow,

    /// Non-finite operand, wrong operand count, or an operand the
    /// operation cannot represent.
    #[error("Invalid input")]
    InvalidInput,
}

/// Outcome of a single calculation.
pub type CalcResult = Result<f64, CalcError>;
