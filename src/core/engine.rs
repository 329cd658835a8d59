//! Validated arithmetic.
//!
//! Every operation runs through the same pipeline:
//!
//! 1. operand count must match the operation's arity,
//! 2. every operand must be finite,
//! 3. the operation's own zero/domain rules,
//! 4. the computation itself,
//! 5. classification of a non-finite result.
//!
//! The first failing step decides the error. All functions here are pure.

use super::error::{CalcError, CalcResult};
use super::operation::Operation;
use tracing::debug;

/// Divisors with a magnitude at or below this value count as zero.
pub const DIVISION_EPSILON: f64 = 1e-15;

/// Largest integer magnitude accepted by [`modulus`] (2^53 - 1). Every
/// integer up to this bound has an exact `f64` representation.
pub const MAX_SAFE_INTEGER: i64 = 9_007_199_254_740_991;

/// Handle to the calculation engine.
///
/// The engine holds no state; constructing one through [`Engine::init`]
/// proves the floating-point sanity check passed.
///
/// # Example
///
/// ```rust
/// use calcshell::core::{CalcError, Engine, Operation};
///
/// let engine = Engine::init().unwrap();
/// assert_eq!(engine.compute(Operation::Add, &[5.0, 3.0]), Ok(8.0));
/// assert_eq!(
///     engine.compute(Operation::Divide, &[5.0, 0.0]),
///     Err(CalcError::DivisionByZero)
/// );
/// ```
#[derive(Clone, Copy, Debug)]
pub struct Engine {
    _private: (),
}

impl Engine {
    /// Create an engine after checking that `1.0` and `0.0` are finite on
    /// this platform.
    pub fn init() -> Result<Self, CalcError> {
        if !(1.0_f64.is_finite() && 0.0_f64.is_finite()) {
            return Err(CalcError::InvalidInput);
        }
        Ok(Self { _private: () })
    }

    /// Run `op` over `operands`. See [`compute`].
    pub fn compute(&self, op: Operation, operands: &[f64]) -> CalcResult {
        compute(op, operands)
    }
}

/// Run `op` over `operands`.
///
/// `operands` must hold exactly as many values as the operation's arity,
/// otherwise the call fails with [`CalcError::InvalidInput`].
pub fn compute(op: Operation, operands: &[f64]) -> CalcResult {
    debug!(operation = op.name(), ?operands, "computing");

    if operands.len() != op.arity().count() {
        debug!(
            operation = op.name(),
            expected = op.arity().count(),
            got = operands.len(),
            "operand count mismatch"
        );
        return Err(CalcError::InvalidInput);
    }

    let result = match op {
        Operation::Add => add(operands[0], operands[1]),
        Operation::Subtract => subtract(operands[0], operands[1]),
        Operation::Multiply => multiply(operands[0], operands[1]),
        Operation::Divide => divide(operands[0], operands[1]),
        Operation::Modulus => modulus(operands[0], operands[1]),
        Operation::Power => power(operands[0], operands[1]),
        Operation::SquareRoot => sqrt(operands[0]),
        Operation::Log => ln(operands[0]),
        Operation::Sin => sin(operands[0]),
        Operation::Cos => cos(operands[0]),
        Operation::Tan => tan(operands[0]),
    };

    match &result {
        Ok(value) => debug!(operation = op.name(), value, "computed"),
        Err(error) => debug!(operation = op.name(), %error, "calculation rejected"),
    }
    result
}

pub fn add(a: f64, b: f64) -> CalcResult {
    ensure_finite(&[a, b])?;
    classify(a + b)
}

pub fn subtract(a: f64, b: f64) -> CalcResult {
    ensure_finite(&[a, b])?;
    classify(a - b)
}

pub fn multiply(a: f64, b: f64) -> CalcResult {
    ensure_finite(&[a, b])?;
    classify(a * b)
}

/// `a / b`, rejecting divisors within [`DIVISION_EPSILON`] of zero.
pub fn divide(a: f64, b: f64) -> CalcResult {
    ensure_finite(&[a, b])?;
    if b.abs() <= DIVISION_EPSILON {
        return Err(CalcError::DivisionByZero);
    }
    classify(a / b)
}

/// Integer remainder of `a / b`, carrying the sign of the dividend.
///
/// A zero divisor is reported before operand range is considered, so
/// `modulus(x, 0.0)` is a division by zero for every finite `x`. Both
/// operands must then be whole numbers no larger than [`MAX_SAFE_INTEGER`].
///
/// # Example
///
/// ```rust
/// use calcshell::core::engine::modulus;
/// use calcshell::core::CalcError;
///
/// assert_eq!(modulus(7.0, 3.0), Ok(1.0));
/// assert_eq!(modulus(-7.0, 3.0), Ok(-1.0));
/// assert_eq!(modulus(1e300, 0.0), Err(CalcError::DivisionByZero));
/// assert_eq!(modulus(7.5, 2.0), Err(CalcError::InvalidInput));
/// ```
pub fn modulus(a: f64, b: f64) -> CalcResult {
    ensure_finite(&[a, b])?;
    if b == 0.0 {
        return Err(CalcError::DivisionByZero);
    }
    let dividend = to_safe_integer(a)?;
    let divisor = to_safe_integer(b)?;
    let remainder = dividend
        .checked_rem(divisor)
        .ok_or(CalcError::InvalidInput)?;
    classify(remainder as f64)
}

/// `base` raised to `exponent`.
///
/// Zero to a negative power is a division by zero; a negative base with a
/// fractional exponent has no real result.
pub fn power(base: f64, exponent: f64) -> CalcResult {
    ensure_finite(&[base, exponent])?;
    if base == 0.0 && exponent < 0.0 {
        return Err(CalcError::DivisionByZero);
    }
    if base < 0.0 && exponent.fract() != 0.0 {
        return Err(CalcError::DomainError);
    }
    classify(base.powf(exponent))
}

pub fn sqrt(a: f64) -> CalcResult {
    ensure_finite(&[a])?;
    if a < 0.0 {
        return Err(CalcError::DomainError);
    }
    classify(a.sqrt())
}

/// Natural logarithm.
pub fn ln(a: f64) -> CalcResult {
    ensure_finite(&[a])?;
    if a <= 0.0 {
        return Err(CalcError::DomainError);
    }
    classify(a.ln())
}

pub fn sin(radians: f64) -> CalcResult {
    ensure_finite(&[radians])?;
    classify(radians.sin())
}

pub fn cos(radians: f64) -> CalcResult {
    ensure_finite(&[radians])?;
    classify(radians.cos())
}

pub fn tan(radians: f64) -> CalcResult {
    ensure_finite(&[radians])?;
    classify(radians.tan())
}

fn ensure_finite(operands: &[f64]) -> Result<(), CalcError> {
    if operands.iter().all(|v| v.is_finite()) {
        Ok(())
    } else {
        Err(CalcError::InvalidInput)
    }
}

/// Map a raw result onto the error taxonomy. A zero result is a valid
/// value, never an underflow.
fn classify(value: f64) -> CalcResult {
    if value.is_nan() {
        Err(CalcError::InvalidInput)
    } else if value == f64::INFINITY {
        Err(CalcError::Overflow)
    } else if value == f64::NEG_INFINITY {
        Err(CalcError::Underflow)
    } else {
        Ok(value)
    }
}

fn to_safe_integer(value: f64) -> Result<i64, CalcError> {
    if value.fract() != 0.0 || value.abs() > MAX_SAFE_INTEGER as f64 {
        return Err(CalcError::InvalidInput);
    }
    Ok(value as i64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::{E, FRAC_PI_2, FRAC_PI_4};

    fn approx(actual: CalcResult, expected: f64) {
        let value = actual.expect("expected a value");
        assert!(
            (value - expected).abs() < 1e-9,
            "expected {expected}, got {value}"
        );
    }

    #[test]
    fn init_succeeds() {
        assert!(Engine::init().is_ok());
    }

    #[test]
    fn basic_arithmetic() {
        assert_eq!(add(5.0, 3.0), Ok(8.0));
        assert_eq!(subtract(5.0, 3.0), Ok(2.0));
        assert_eq!(multiply(5.0, 3.0), Ok(15.0));
        assert_eq!(divide(6.0, 3.0), Ok(2.0));
    }

    #[test]
    fn addition_overflow_and_underflow() {
        assert_eq!(add(f64::MAX, f64::MAX), Err(CalcError::Overflow));
        assert_eq!(add(-f64::MAX, -f64::MAX), Err(CalcError::Underflow));
        assert_eq!(subtract(-f64::MAX, f64::MAX), Err(CalcError::Underflow));
        assert_eq!(multiply(f64::MAX, 2.0), Err(CalcError::Overflow));
        assert_eq!(multiply(f64::MAX, -2.0), Err(CalcError::Underflow));
    }

    #[test]
    fn non_finite_operands_are_invalid() {
        assert_eq!(add(f64::NAN, 1.0), Err(CalcError::InvalidInput));
        assert_eq!(add(1.0, f64::INFINITY), Err(CalcError::InvalidInput));
        assert_eq!(sqrt(f64::NEG_INFINITY), Err(CalcError::InvalidInput));
        assert_eq!(divide(f64::NAN, 0.0), Err(CalcError::InvalidInput));
    }

    #[test]
    fn divide_rejects_near_zero_divisors() {
        assert_eq!(divide(5.0, 0.0), Err(CalcError::DivisionByZero));
        assert_eq!(divide(-5.0, -0.0), Err(CalcError::DivisionByZero));
        assert_eq!(divide(1.0, 1e-16), Err(CalcError::DivisionByZero));
        assert_eq!(divide(1.0, DIVISION_EPSILON), Err(CalcError::DivisionByZero));
        assert!(divide(1.0, 1e-14).is_ok());
    }

    #[test]
    fn divide_overflow_is_classified() {
        assert_eq!(divide(f64::MAX, 0.5), Err(CalcError::Overflow));
        assert_eq!(divide(-f64::MAX, 0.5), Err(CalcError::Underflow));
    }

    #[test]
    fn modulus_follows_integer_semantics() {
        assert_eq!(modulus(7.0, 3.0), Ok(1.0));
        assert_eq!(modulus(-7.0, 3.0), Ok(-1.0));
        assert_eq!(modulus(7.0, -3.0), Ok(1.0));
        assert_eq!(modulus(6.0, 3.0), Ok(0.0));
    }

    #[test]
    fn modulus_zero_divisor_wins_over_range() {
        assert_eq!(modulus(7.0, 0.0), Err(CalcError::DivisionByZero));
        assert_eq!(modulus(1e300, 0.0), Err(CalcError::DivisionByZero));
        assert_eq!(modulus(0.5, 0.0), Err(CalcError::DivisionByZero));
    }

    #[test]
    fn modulus_rejects_unrepresentable_operands() {
        assert_eq!(modulus(1e300, 3.0), Err(CalcError::InvalidInput));
        assert_eq!(modulus(7.5, 2.0), Err(CalcError::InvalidInput));
        assert_eq!(modulus(7.0, 0.5), Err(CalcError::InvalidInput));
        assert_eq!(
            modulus(MAX_SAFE_INTEGER as f64, 2.0),
            Ok(1.0),
            "upper bound is inclusive"
        );
    }

    #[test]
    fn power_rules() {
        assert_eq!(power(2.0, 3.0), Ok(8.0));
        assert_eq!(power(2.0, 10.0), Ok(1024.0));
        assert_eq!(power(-2.0, 3.0), Ok(-8.0));
        assert_eq!(power(0.0, 0.0), Ok(1.0));
        assert_eq!(power(0.0, -1.0), Err(CalcError::DivisionByZero));
        assert_eq!(power(-2.0, 0.5), Err(CalcError::DomainError));
        assert_eq!(power(10.0, 400.0), Err(CalcError::Overflow));
        assert_eq!(power(-10.0, 401.0), Err(CalcError::Underflow));
    }

    #[test]
    fn power_collapsing_to_zero_is_a_value() {
        assert_eq!(power(10.0, -400.0), Ok(0.0));
    }

    #[test]
    fn sqrt_and_ln_domains() {
        assert_eq!(sqrt(9.0), Ok(3.0));
        assert_eq!(sqrt(0.0), Ok(0.0));
        assert_eq!(sqrt(-4.0), Err(CalcError::DomainError));
        approx(ln(E), 1.0);
        assert_eq!(ln(1.0), Ok(0.0));
        assert_eq!(ln(0.0), Err(CalcError::DomainError));
        assert_eq!(ln(-2.0), Err(CalcError::DomainError));
    }

    #[test]
    fn trigonometry_uses_radians() {
        approx(sin(FRAC_PI_2), 1.0);
        assert_eq!(cos(0.0), Ok(1.0));
        approx(tan(FRAC_PI_4), 1.0);
        assert_eq!(sin(0.0), Ok(0.0));
    }

    #[test]
    fn compute_checks_operand_count_first() {
        assert_eq!(compute(Operation::Add, &[1.0]), Err(CalcError::InvalidInput));
        assert_eq!(
            compute(Operation::SquareRoot, &[4.0, 1.0]),
            Err(CalcError::InvalidInput)
        );
        assert_eq!(compute(Operation::Divide, &[]), Err(CalcError::InvalidInput));
        // Count is checked before the divisor, so this is not a division error.
        assert_eq!(compute(Operation::Divide, &[0.0]), Err(CalcError::InvalidInput));
    }

    #[test]
    fn compute_dispatches_every_operation() {
        let engine = Engine::init().unwrap();
        assert_eq!(engine.compute(Operation::Add, &[5.0, 3.0]), Ok(8.0));
        assert_eq!(engine.compute(Operation::Subtract, &[5.0, 3.0]), Ok(2.0));
        assert_eq!(engine.compute(Operation::Multiply, &[5.0, 3.0]), Ok(15.0));
        assert_eq!(engine.compute(Operation::Divide, &[6.0, 3.0]), Ok(2.0));
        assert_eq!(engine.compute(Operation::Modulus, &[7.0, 3.0]), Ok(1.0));
        assert_eq!(engine.compute(Operation::Power, &[2.0, 10.0]), Ok(1024.0));
        assert_eq!(engine.compute(Operation::SquareRoot, &[16.0]), Ok(4.0));
        assert_eq!(engine.compute(Operation::Log, &[1.0]), Ok(0.0));
        assert_eq!(engine.compute(Operation::Sin, &[0.0]), Ok(0.0));
        assert_eq!(engine.compute(Operation::Cos, &[0.0]), Ok(1.0));
        assert_eq!(engine.compute(Operation::Tan, &[0.0]), Ok(0.0));
    }

    #[test]
    fn compute_reports_errors_by_kind() {
        assert_eq!(
            compute(Operation::Divide, &[5.0, 0.0]),
            Err(CalcError::DivisionByZero)
        );
        assert_eq!(
            compute(Operation::SquareRoot, &[-4.0]),
            Err(CalcError::DomainError)
        );
        assert_eq!(
            compute(Operation::Add, &[f64::NAN, 1.0]),
            Err(CalcError::InvalidInput)
        );
    }
}
