//! The set of operations the engine understands.
//!
//! Every operation carries its own metadata (name, symbol, arity, group),
//! so callers never need a parallel lookup table to describe one.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of operands an operation consumes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Arity {
    Unary,
    Binary,
}

impl Arity {
    /// Operand count as a plain number.
    pub fn count(self) -> usize {
        match self {
            Self::Unary => 1,
            Self::Binary => 2,
        }
    }
}

/// Menu grouping used by the console.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Group {
    Basic,
    Advanced,
}

/// A single calculator operation.
///
/// # Example
///
/// ```rust
/// use calcshell::core::{Arity, Operation};
///
/// assert_eq!(Operation::Add.arity(), Arity::Binary);
/// assert_eq!(Operation::SquareRoot.arity(), Arity::Unary);
/// assert_eq!(Operation::Power.symbol(), "^");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
    Modulus,
    Power,
    SquareRoot,
    Log,
    Sin,
    Cos,
    Tan,
}

impl Operation {
    /// Every operation, basic group first, in menu order.
    pub const ALL: [Operation; 11] = [
        Self::Add,
        Self::Subtract,
        Self::Multiply,
        Self::Divide,
        Self::Modulus,
        Self::Power,
        Self::SquareRoot,
        Self::Log,
        Self::Sin,
        Self::Cos,
        Self::Tan,
    ];

    /// Human-readable name for display and logging.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Add => "Addition",
            Self::Subtract => "Subtraction",
            Self::Multiply => "Multiplication",
            Self::Divide => "Division",
            Self::Modulus => "Modulus",
            Self::Power => "Power",
            Self::SquareRoot => "Square Root",
            Self::Log => "Natural Logarithm",
            Self::Sin => "Sine",
            Self::Cos => "Cosine",
            Self::Tan => "Tangent",
        }
    }

    /// Operator symbol. Infix for binary operations, a function name for
    /// unary ones.
    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "*",
            Self::Divide => "/",
            Self::Modulus => "%",
            Self::Power => "^",
            Self::SquareRoot => "sqrt",
            Self::Log => "ln",
            Self::Sin => "sin",
            Self::Cos => "cos",
            Self::Tan => "tan",
        }
    }

    pub fn arity(&self) -> Arity {
        match self {
            Self::SquareRoot | Self::Log | Self::Sin | Self::Cos | Self::Tan => Arity::Unary,
            _ => Arity::Binary,
        }
    }

    pub fn group(&self) -> Group {
        match self {
            Self::Add | Self::Subtract | Self::Multiply | Self::Divide | Self::Modulus => {
                Group::Basic
            }
            _ => Group::Advanced,
        }
    }

    /// Whether the operation takes an angle in radians.
    pub fn is_trigonometric(&self) -> bool {
        matches!(self, Self::Sin | Self::Cos | Self::Tan)
    }

    /// Operations belonging to `group`, in menu order.
    pub fn in_group(group: Group) -> impl Iterator<Item = Operation> {
        Self::ALL.into_iter().filter(move |op| op.group() == group)
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
