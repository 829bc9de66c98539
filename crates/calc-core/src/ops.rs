use crate::error::{CalcError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// Op
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Op {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Op {
    pub fn all() -> &'static [Op] {
        &[Op::Add, Op::Subtract, Op::Multiply, Op::Divide]
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Op::Add => "add",
            Op::Subtract => "subtract",
            Op::Multiply => "multiply",
            Op::Divide => "divide",
        }
    }

    /// Apply the operation to two operands.
    ///
    /// Division by exactly zero yields positive infinity rather than an
    /// error ("safe division"); callers cannot distinguish a legitimate
    /// infinite result from a zero divisor.
    pub fn apply(self, a: f64, b: f64) -> f64 {
        match self {
            Op::Add => a + b,
            Op::Subtract => a - b,
            Op::Multiply => a * b,
            Op::Divide => {
                if b == 0.0 {
                    f64::INFINITY
                } else {
                    a / b
                }
            }
        }
    }
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Op {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "add" => Ok(Op::Add),
            "subtract" => Ok(Op::Subtract),
            "multiply" => Ok(Op::Multiply),
            "divide" => Ok(Op::Divide),
            _ => Err(CalcError::UnknownOperation(s.to_string())),
        }
    }
}

/// Parse a CLI operand as a float, keeping the offending text in the error.
pub fn parse_operand(s: &str) -> Result<f64> {
    s.parse().map_err(|source| CalcError::InvalidOperand {
        value: s.to_string(),
        source,
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
