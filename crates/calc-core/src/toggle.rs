use crate::error::{CalcError, Result};
use crate::flags::FeatureFlags;
use crate::ops::Op;
use serde::Serialize;
use std::collections::BTreeMap;

type BinaryFn = fn(f64, f64) -> f64;

// ---------------------------------------------------------------------------
// HistoryEntry
// ---------------------------------------------------------------------------

/// One recorded invocation: operation, operands, and result.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HistoryEntry {
    pub op: Op,
    pub a: f64,
    pub b: f64,
    pub result: f64,
}

// ---------------------------------------------------------------------------
// ToggleCalculator
// ---------------------------------------------------------------------------

/// Calculator whose operation registry is populated from feature flags.
///
/// Flags are read once at construction: an operation is callable if and only
/// if its flag was true when the instance was built, and toggling flags
/// afterwards does not affect an existing instance.
#[derive(Debug)]
pub struct ToggleCalculator {
    ops: BTreeMap<Op, BinaryFn>,
    history_enabled: bool,
    history: Vec<HistoryEntry>,
}

fn add(a: f64, b: f64) -> f64 {
    Op::Add.apply(a, b)
}

fn subtract(a: f64, b: f64) -> f64 {
    Op::Subtract.apply(a, b)
}

fn multiply(a: f64, b: f64) -> f64 {
    Op::Multiply.apply(a, b)
}

fn divide(a: f64, b: f64) -> f64 {
    Op::Divide.apply(a, b)
}

impl ToggleCalculator {
    pub fn new(flags: &FeatureFlags) -> Self {
        let mut ops: BTreeMap<Op, BinaryFn> = BTreeMap::new();
        if flags.add {
            ops.insert(Op::Add, add);
        }
        if flags.subtract {
            ops.insert(Op::Subtract, subtract);
        }
        if flags.multiply {
            ops.insert(Op::Multiply, multiply);
        }
        if flags.divide {
            ops.insert(Op::Divide, divide);
        }
        Self {
            ops,
            history_enabled: flags.history,
            history: Vec::new(),
        }
    }

    /// Run an enabled operation; disabled or unregistered operations fail
    /// with [`CalcError::FeatureUnavailable`] and leave history untouched.
    pub fn run(&mut self, op: Op, a: f64, b: f64) -> Result<f64> {
        let f = self
            .ops
            .get(&op)
            .ok_or_else(|| CalcError::FeatureUnavailable(op.to_string()))?;
        let result = f(a, b);
        tracing::debug!(op = %op, a, b, result, "ran operation");

        if self.history_enabled {
            self.history.push(HistoryEntry { op, a, b, result });
        }

        Ok(result)
    }

    /// Recorded invocations in call order, as an immutable view.
    pub fn history(&self) -> Result<&[HistoryEntry]> {
        if !self.history_enabled {
            return Err(CalcError::HistoryDisabled);
        }
        Ok(&self.history)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
