use crate::error::Result;
use crate::ops::Op;
use serde::{Deserialize, Serialize};
use std::path::Path;

// ---------------------------------------------------------------------------
// FeatureFlags
// ---------------------------------------------------------------------------

/// Feature toggle configuration: one flag per operation plus `history`.
///
/// Passed explicitly into [`crate::toggle::ToggleCalculator::new`] so flag
/// state is per-instance and independently configured calculators can
/// coexist in one process.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureFlags {
    #[serde(default = "on")]
    pub add: bool,
    #[serde(default = "on")]
    pub subtract: bool,
    #[serde(default = "on")]
    pub multiply: bool,
    #[serde(default = "on")]
    pub divide: bool,
    /// Planned for a future iteration; off in the reference configuration.
    #[serde(default)]
    pub history: bool,
}

fn on() -> bool {
    true
}

impl Default for FeatureFlags {
    fn default() -> Self {
        Self {
            add: true,
            subtract: true,
            multiply: true,
            divide: true,
            history: false,
        }
    }
}

impl FeatureFlags {
    pub fn is_enabled(&self, op: Op) -> bool {
        match op {
            Op::Add => self.add,
            Op::Subtract => self.subtract,
            Op::Multiply => self.multiply,
            Op::Divide => self.divide,
        }
    }

    /// All flags as `(name, value)` pairs in declaration order.
    pub fn entries(&self) -> Vec<(&'static str, bool)> {
        vec![
            ("add", self.add),
            ("subtract", self.subtract),
            ("multiply", self.multiply),
            ("divide", self.divide),
            ("history", self.history),
        ]
    }

    /// Load flags from a YAML file; a missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let data = std::fs::read_to_string(path)?;
        let flags: FeatureFlags = serde_yaml::from_str(&data)?;
        Ok(flags)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
