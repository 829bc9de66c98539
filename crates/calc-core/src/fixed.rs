// ---------------------------------------------------------------------------
// FixedCalculator
// ---------------------------------------------------------------------------

/// Calculator with a fixed, signed-off feature set: addition and
/// subtraction only. No registry, no flags, no history; anything else is
/// rejected at the CLI boundary, not here.
#[derive(Debug, Default)]
pub struct FixedCalculator;

impl FixedCalculator {
    pub fn new() -> Self {
        Self
    }

    pub fn add(&self, a: f64, b: f64) -> f64 {
        a + b
    }

    pub fn subtract(&self, a: f64, b: f64) -> f64 {
        a - b
    }
}
