// ---------------------------------------------------------------------------
// Product backlog
// ---------------------------------------------------------------------------

/// Static product backlog, display-only. Each item is small, testable, and
/// tagged with the iteration that delivered (or will deliver) it.
const PRODUCT_BACKLOG: &[&str] = &[
    "I1: Add basic addition",
    "I2: Add subtraction",
    "I3: Add multiplication & division",
    "I4: Add safe division by zero handling",
    "I5: Add history of operations (nice-to-have)",
];

pub fn items() -> &'static [&'static str] {
    PRODUCT_BACKLOG
}
