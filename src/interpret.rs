//! Classification of a single reading against the reference catalog.

use crate::catalog::ReferenceCatalog;
use crate::models::{TestId, Verdict};

/// Classify one (test, value) pair.
///
/// Boundary values are inclusive: `value == min` and `value == max` both
/// classify as [`Verdict::Normal`]. A test with no catalog entry yields
/// [`Verdict::Unknown`]. Pure and total over its inputs; values are
/// compared exactly, with no rounding.
pub fn interpret(catalog: &ReferenceCatalog, test: TestId, value: f64) -> Verdict {
    let Some(range) = catalog.lookup(test) else {
        return Verdict::Unknown;
    };

    if value < range.min {
        Verdict::Low
    } else if value > range.max {
        Verdict::High
    } else {
        Verdict::Normal
    }
}
