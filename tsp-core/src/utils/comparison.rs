#[cfg(test)]
#[path = "../../tests/unit/utils/comparison_test.rs"]
mod comparison_test;

use crate::utils::Float;

/// Checks whether two values are equal within given absolute tolerance.
/// Infinities of the same sign are considered as close, NaN is never close to anything.
pub fn is_close(a: Float, b: Float, tolerance: Float) -> bool {
    if a.is_infinite() || b.is_infinite() {
        return a == b;
    }

    (a - b).abs() <= tolerance
}
