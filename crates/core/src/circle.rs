//! Circle-area approximation by lattice counting
//!
//! An `n x n` grid of cells covers the unit square. A cell counts when its
//! midpoint lies inside the unit quarter-circle, so the counted fraction of
//! the grid approaches the quarter-circle's area π/4.
//!
//! ```text
//!   y
//!   1 ┤● ● ○ ○        ● inside: (2i+1)² + (2j+1)² <= (2n)²
//!     ┤● ● ● ○        ○ outside
//!     ┤● ● ● ●
//!     ┤● ● ● ●
//!   0 └┴─┴─┴─┴─ x
//!     0       1
//! ```
//!
//! Each iteration handles one grid column. Scaling every coordinate by `2n`
//! keeps the test in integers, and the column height falls out of a single
//! integer square root, so the count is exact and the result deterministic.

use tracing::trace;

/// Largest iteration count the lattice can represent.
///
/// With `n <= i64::MAX` the squared diameter `(2n)²` stays below `2^128`.
/// Larger inputs are clamped to this value.
pub const MAX_ITERATIONS: u64 = i64::MAX as u64;

/// Number of lattice cells in column `i` of an `n x n` grid whose midpoints
/// fall inside the quarter-circle.
fn column_count(i: u64, n: u64) -> u128 {
    let diameter = 2 * n as u128;
    let x = 2 * i as u128 + 1;
    // x < diameter, so the difference is positive
    let s = (diameter * diameter - x * x).isqrt();
    // Rows j with 2j + 1 <= s
    s.div_ceil(2)
}

/// Estimate π by counting midpoints of an `n x n` grid inside the unit
/// quarter-circle.
///
/// Returns `0.0` for `n == 0`: an empty grid has no area to measure.
pub fn circle_approx(n: u64) -> f64 {
    if n == 0 {
        return 0.0;
    }
    let n = n.min(MAX_ITERATIONS);

    let inside: u128 = (0..n).map(|i| column_count(i, n)).sum();
    trace!(n, inside, "lattice count complete");

    4.0 * inside as f64 / (n as f64 * n as f64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    #[test]
    fn test_zero_is_sentinel() {
        assert_eq!(circle_approx(0), 0.0);
    }

    #[test]
    fn test_small_grids() {
        // 1x1: the single midpoint (0.5, 0.5) is inside
        assert_eq!(circle_approx(1), 4.0);
        // 2x2: only the (0.75, 0.75) midpoint is outside
        assert_eq!(circle_approx(2), 3.0);
        assert_eq!(circle_approx(10), 3.16);
    }

    #[test]
    fn test_column_counts() {
        // n = 2: first column holds both cells, second only the lower one
        assert_eq!(column_count(0, 2), 2);
        assert_eq!(column_count(1, 2), 1);
        // The first column of any grid is full
        assert_eq!(column_count(0, 1000), 1000);
    }

    #[test]
    fn test_converges_to_pi() {
        let coarse = (circle_approx(10) - PI).abs();
        let medium = (circle_approx(1_000) - PI).abs();
        let fine = (circle_approx(1_000_000) - PI).abs();
        assert!(medium < coarse);
        assert!(fine < medium);
        assert!(fine < 0.01);
        assert!(fine < 1e-8);
    }

    #[test]
    fn test_deterministic() {
        assert_eq!(circle_approx(12_345), circle_approx(12_345));
    }

    #[test]
    fn test_large_values_do_not_overflow() {
        // Widest column of the largest grid
        let count = column_count(0, MAX_ITERATIONS);
        assert_eq!(count, MAX_ITERATIONS as u128);
    }
}
