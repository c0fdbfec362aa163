//! Leibniz series approximation
//!
//! π/4 = 1 - 1/3 + 1/5 - 1/7 + 1/9 - ...
//!
//! The series converges slowly: the error after `n` terms is roughly `1/n`,
//! so a million terms give about six correct decimal places.

/// Sum the first `n` terms of the Leibniz series, scaled by 4.
///
/// Returns `0.0` for `n == 0`.
pub fn leibniz_approx(n: u64) -> f64 {
    let mut sum: f64 = 0.0;
    let mut sign: f64 = 1.0;
    for k in 0..n {
        sum += sign / (2.0 * k as f64 + 1.0);
        sign = -sign;
    }
    sum * 4.0
}
