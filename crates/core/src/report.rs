//! Report: both approximations for one iteration count
//!
//! The `Display` rendering is the program's stdout format:
//!
//! ```text
//! Iterations: 10
//! Circle:     3.160000000000
//! Leibniz:    3.041839618929
//! ```
//!
//! Values are right-aligned in a 14-character field with 12 decimals.

use crate::circle::circle_approx;
use crate::leibniz::leibniz_approx;
use std::fmt;
use std::time::Instant;
use tracing::debug;

/// Results of one run
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Report {
    pub iterations: u64,
    pub circle: f64,
    pub leibniz: f64,
}

impl Report {
    /// Run both approximations with `iterations` iterations each
    pub fn compute(iterations: u64) -> Self {
        let start = Instant::now();
        let circle = circle_approx(iterations);
        debug!(iterations, circle, elapsed = ?start.elapsed(), "circle approximation");

        let start = Instant::now();
        let leibniz = leibniz_approx(iterations);
        debug!(iterations, leibniz, elapsed = ?start.elapsed(), "leibniz approximation");

        Report {
            iterations,
            circle,
            leibniz,
        }
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Iterations: {}", self.iterations)?;
        writeln!(f, "Circle:     {:14.12}", self.circle)?;
        writeln!(f, "Leibniz:    {:14.12}", self.leibniz)
    }
}
