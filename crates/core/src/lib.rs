//! picalc core: two numeric approximations of π
//!
//! - `leibniz`: partial sums of the alternating series 4/1 - 4/3 + 4/5 - ...
//! - `circle`: midpoint lattice count over the unit quarter-circle
//!
//! # Modules
//!
//! - `circle`: circle-area counting approximation
//! - `config`: run configuration (TOML file, iteration argument parsing)
//! - `error`: `PiError`, the single error type of the crate
//! - `leibniz`: Leibniz series approximation
//! - `report`: runs both approximations and renders the three-line report
//!
//! # Example
//!
//! ```rust
//! use picalc_core::{Report, leibniz_approx};
//!
//! assert_eq!(leibniz_approx(0), 0.0);
//!
//! let report = Report::compute(10);
//! assert_eq!(report.iterations, 10);
//! assert!(report.to_string().starts_with("Iterations: 10\n"));
//! ```

pub mod circle;
pub mod config;
pub mod error;
pub mod leibniz;
pub mod report;

pub use circle::{MAX_ITERATIONS, circle_approx};
pub use config::{DEFAULT_ITERATIONS, RunConfig, parse_iterations};
pub use error::PiError;
pub use leibniz::leibniz_approx;
pub use report::Report;
