//! Run configuration
//!
//! The iteration count comes from, in order of precedence:
//!
//! 1. the positional command-line argument
//! 2. the `iterations` key of a TOML config file
//! 3. [`DEFAULT_ITERATIONS`]
//!
//! # Example
//!
//! ```rust
//! use picalc_core::RunConfig;
//!
//! let config = RunConfig::from_toml("iterations = 500").unwrap();
//! assert_eq!(config.resolve_iterations(None).unwrap(), 500);
//! assert_eq!(config.resolve_iterations(Some("42")).unwrap(), 42);
//! ```

use crate::circle::MAX_ITERATIONS;
use crate::error::PiError;
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Iteration count used when neither the argument nor a config file sets one
pub const DEFAULT_ITERATIONS: u64 = 1_000_000;

/// Settings loaded from a config file
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RunConfig {
    /// Iteration count to use when no argument is given
    #[serde(default)]
    pub iterations: Option<u64>,
}

impl RunConfig {
    /// Create an empty configuration (all defaults)
    pub fn new() -> Self {
        RunConfig::default()
    }

    /// Parse configuration from a TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, PiError> {
        let config: RunConfig = toml::from_str(toml_str)?;
        if let Some(n) = config.iterations
            && n > MAX_ITERATIONS
        {
            return Err(PiError::Config(format!(
                "iterations = {} exceeds the maximum of {}",
                n, MAX_ITERATIONS
            )));
        }
        Ok(config)
    }

    /// Read and parse a TOML config file
    pub fn load(path: &Path) -> Result<Self, PiError> {
        let content = fs::read_to_string(path).map_err(|e| {
            PiError::Config(format!("Failed to read {}: {}", path.display(), e))
        })?;
        Self::from_toml(&content).map_err(|e| match e {
            PiError::Config(msg) => PiError::Config(format!("{}: {}", path.display(), msg)),
            other => other,
        })
    }

    /// Set the iteration count (builder pattern)
    pub fn with_iterations(mut self, iterations: u64) -> Self {
        self.iterations = Some(iterations);
        self
    }

    /// Pick the iteration count for a run: the argument wins, then the
    /// config file, then [`DEFAULT_ITERATIONS`].
    pub fn resolve_iterations(&self, arg: Option<&str>) -> Result<u64, PiError> {
        match arg {
            Some(arg) => parse_iterations(arg),
            None => Ok(self.iterations.unwrap_or(DEFAULT_ITERATIONS)),
        }
    }
}

/// Parse an iteration count argument.
///
/// Accepts decimal non-negative integers up to [`MAX_ITERATIONS`]. Signs
/// other than a leading `+`, fractions, whitespace and empty input are
/// rejected with [`PiError::InvalidArgument`].
pub fn parse_iterations(arg: &str) -> Result<u64, PiError> {
    let n: u64 = arg.parse().map_err(|_| {
        PiError::InvalidArgument(format!("'{}' is not a non-negative integer", arg))
    })?;
    if n > MAX_ITERATIONS {
        return Err(PiError::InvalidArgument(format!(
            "'{}' exceeds the maximum of {}",
            arg, MAX_ITERATIONS
        )));
    }
    Ok(n)
}
