//! Error types for picalc.

/// Error type for argument and configuration handling.
///
/// The approximations themselves cannot fail; every error originates at the
/// edges, while turning user input into an iteration count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PiError {
    /// The iteration argument is not a non-negative integer in range
    InvalidArgument(String),
    /// The configuration file could not be read or parsed
    Config(String),
}

impl std::fmt::Display for PiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PiError::InvalidArgument(s) => write!(f, "Invalid argument: {}", s),
            PiError::Config(s) => write!(f, "Config error: {}", s),
        }
    }
}

impl std::error::Error for PiError {}

impl From<toml::de::Error> for PiError {
    fn from(e: toml::de::Error) -> Self {
        PiError::Config(e.to_string())
    }
}
