//! Error types for formicary_core.
//!
//! The simulation itself never fails once built; everything here is about
//! getting a valid configuration in and asking well-formed questions.

use thiserror::Error;

/// Main error type for formicary_core operations.
#[derive(Error, Debug)]
pub enum SimError {
    /// A configuration value is out of range
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// TOML parsing errors
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// File system errors
    #[error("File system error: {0}")]
    Io(#[from] std::io::Error),

    /// A colony index outside `0..NUM_COLONIES`
    #[error("Unknown colony: {0}")]
    UnknownColony(usize),

    /// An ant slot that is not alive
    #[error("Colony {colony} has no living ant at index {index}")]
    UnknownAnt { colony: usize, index: usize },
}

/// Result type alias for formicary_core operations.
pub type Result<T> = std::result::Result<T, SimError>;

impl SimError {
    /// Creates a new configuration error.
    #[must_use]
    pub fn invalid_config<S: Into<String>>(msg: S) -> Self {
        Self::InvalidConfig(msg.into())
    }
}

/// Returns an [`SimError::InvalidConfig`] early when `cond` is false.
macro_rules! ensure_config {
    ($cond:expr, $($msg:tt)+) => {
        if !$cond {
            return Err($crate::error::SimError::invalid_config(format!($($msg)+)));
        }
    };
}

pub(crate) use ensure_config;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = SimError::invalid_config("speed must be positive");
        assert_eq!(
            err.to_string(),
            "Invalid configuration: speed must be positive"
        );
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: SimError = io_err.into();
        assert!(matches!(err, SimError::Io(_)));
    }

    #[test]
    fn test_unknown_colony_display() {
        assert_eq!(SimError::UnknownColony(7).to_string(), "Unknown colony: 7");
    }
}
