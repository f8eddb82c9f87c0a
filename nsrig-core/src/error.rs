//! Error types for nsrig

use thiserror::Error;

/// nsrig error types
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Namespace operation failed
    #[error("Namespace error: {message}")]
    Namespace {
        /// Error message
        message: String,
    },

    /// Process creation or wait failed
    #[error("Process error: {message}")]
    Process {
        /// Error message
        message: String,
    },

    /// Capability resolution or bounding-set drop failed
    #[error("Capability error: {message}")]
    Capability {
        /// Error message
        message: String,
    },

    /// Memory allocation failed
    #[error("Allocation error: {message}")]
    Allocation {
        /// Error message
        message: String,
    },

    /// Invalid configuration
    #[error("Invalid configuration: {message}")]
    InvalidConfig {
        /// Error message
        message: String,
    },

    /// System error from nix
    #[error("System error: {0}")]
    System(#[from] nix::Error),
}

impl Error {
    /// Whether this error is a configuration error rather than a runtime
    /// failure. Configuration errors get a distinct process exit status.
    #[must_use]
    pub const fn is_config(&self) -> bool {
        matches!(self, Self::InvalidConfig { .. })
    }
}

/// Result type alias for nsrig operations
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_errors_are_distinguished() {
        let config = Error::InvalidConfig {
            message: "no recognized namespace types".to_string(),
        };
        assert!(config.is_config());

        let runtime = Error::Namespace {
            message: "clone failed".to_string(),
        };
        assert!(!runtime.is_config());
    }

    #[test]
    fn test_error_display_names_operation() {
        let err = Error::Process {
            message: "fork failed: EAGAIN".to_string(),
        };
        let text = err.to_string();
        assert!(text.contains("Process error"));
        assert!(text.contains("fork failed"));
    }
}
