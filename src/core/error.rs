//! Configuration error types.
//!
//! Environment failures are not represented here: they travel through the
//! search as the environment's own `Error` type.

use thiserror::Error;

/// Errors raised when a search is configured with unusable parameters.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("max_episode_steps must be at least 1")]
    ZeroHorizon,

    #[error("action space must contain at least one action")]
    EmptyActionSpace,

    #[error("exploration scale must be finite and non-negative, got {0}")]
    InvalidExplorationScale(f64),
}

/// Result type for configuration checks.
pub type Result<T> = std::result::Result<T, ConfigError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::ZeroHorizon;
        assert!(format!("{}", err).contains("max_episode_steps"));

        let err = ConfigError::EmptyActionSpace;
        assert!(format!("{}", err).contains("at least one action"));

        let err = ConfigError::InvalidExplorationScale(-1.0);
        assert!(format!("{}", err).contains("-1"));
    }
}
