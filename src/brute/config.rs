//! Brute search configuration parameters.

use serde::{Deserialize, Serialize};

use crate::core::error::{ConfigError, Result};

/// Brute search configuration parameters.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct BruteConfig {
    /// Length of every candidate action sequence.
    /// Rollouts may stop earlier on termination or truncation.
    pub max_episode_steps: usize,

    /// Environment steps the driving loop may spend before stopping.
    /// Checked after each iteration, so the last one may overshoot.
    pub timestep_limit: u64,

    /// Numerator of the exploration probability `scale / ln(visits + 2)`.
    /// Not clamped; keep it small.
    pub exploration_scale: f64,

    /// Random seed for selection.
    /// Same seed against a deterministic environment reproduces the search.
    pub seed: u64,
}

impl Default for BruteConfig {
    fn default() -> Self {
        Self {
            max_episode_steps: 4500,
            timestep_limit: 100_000,
            exploration_scale: 0.005,
            seed: 42,
        }
    }
}

impl BruteConfig {
    /// Create a new config with a custom horizon.
    pub fn with_max_episode_steps(mut self, steps: usize) -> Self {
        self.max_episode_steps = steps;
        self
    }

    /// Create a new config with a custom timestep budget.
    pub fn with_timestep_limit(mut self, limit: u64) -> Self {
        self.timestep_limit = limit;
        self
    }

    /// Create a new config with a custom exploration scale.
    pub fn with_exploration_scale(mut self, scale: f64) -> Self {
        self.exploration_scale = scale;
        self
    }

    /// Create a new config with custom seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Reject parameters the search cannot run with.
    pub fn validate(&self) -> Result<()> {
        if self.max_episode_steps == 0 {
            return Err(ConfigError::ZeroHorizon);
        }
        if !self.exploration_scale.is_finite() || self.exploration_scale < 0.0 {
            return Err(ConfigError::InvalidExplorationScale(self.exploration_scale));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = BruteConfig::default();
        assert_eq!(config.max_episode_steps, 4500);
        assert_eq!(config.timestep_limit, 100_000);
        assert!((config.exploration_scale - 0.005).abs() < 1e-12);
        assert_eq!(config.seed, 42);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_pattern() {
        let config = BruteConfig::default()
            .with_max_episode_steps(3)
            .with_timestep_limit(500)
            .with_exploration_scale(0.1)
            .with_seed(123);

        assert_eq!(config.max_episode_steps, 3);
        assert_eq!(config.timestep_limit, 500);
        assert_eq!(config.exploration_scale, 0.1);
        assert_eq!(config.seed, 123);
    }

    #[test]
    fn test_validate_rejects_zero_horizon() {
        let config = BruteConfig::default().with_max_episode_steps(0);
        assert_eq!(config.validate(), Err(ConfigError::ZeroHorizon));
    }

    #[test]
    fn test_validate_rejects_bad_scale() {
        let config = BruteConfig::default().with_exploration_scale(-0.5);
        assert_eq!(
            config.validate(),
            Err(ConfigError::InvalidExplorationScale(-0.5))
        );

        let config = BruteConfig::default().with_exploration_scale(f64::NAN);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_zero_scale_is_valid() {
        let config = BruteConfig::default().with_exploration_scale(0.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_serialization() {
        let config = BruteConfig::default().with_seed(7);
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: BruteConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config.seed, deserialized.seed);
        assert_eq!(config.max_episode_steps, deserialized.max_episode_steps);
    }
}
