//! Configuration types for agent creation.

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Configuration for creating a Bayesian agent.
///
/// # Examples
///
/// ```
/// use bayesq::app::AgentConfig;
///
/// let config = AgentConfig::new(0.5, 0.9, 10).with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AgentConfig {
    /// Learning rate α (non-negative)
    pub learning_rate: f64,
    /// Discount factor γ (non-negative)
    pub discount_factor: f64,
    /// Observations before an action's own estimate is trusted over the sibling mean
    pub priming_threshold: u32,
    /// Tie-break seed (None = entropy-seeded)
    pub seed: Option<u64>,
}

impl AgentConfig {
    pub fn new(learning_rate: f64, discount_factor: f64, priming_threshold: u32) -> Self {
        Self {
            learning_rate,
            discount_factor,
            priming_threshold,
            seed: None,
        }
    }

    pub fn with_learning_rate(mut self, learning_rate: f64) -> Self {
        self.learning_rate = learning_rate;
        self
    }

    pub fn with_discount_factor(mut self, discount_factor: f64) -> Self {
        self.discount_factor = discount_factor;
        self
    }

    pub fn with_priming_threshold(mut self, priming_threshold: u32) -> Self {
        self.priming_threshold = priming_threshold;
        self
    }

    /// Set the random seed for deterministic tie-breaking.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Check parameter ranges.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidConfiguration`] if a rate is negative or not finite.
    pub fn validate(&self) -> Result<()> {
        check_rate("learning_rate", self.learning_rate)?;
        check_rate("discount_factor", self.discount_factor)
    }
}

fn check_rate(name: &str, value: f64) -> Result<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(Error::InvalidConfiguration {
            message: format!("{name} must be a finite, non-negative number (got {value})"),
        })
    }
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self::new(0.5, 0.9, 10)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert!(AgentConfig::default().validate().is_ok());
    }

    #[test]
    fn test_rejects_negative_learning_rate() {
        let err = AgentConfig::default()
            .with_learning_rate(-0.1)
            .validate()
            .unwrap_err();
        assert!(err.to_string().contains("learning_rate"));
    }

    #[test]
    fn test_rejects_non_finite_discount() {
        let config = AgentConfig::default().with_discount_factor(f64::NAN);
        assert!(matches!(
            config.validate(),
            Err(Error::InvalidConfiguration { .. })
        ));
    }

    #[test]
    fn test_learning_rate_above_one_is_allowed() {
        assert!(AgentConfig::new(1.5, 0.0, 0).validate().is_ok());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: AgentConfig = serde_json::from_str(r#"{"priming_threshold": 3}"#).unwrap();
        assert_eq!(config.priming_threshold, 3);
        assert_eq!(config.learning_rate, 0.5);
        assert_eq!(config.seed, None);
    }
}
