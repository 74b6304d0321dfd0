//! Load shape configuration

use crate::error::ConfigResult;
use crate::validation::{validate_positive, Validatable};
use serde::{Deserialize, Serialize};

/// Load shape configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoadConfig {
    /// Number of batches to run (each batch replays the full URL corpus)
    #[serde(default = "default_batches")]
    pub batches: u32,

    /// Default number of concurrent virtual users per wave.
    ///
    /// Applies only when the token corpus is empty; a non-empty token list
    /// overrides this with its own length.
    #[serde(default = "default_concurrency")]
    pub concurrency: usize,
}

impl Default for LoadConfig {
    fn default() -> Self {
        Self {
            batches: default_batches(),
            concurrency: default_concurrency(),
        }
    }
}

impl Validatable for LoadConfig {
    fn validate(&self) -> ConfigResult<()> {
        validate_positive(self.batches, "batches", self.domain_name())?;
        validate_positive(self.concurrency, "concurrency", self.domain_name())?;
        Ok(())
    }

    fn domain_name(&self) -> &'static str {
        "load"
    }
}

// Default value functions
fn default_batches() -> u32 {
    1
}

fn default_concurrency() -> usize {
    1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_config_defaults() {
        let config = LoadConfig::default();
        assert_eq!(config.batches, 1);
        assert_eq!(config.concurrency, 1);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_config_rejects_zero_values() {
        let config = LoadConfig {
            batches: 0,
            concurrency: 5,
        };
        assert!(config.validate().is_err());

        let config = LoadConfig {
            batches: 2,
            concurrency: 0,
        };
        assert!(config.validate().is_err());
    }
}
