//! Domain-specific configuration modules

pub mod corpus;
pub mod http;
pub mod load;
pub mod logging;
pub mod report;
pub mod target;
pub mod utils;

use crate::error::ConfigResult;
use crate::validation::Validatable;
use serde::{Deserialize, Serialize};

/// Main volley configuration combining all domains
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct VolleyConfig {
    /// Target service configuration
    #[serde(default)]
    pub target: target::TargetConfig,

    /// Load shape configuration (batches, virtual users)
    #[serde(default)]
    pub load: load::LoadConfig,

    /// HTTP client configuration
    #[serde(default)]
    pub http: http::HttpConfig,

    /// Corpus file locations
    #[serde(default)]
    pub corpus: corpus::CorpusConfig,

    /// Report output configuration
    #[serde(default)]
    pub report: report::ReportConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: logging::LoggingConfig,
}

impl VolleyConfig {
    /// Validate all domain configurations
    pub fn validate_all(&self) -> ConfigResult<()> {
        self.target.validate()?;
        self.load.validate()?;
        self.http.validate()?;
        self.corpus.validate()?;
        self.report.validate()?;
        self.logging.validate()?;

        Ok(())
    }

    /// Generate a sample configuration file
    pub fn generate_sample() -> String {
        let config = VolleyConfig::default();
        serde_yaml::to_string(&config)
            .unwrap_or_else(|_| "# Failed to generate sample config".to_string())
    }
}
