//! Report output configuration

use crate::error::ConfigResult;
use crate::validation::{validate_required_string, Validatable};
use serde::{Deserialize, Serialize};

/// Report output configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// Path of the append-only CSV report file
    #[serde(default = "default_report_file")]
    pub file: String,

    /// Whether to print a per-wave summary to the console
    #[serde(default = "crate::domains::utils::default_true")]
    pub console: bool,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            file: default_report_file(),
            console: true,
        }
    }
}

impl Validatable for ReportConfig {
    fn validate(&self) -> ConfigResult<()> {
        validate_required_string(&self.file, "file", self.domain_name())?;
        Ok(())
    }

    fn domain_name(&self) -> &'static str {
        "report"
    }
}

// Default value functions
fn default_report_file() -> String {
    "result.csv".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_config_defaults() {
        let config = ReportConfig::default();
        assert_eq!(config.file, "result.csv");
        assert!(config.console);
        assert!(config.validate().is_ok());
    }
}
