//! Configuration loading and environment variable handling

use crate::domains::VolleyConfig;
use crate::error::{ConfigError, ConfigResult};
use std::path::Path;

/// Configuration loader with environment variable support
///
/// Environment variables use the bare key names from the run configuration
/// contract (`BASE_URL`, `NUM_REQUESTS`, ...) unless a prefix is set, in
/// which case they become `PREFIX_BASE_URL` and so on.
pub struct ConfigLoader {
    /// Optional environment variable prefix
    prefix: Option<String>,
}

impl ConfigLoader {
    /// Create a new config loader reading unprefixed variables
    pub fn new() -> Self {
        Self { prefix: None }
    }

    /// Create a new config loader with an environment prefix
    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self {
            prefix: Some(prefix.into()),
        }
    }

    /// Load configuration from a YAML file with environment overrides
    pub fn from_file(&self, path: impl AsRef<Path>) -> ConfigResult<VolleyConfig> {
        let content = std::fs::read_to_string(path)?;
        let mut config: VolleyConfig = serde_yaml::from_str(&content)?;

        // Apply environment variable overrides
        self.apply_env_overrides(&mut config)?;

        // Validate all domains
        config.validate_all()?;

        Ok(config)
    }

    /// Load configuration from environment variables only
    pub fn from_env(&self) -> ConfigResult<VolleyConfig> {
        let mut config = VolleyConfig::default();
        self.apply_env_overrides(&mut config)?;
        config.validate_all()?;
        Ok(config)
    }

    /// Load configuration with fallback chain
    pub fn load(&self, config_path: Option<impl AsRef<Path>>) -> ConfigResult<VolleyConfig> {
        match config_path {
            Some(path) => self.from_file(path),
            None => self.from_env(),
        }
    }

    /// Apply environment variable overrides to configuration
    fn apply_env_overrides(&self, config: &mut VolleyConfig) -> ConfigResult<()> {
        self.apply_target_overrides(&mut config.target)?;
        self.apply_load_overrides(&mut config.load)?;
        self.apply_http_overrides(&mut config.http)?;
        self.apply_corpus_overrides(&mut config.corpus)?;
        self.apply_report_overrides(&mut config.report)?;
        self.apply_logging_overrides(&mut config.logging)?;

        Ok(())
    }

    /// Apply target config overrides
    fn apply_target_overrides(
        &self,
        config: &mut crate::domains::target::TargetConfig,
    ) -> ConfigResult<()> {
        if let Ok(base_url) = self.get_env_var("BASE_URL") {
            config.base_url = base_url;
        }

        Ok(())
    }

    /// Apply load config overrides
    fn apply_load_overrides(
        &self,
        config: &mut crate::domains::load::LoadConfig,
    ) -> ConfigResult<()> {
        if let Ok(batches) = self.get_env_var("NUM_REQUESTS") {
            config.batches = batches
                .parse()
                .map_err(|e| ConfigError::EnvError(format!("Invalid NUM_REQUESTS: {}", e)))?;
        }

        if let Ok(concurrency) = self.get_env_var("CONCURRENCY") {
            config.concurrency = concurrency
                .parse()
                .map_err(|e| ConfigError::EnvError(format!("Invalid CONCURRENCY: {}", e)))?;
        }

        Ok(())
    }

    /// Apply HTTP config overrides
    fn apply_http_overrides(
        &self,
        config: &mut crate::domains::http::HttpConfig,
    ) -> ConfigResult<()> {
        if let Ok(timeout) = self.get_env_var("REQUEST_TIMEOUT") {
            let seconds: u64 = timeout
                .parse()
                .map_err(|e| ConfigError::EnvError(format!("Invalid REQUEST_TIMEOUT: {}", e)))?;
            config.timeout = std::time::Duration::from_secs(seconds);
        }

        if let Ok(user_agent) = self.get_env_var("USER_AGENT") {
            config.user_agent = user_agent;
        }

        Ok(())
    }

    /// Apply corpus config overrides
    fn apply_corpus_overrides(
        &self,
        config: &mut crate::domains::corpus::CorpusConfig,
    ) -> ConfigResult<()> {
        if let Ok(url_list_file) = self.get_env_var("URL_LIST_FILE") {
            config.url_list_file = url_list_file;
        }

        if let Ok(token_list_file) = self.get_env_var("TOKEN_LIST_FILE") {
            config.token_list_file = token_list_file;
        }

        Ok(())
    }

    /// Apply report config overrides
    fn apply_report_overrides(
        &self,
        config: &mut crate::domains::report::ReportConfig,
    ) -> ConfigResult<()> {
        if let Ok(file) = self.get_env_var("REPORT_FILE") {
            config.file = file;
        }

        Ok(())
    }

    /// Apply logging config overrides
    fn apply_logging_overrides(
        &self,
        config: &mut crate::domains::logging::LoggingConfig,
    ) -> ConfigResult<()> {
        if let Ok(log_level) = self.get_env_var("LOG_LEVEL") {
            use std::str::FromStr;
            config.level = crate::domains::logging::LogLevel::from_str(&log_level)
                .map_err(|_| ConfigError::EnvError(format!("Invalid LOG_LEVEL: {}", log_level)))?;
        }

        Ok(())
    }

    /// Get environment variable, honoring the prefix if set
    fn get_env_var(&self, name: &str) -> Result<String, std::env::VarError> {
        match &self.prefix {
            Some(prefix) => std::env::var(format!("{}_{}", prefix, name)),
            None => std::env::var(name),
        }
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}
