//! Domain-driven configuration management for volley
//!
//! This crate provides the run configuration split by functional domains,
//! with validation, defaults, and environment variable support.

pub mod error;
pub mod loader;
pub mod validation;

// Domain-specific configuration modules
pub mod domains;

// Re-export main types
pub use error::{ConfigError, ConfigResult};
pub use loader::ConfigLoader;

// Re-export domain configurations
pub use domains::{
    corpus::CorpusConfig, http::HttpConfig, load::LoadConfig, logging::LoggingConfig,
    report::ReportConfig, target::TargetConfig, VolleyConfig,
};

// Re-export utilities
pub use domains::utils::serde_duration;
