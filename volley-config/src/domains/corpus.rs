//! Corpus file configuration

use crate::error::ConfigResult;
use crate::validation::{validate_required_string, Validatable};
use serde::{Deserialize, Serialize};

/// Corpus file locations
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CorpusConfig {
    /// Path to the URL list file (one path suffix per line, must be non-empty)
    #[serde(default = "default_url_list_file")]
    pub url_list_file: String,

    /// Path to the bearer token list file (one token per line, may be empty)
    #[serde(default = "default_token_list_file")]
    pub token_list_file: String,
}

impl Default for CorpusConfig {
    fn default() -> Self {
        Self {
            url_list_file: default_url_list_file(),
            token_list_file: default_token_list_file(),
        }
    }
}

impl Validatable for CorpusConfig {
    fn validate(&self) -> ConfigResult<()> {
        validate_required_string(&self.url_list_file, "url_list_file", self.domain_name())?;
        validate_required_string(&self.token_list_file, "token_list_file", self.domain_name())?;
        Ok(())
    }

    fn domain_name(&self) -> &'static str {
        "corpus"
    }
}

// Default value functions
fn default_url_list_file() -> String {
    "urls.txt".to_string()
}

fn default_token_list_file() -> String {
    "tokens.txt".to_string()
}
