//! Debugger configuration
//!
//! One flat profile loaded from YAML (schema `version: 1`). Every field has a
//! default, so a file holding only `version: 1` is a valid configuration.
//!
//! # Examples
//!
//! ```rust,ignore
//! use codeflow_core::config::DebuggerConfig;
//!
//! let config = DebuggerConfig::from_yaml("codeflow.yaml")?;
//! let config = DebuggerConfig::default().with_seed(42);
//! ```

pub mod error;
pub mod io;

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::shared::constants::{
    DEFAULT_DATABASE_PATH, DEFAULT_ERROR_PROBABILITY, DEFAULT_RECENT_LIMIT, TARGET_TRUNCATE,
    VALUE_TRUNCATE,
};
use crate::shared::models::LanguageId;

pub use error::{ConfigError, ConfigResult};
pub use io::ConfigFileV1;

const SUPPORTED_VERSIONS: &[u32] = &[1];
const MAX_TRUNCATE: usize = 1000;
const MAX_RECENT_LIMIT: usize = 1000;

/// Runtime configuration for analysis, simulated execution and persistence
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DebuggerConfig {
    /// Probability that a simulated step reports a synthetic runtime fault
    pub error_probability: f64,
    /// Character cap for value/test expression dumps
    pub value_truncate: usize,
    /// Character cap for loop target dumps
    pub target_truncate: usize,
    /// Seed for the outcome RNG; `None` draws from OS entropy
    pub seed: Option<u64>,
    /// SQLite session database
    pub database_path: PathBuf,
    /// Default row count for recency listings
    pub recent_limit: usize,
    /// Default `tracing` filter when `RUST_LOG` is unset
    pub log_level: String,
    /// Language assumed when neither a flag nor a file extension decides
    pub default_language: LanguageId,
}

impl Default for DebuggerConfig {
    fn default() -> Self {
        Self {
            error_probability: DEFAULT_ERROR_PROBABILITY,
            value_truncate: VALUE_TRUNCATE,
            target_truncate: TARGET_TRUNCATE,
            seed: None,
            database_path: PathBuf::from(DEFAULT_DATABASE_PATH),
            recent_limit: DEFAULT_RECENT_LIMIT,
            log_level: "info".to_string(),
            default_language: LanguageId::Python,
        }
    }
}

impl DebuggerConfig {
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_error_probability(mut self, probability: f64) -> Self {
        self.error_probability = probability;
        self
    }

    pub fn with_database_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.database_path = path.into();
        self
    }

    /// Load and validate a YAML configuration file
    pub fn from_yaml(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        debug!(path = %path.display(), "loading configuration");
        Self::from_yaml_str(&content)
    }

    /// Parse and validate YAML configuration text
    pub fn from_yaml_str(content: &str) -> ConfigResult<Self> {
        let file: ConfigFileV1 = serde_yaml::from_str(content)?;

        let version = file.version.ok_or(ConfigError::MissingVersion)?;
        if !SUPPORTED_VERSIONS.contains(&version) {
            return Err(ConfigError::UnsupportedVersion {
                found: version,
                supported: SUPPORTED_VERSIONS.to_vec(),
            });
        }

        let defaults = Self::default();
        let config = Self {
            error_probability: file.error_probability.unwrap_or(defaults.error_probability),
            value_truncate: file.value_truncate.unwrap_or(defaults.value_truncate),
            target_truncate: file.target_truncate.unwrap_or(defaults.target_truncate),
            seed: file.seed.or(defaults.seed),
            database_path: file.database_path.unwrap_or(defaults.database_path),
            recent_limit: file.recent_limit.unwrap_or(defaults.recent_limit),
            log_level: file.log_level.unwrap_or(defaults.log_level),
            default_language: file.default_language.unwrap_or(defaults.default_language),
        };

        config.validate()?;
        Ok(config)
    }

    /// Serialize to YAML (schema v1, every field explicit)
    pub fn to_yaml(&self) -> ConfigResult<String> {
        let file = ConfigFileV1 {
            version: Some(1),
            error_probability: Some(self.error_probability),
            value_truncate: Some(self.value_truncate),
            target_truncate: Some(self.target_truncate),
            seed: self.seed,
            database_path: Some(self.database_path.clone()),
            recent_limit: Some(self.recent_limit),
            log_level: Some(self.log_level.clone()),
            default_language: Some(self.default_language),
        };
        Ok(serde_yaml::to_string(&file)?)
    }

    /// Range checks
    pub fn validate(&self) -> ConfigResult<()> {
        if !(0.0..=1.0).contains(&self.error_probability) {
            return Err(ConfigError::range(
                "error_probability",
                self.error_probability,
                0.0,
                1.0,
                "Use a probability between 0 and 1.",
            ));
        }
        if !(1..=MAX_TRUNCATE).contains(&self.value_truncate) {
            return Err(ConfigError::range(
                "value_truncate",
                self.value_truncate,
                1,
                MAX_TRUNCATE,
                "Dumps are capped by character count.",
            ));
        }
        if !(1..=MAX_TRUNCATE).contains(&self.target_truncate) {
            return Err(ConfigError::range(
                "target_truncate",
                self.target_truncate,
                1,
                MAX_TRUNCATE,
                "Dumps are capped by character count.",
            ));
        }
        if !(1..=MAX_RECENT_LIMIT).contains(&self.recent_limit) {
            return Err(ConfigError::range(
                "recent_limit",
                self.recent_limit,
                1,
                MAX_RECENT_LIMIT,
                "",
            ));
        }
        Ok(())
    }
}
