//! Configuration I/O (YAML loading)
//!
//! Defines the YAML schema. Conversion into `DebuggerConfig` lives in
//! `config/mod.rs`.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::shared::models::LanguageId;

/// YAML Schema v1
///
/// Every field except `version` is optional; missing fields keep their defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFileV1 {
    /// Schema version (always 1 for v1)
    pub version: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_probability: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub value_truncate: Option<usize>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_truncate: Option<usize>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub database_path: Option<PathBuf>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub recent_limit: Option<usize>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_level: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_language: Option<LanguageId>,
}
