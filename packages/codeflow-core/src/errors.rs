//! Error types for codeflow-core
//!
//! Provides unified error handling across the crate. Failures that the
//! components are required to swallow (per-category extraction, export I/O)
//! never reach this type; everything else is propagated with `?`.

use thiserror::Error;

use crate::config::ConfigError;
use crate::features::parsing::SyntaxFailure;

/// Main error type for codeflow-core operations
#[derive(Debug, Error)]
pub enum CodeflowError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Syntax error reported by the parser
    #[error("Parse error: {0}")]
    Parse(#[from] SyntaxFailure),

    /// Analysis error (engine used out of order, missing state)
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// Export error
    #[error("Export error: {0}")]
    Export(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Session storage error
    #[error("Storage error: {0}")]
    Storage(#[from] codeflow_storage::StorageError),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl CodeflowError {
    /// Create an analysis error
    pub fn analysis(msg: impl Into<String>) -> Self {
        CodeflowError::Analysis(msg.into())
    }

    /// Create an export error
    pub fn export(msg: impl Into<String>) -> Self {
        CodeflowError::Export(msg.into())
    }
}

/// Result type alias for codeflow operations
pub type Result<T> = std::result::Result<T, CodeflowError>;
