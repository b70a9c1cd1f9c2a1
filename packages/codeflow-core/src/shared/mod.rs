//! Shared module - Common types and utilities
//!
//! Types here are used by more than one feature. Only `utils::tree_sitter`
//! touches the tree-sitter API.

pub mod constants;
pub mod models;
pub mod utils;

// Re-exports for convenience
pub use models::*;
