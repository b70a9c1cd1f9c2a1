//! Parsing Feature
//!
//! Turns Python text into a syntax tree and finds project sources.
//!
//! ## Structure
//! - `domain/` - ParsedSource, SyntaxFailure
//! - `infrastructure/` - PythonParser (tree-sitter)
//! - `application/` - project source discovery

pub mod application;
pub mod domain;
pub mod infrastructure;

// Re-exports
pub use application::discover_sources;
pub use domain::{ParsedSource, SyntaxFailure};
pub use infrastructure::PythonParser;
