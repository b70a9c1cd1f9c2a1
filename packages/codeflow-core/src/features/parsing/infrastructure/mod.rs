//! Parsing infrastructure (tree-sitter lives here)

mod parser;

pub use parser::PythonParser;
