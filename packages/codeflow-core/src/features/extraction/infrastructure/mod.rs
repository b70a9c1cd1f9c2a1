//! Tree-sitter backed extractors, one per record category

mod assignment;
mod control_flow;
mod definitions;
mod dump;
mod variables;

pub use control_flow::{extract_conditionals, extract_loops};
pub use definitions::{extract_classes, extract_functions};
pub use dump::dump;
pub use variables::extract_variables;
