//! Parsing application layer

mod discover;

pub use discover::discover_sources;
