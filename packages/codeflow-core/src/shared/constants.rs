//! Centralized constants
//!
//! Defaults for the configurable values live here so that `config` and the
//! features agree on them.

/// Character cap for value and test expression dumps
pub const VALUE_TRUNCATE: usize = 50;

/// Character cap for loop target dumps
pub const TARGET_TRUNCATE: usize = 30;

/// Marker appended to a truncated dump
pub const ELLIPSIS: &str = "...";

/// Placeholder stored when a dump cannot be rendered
pub const UNKNOWN_PLACEHOLDER: &str = "Unknown";

/// Probability of a synthetic runtime fault per simulated step
pub const DEFAULT_ERROR_PROBABILITY: f64 = 0.15;

/// Session database file
pub const DEFAULT_DATABASE_PATH: &str = "sessions.db";

/// Rows returned by a recency listing
pub const DEFAULT_RECENT_LIMIT: usize = 10;

/// Filename used when the source did not come from a file
pub const DEFAULT_FILENAME: &str = "main.py";

/// Syntax-dump recursion guard
pub const MAX_DUMP_DEPTH: usize = 256;

/// Flow lines shown in a debug-info summary
pub const FLOW_TAIL_LEN: usize = 10;
