//! Storage backends
//!
//! - `sqlite`: embedded SQLite adapter (default feature)

pub mod sqlite;

pub use sqlite::SqliteSessionStore;
