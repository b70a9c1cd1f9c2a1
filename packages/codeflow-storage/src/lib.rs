//! Session store for CodeFlow
//!
//! Persists immutable snapshots of one analysis/debugging run: source text,
//! structural extraction results, execution steps, a variables-state blob and
//! the flow graph. Identifiers are integers assigned by the store.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use codeflow_storage::{NewSession, SessionStore, SqliteSessionStore};
//!
//! let store = SqliteSessionStore::open("sessions.db")?;
//! let id = store.save(&NewSession::new("main.py", source))?;
//!
//! for summary in store.list_recent(10)? {
//!     println!("{} {} {}", summary.id, summary.filename, summary.timestamp);
//! }
//!
//! if let Some(session) = store.load(id)? {
//!     // ...
//! }
//! store.delete(id)?;
//! ```

pub mod domain;
pub mod error;

#[cfg(feature = "sqlite")]
pub mod infrastructure;

pub use error::{ErrorKind, Result, StorageError};

pub use domain::{NewSession, Session, SessionStore, SessionSummary};

#[cfg(feature = "sqlite")]
pub use infrastructure::SqliteSessionStore;
