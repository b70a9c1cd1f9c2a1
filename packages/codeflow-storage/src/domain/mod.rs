//! Domain layer for the session store
//!
//! # Domain Models
//!
//! - `NewSession`: payload handed to the store on save (no id, no timestamp)
//! - `Session`: immutable persisted snapshot of one analysis/debugging run
//! - `SessionSummary`: id/filename/timestamp triple used by recency listings
//!
//! # Port Trait
//!
//! - `SessionStore`: primary storage abstraction
//!
//! Payload fields (`analysis_results`, `execution_steps`, `variables_state`,
//! `flow_graph`) are opaque JSON values. Their shape belongs to the caller; the
//! store never inspects them.
//!
//! # Examples
//!
//! ```rust,ignore
//! use codeflow_storage::{NewSession, SessionStore, SqliteSessionStore};
//!
//! let store = SqliteSessionStore::open("sessions.db")?;
//! let id = store.save(&NewSession::new("main.py", "x = 1\n"))?;
//! let session = store.load(id)?.expect("just saved");
//! assert_eq!(session.filename, "main.py");
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{Result, StorageError};

/// Session payload prior to persistence
///
/// # Examples
///
/// ```rust
/// use codeflow_storage::NewSession;
///
/// let session = NewSession::new("main.py", "print('hi')\n")
///     .with_execution_steps(serde_json::json!([{"line": 1}]));
/// assert_eq!(session.filename, "main.py");
/// assert!(session.analysis_results.is_object());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewSession {
    pub filename: String,
    pub code: String,
    pub analysis_results: serde_json::Value,
    pub execution_steps: serde_json::Value,
    pub variables_state: serde_json::Value,
    pub flow_graph: serde_json::Value,
}

impl NewSession {
    /// Create a session payload with empty blobs
    pub fn new(filename: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            filename: filename.into(),
            code: code.into(),
            analysis_results: empty_object(),
            execution_steps: serde_json::Value::Array(Vec::new()),
            variables_state: empty_object(),
            flow_graph: empty_object(),
        }
    }

    pub fn with_analysis_results(mut self, value: serde_json::Value) -> Self {
        self.analysis_results = value;
        self
    }

    pub fn with_execution_steps(mut self, value: serde_json::Value) -> Self {
        self.execution_steps = value;
        self
    }

    pub fn with_variables_state(mut self, value: serde_json::Value) -> Self {
        self.variables_state = value;
        self
    }

    pub fn with_flow_graph(mut self, value: serde_json::Value) -> Self {
        self.flow_graph = value;
        self
    }
}

/// Persisted session snapshot
///
/// Sessions are immutable: the store offers no update operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    /// Store-assigned id (monotonically increasing)
    pub id: i64,
    pub filename: String,
    /// Creation time (write time)
    pub timestamp: DateTime<Utc>,
    pub code: String,
    pub analysis_results: serde_json::Value,
    pub execution_steps: serde_json::Value,
    pub variables_state: serde_json::Value,
    pub flow_graph: serde_json::Value,
}

impl Session {
    pub fn summary(&self) -> SessionSummary {
        SessionSummary {
            id: self.id,
            filename: self.filename.clone(),
            timestamp: self.timestamp,
        }
    }
}

/// Row of a recency listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSummary {
    pub id: i64,
    pub filename: String,
    pub timestamp: DateTime<Utc>,
}

/// Session storage abstraction
///
/// # Core Operations
///
/// - `save`: persist a new snapshot, returning its id
/// - `load`: fetch one snapshot (`Ok(None)` on a miss)
/// - `require`: fetch one snapshot where a miss is an error
/// - `list_recent`: most recent snapshots first
/// - `delete`: remove a snapshot (missing ids are ignored)
///
/// # Concurrency
///
/// Implementations are synchronous. Writers in different processes are not
/// coordinated beyond what the backing database guarantees by default.
pub trait SessionStore {
    /// Persist a session and return its id
    fn save(&self, session: &NewSession) -> Result<i64>;

    /// Load a session by id
    ///
    /// A miss is not an error: returns `Ok(None)`.
    fn load(&self, session_id: i64) -> Result<Option<Session>>;

    /// Load a session that must exist
    ///
    /// A miss is `ErrorKind::SessionNotFound`.
    fn require(&self, session_id: i64) -> Result<Session> {
        self.load(session_id)?
            .ok_or_else(|| StorageError::session_not_found(session_id))
    }

    /// List up to `limit` sessions, newest first
    fn list_recent(&self, limit: usize) -> Result<Vec<SessionSummary>>;

    /// Delete a session by id
    fn delete(&self, session_id: i64) -> Result<()>;
}

pub(crate) fn empty_object() -> serde_json::Value {
    serde_json::Value::Object(serde_json::Map::new())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_new_session_defaults() {
        let session = NewSession::new("main.py", "x = 1");
        assert_eq!(session.code, "x = 1");
        assert_eq!(session.analysis_results, json!({}));
        assert_eq!(session.execution_steps, json!([]));
        assert_eq!(session.variables_state, json!({}));
        assert_eq!(session.flow_graph, json!({}));
    }

    #[test]
    fn test_new_session_builders() {
        let session = NewSession::new("main.py", "")
            .with_analysis_results(json!({"variables": []}))
            .with_flow_graph(json!({"nodes": [], "edges": []}));

        assert_eq!(session.analysis_results["variables"], json!([]));
        assert_eq!(session.flow_graph["edges"], json!([]));
    }

    #[test]
    fn test_session_summary() {
        let session = Session {
            id: 7,
            filename: "utils.py".to_string(),
            timestamp: Utc::now(),
            code: String::new(),
            analysis_results: json!({}),
            execution_steps: json!([]),
            variables_state: json!({}),
            flow_graph: json!({}),
        };

        let summary = session.summary();
        assert_eq!(summary.id, 7);
        assert_eq!(summary.filename, "utils.py");
        assert_eq!(summary.timestamp, session.timestamp);
    }
}
