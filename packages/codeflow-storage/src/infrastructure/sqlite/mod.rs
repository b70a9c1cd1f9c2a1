//! SQLite adapter for SessionStore
//!
//! One connection is opened and closed per call; there is no pooling and no
//! transaction spans more than one call. Schema:
//!
//! ```sql
//! CREATE TABLE IF NOT EXISTS sessions (
//!     id INTEGER PRIMARY KEY AUTOINCREMENT,
//!     filename TEXT NOT NULL,
//!     timestamp DATETIME DEFAULT CURRENT_TIMESTAMP,
//!     code TEXT,
//!     analysis_results TEXT,
//!     execution_steps TEXT,
//!     variables_state TEXT,
//!     flow_graph TEXT
//! )
//! ```

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use rusqlite::{params, Connection, OptionalExtension, Row};
use tracing::debug;

use crate::domain::{empty_object, NewSession, Session, SessionStore, SessionSummary};
use crate::Result;

const CREATE_SESSIONS_TABLE: &str = "
    CREATE TABLE IF NOT EXISTS sessions (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        filename TEXT NOT NULL,
        timestamp DATETIME DEFAULT CURRENT_TIMESTAMP,
        code TEXT,
        analysis_results TEXT,
        execution_steps TEXT,
        variables_state TEXT,
        flow_graph TEXT
    )
";

/// SQLite-backed session store
#[derive(Debug, Clone)]
pub struct SqliteSessionStore {
    db_path: PathBuf,
}

impl SqliteSessionStore {
    /// Open (or create) the database at `db_path` and ensure the schema exists
    pub fn open(db_path: impl AsRef<Path>) -> Result<Self> {
        let store = Self {
            db_path: db_path.as_ref().to_path_buf(),
        };
        store.init_database()?;
        Ok(store)
    }

    pub fn db_path(&self) -> &Path {
        &self.db_path
    }

    fn connect(&self) -> Result<Connection> {
        Ok(Connection::open(&self.db_path)?)
    }

    fn init_database(&self) -> Result<()> {
        let conn = self.connect()?;
        conn.execute(CREATE_SESSIONS_TABLE, [])?;
        debug!(path = %self.db_path.display(), "session schema ready");
        Ok(())
    }
}

impl SessionStore for SqliteSessionStore {
    fn save(&self, session: &NewSession) -> Result<i64> {
        let conn = self.connect()?;
        let timestamp: DateTime<Utc> = Utc::now();

        conn.execute(
            "INSERT INTO sessions
                (filename, timestamp, code, analysis_results, execution_steps, variables_state, flow_graph)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
            params![
                session.filename,
                timestamp,
                session.code,
                serde_json::to_string(&session.analysis_results)?,
                serde_json::to_string(&session.execution_steps)?,
                serde_json::to_string(&session.variables_state)?,
                serde_json::to_string(&session.flow_graph)?,
            ],
        )?;

        let session_id = conn.last_insert_rowid();
        debug!(session_id, filename = %session.filename, "session saved");
        Ok(session_id)
    }

    fn load(&self, session_id: i64) -> Result<Option<Session>> {
        let conn = self.connect()?;
        let row = conn
            .query_row(
                "SELECT id, filename, timestamp, code, analysis_results, execution_steps,
                        variables_state, flow_graph
                 FROM sessions WHERE id = ?1",
                params![session_id],
                RawSession::from_row,
            )
            .optional()?;

        match row {
            Some(raw) => Ok(Some(raw.into_session()?)),
            None => {
                debug!(session_id, "session not found");
                Ok(None)
            }
        }
    }

    fn list_recent(&self, limit: usize) -> Result<Vec<SessionSummary>> {
        let conn = self.connect()?;
        let limit = i64::try_from(limit).unwrap_or(i64::MAX);

        let mut stmt = conn.prepare(
            "SELECT id, filename, timestamp
             FROM sessions
             ORDER BY timestamp DESC, id DESC
             LIMIT ?1",
        )?;

        let summaries = stmt
            .query_map(params![limit], |row| {
                Ok(SessionSummary {
                    id: row.get(0)?,
                    filename: row.get(1)?,
                    timestamp: row.get(2)?,
                })
            })?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(summaries)
    }

    fn delete(&self, session_id: i64) -> Result<()> {
        let conn = self.connect()?;
        let removed = conn.execute("DELETE FROM sessions WHERE id = ?1", params![session_id])?;
        debug!(session_id, removed, "session delete");
        Ok(())
    }
}

/// Row as stored, before the JSON blobs are decoded
struct RawSession {
    id: i64,
    filename: String,
    timestamp: DateTime<Utc>,
    code: Option<String>,
    analysis_results: Option<String>,
    execution_steps: Option<String>,
    variables_state: Option<String>,
    flow_graph: Option<String>,
}

impl RawSession {
    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get(0)?,
            filename: row.get(1)?,
            timestamp: row.get(2)?,
            code: row.get(3)?,
            analysis_results: row.get(4)?,
            execution_steps: row.get(5)?,
            variables_state: row.get(6)?,
            flow_graph: row.get(7)?,
        })
    }

    fn into_session(self) -> Result<Session> {
        Ok(Session {
            id: self.id,
            filename: self.filename,
            timestamp: self.timestamp,
            code: self.code.unwrap_or_default(),
            analysis_results: decode_blob(self.analysis_results, empty_object)?,
            execution_steps: decode_blob(self.execution_steps, || {
                serde_json::Value::Array(Vec::new())
            })?,
            variables_state: decode_blob(self.variables_state, empty_object)?,
            flow_graph: decode_blob(self.flow_graph, empty_object)?,
        })
    }
}

/// Decode a JSON blob; NULL and empty text fall back to `default`
fn decode_blob(
    blob: Option<String>,
    default: impl FnOnce() -> serde_json::Value,
) -> Result<serde_json::Value> {
    match blob {
        Some(text) if !text.is_empty() => Ok(serde_json::from_str(&text)?),
        _ => Ok(default()),
    }
}
