//! SQLite access for the feedback record store.
//!
//! Records are kept in a single table; `answers` holds the submitted answers
//! as JSON text so that fields can be added without a migration. Connections
//! are opened per request from the configured path.

use rusqlite::Connection;
use std::path::{Path, PathBuf};

const SCHEMA: &str = "CREATE TABLE IF NOT EXISTS feedback (
    id         TEXT PRIMARY KEY,
    answers    TEXT NOT NULL,
    created_at TEXT NOT NULL
)";

/// Location of the feedback database, shared with every handler as `web::Data`.
#[derive(Debug, Clone)]
pub struct Database {
    path: PathBuf,
}

impl Database {
    /// Creates the schema if needed and returns a handle to the database file.
    pub fn initialize(path: impl AsRef<Path>) -> Result<Self, String> {
        let db = Self {
            path: path.as_ref().to_path_buf(),
        };
        db.connect()?
            .execute(SCHEMA, [])
            .map_err(|e| e.to_string())?;
        Ok(db)
    }

    pub fn connect(&self) -> Result<Connection, String> {
        Connection::open(&self.path).map_err(|e| e.to_string())
    }
}
