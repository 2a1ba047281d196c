//! Database connection management and schema setup

use rusqlite::Connection;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

/// Database error type
#[derive(Error, Debug)]
pub enum DatabaseError {
    #[error("connection to {} failed: {source}", .path.display())]
    ConnectionFailed {
        path: PathBuf,
        #[source]
        source: rusqlite::Error,
    },
    #[error("schema setup failed: {0}")]
    SchemaFailed(#[source] rusqlite::Error),
    #[error("query failed: {0}")]
    QueryFailed(#[from] rusqlite::Error),
}

/// Wrapper around a SQLite connection to the catalog store
///
/// A `Database` lives for a single catalog operation. Dropping it closes the
/// connection.
pub struct Database {
    pub conn: Connection,
}

impl Database {
    /// Open the store file at `path`, creating an empty file if absent.
    ///
    /// This does not create the `papers` table; see [`Database::ensure_schema`].
    pub fn open(path: &Path) -> Result<Self, DatabaseError> {
        debug!("Opening database at {:?}", path);

        let conn = Connection::open(path).map_err(|source| DatabaseError::ConnectionFailed {
            path: path.to_path_buf(),
            source,
        })?;

        Ok(Self { conn })
    }

    /// Create the `papers` table if it does not already exist
    pub fn ensure_schema(&self) -> Result<(), DatabaseError> {
        self.conn
            .execute_batch(include_str!("schema.sql"))
            .map_err(DatabaseError::SchemaFailed)?;
        Ok(())
    }
}

/// Open the store at `path` and make sure its schema exists, then close it.
///
/// Called once per invocation before any command is dispatched.
pub fn init_store(path: &Path) -> Result<(), DatabaseError> {
    let db = Database::open(path)?;
    db.ensure_schema()?;
    info!("Catalog store ready at {:?}", path);
    Ok(())
}
