//! Database connection management
//!
//! Parses the configured connection string and opens SQLite connections.
//! Connections are opened per operation and closed when dropped.

use std::path::{Path, PathBuf};

use crate::errors::{invalid_connection_string, sqlite_op, Result};
use rusqlite::Connection;

const DATA_SOURCE_KEYS: [&str; 3] = ["data source", "datasource", "filename"];

/// Resolve the SQLite file path named by a connection string
///
/// Accepts a bare path (`drivers.db`) or the key/value form
/// (`Data Source=drivers.db;Version=3;`). Keys are case-insensitive and
/// unknown keys are ignored.
///
/// # Errors
/// `InvalidInput` when the string is empty or names no data source.
pub fn data_source(connection_string: &str) -> Result<PathBuf> {
    let trimmed = connection_string.trim();
    if trimmed.is_empty() {
        return Err(invalid_connection_string(connection_string, "empty"));
    }

    if !trimmed.contains('=') {
        return Ok(PathBuf::from(trimmed));
    }

    let source = trimmed
        .split(';')
        .filter_map(|pair| pair.split_once('='))
        .find(|(key, _)| {
            let key = key.trim().to_ascii_lowercase();
            DATA_SOURCE_KEYS.contains(&key.as_str())
        })
        .map(|(_, value)| value.trim())
        .filter(|value| !value.is_empty());

    match source {
        Some(path) => Ok(PathBuf::from(path)),
        None => Err(invalid_connection_string(
            connection_string,
            "no Data Source given",
        )),
    }
}

/// Open a SQLite database at the given path
pub fn open<P: AsRef<Path>>(path: P) -> Result<Connection> {
    Connection::open(path).map_err(sqlite_op("open"))
}

/// Open an in-memory SQLite database (for testing)
pub fn open_in_memory() -> Result<Connection> {
    Connection::open_in_memory().map_err(sqlite_op("open"))
}

/// Configure a connection
pub fn configure(conn: &Connection) -> Result<()> {
    // WAL lets readers proceed while a bulk insert is writing
    conn.pragma_update_and_check(None, "journal_mode", "WAL", |row| row.get::<_, String>(0))
        .map_err(sqlite_op("configure"))?;

    Ok(())
}
