//! Schema bootstrap runner

use crate::errors::{sqlite_error, Result};
use crate::schema::embedded::schema_steps;
use rusqlite::Connection;

/// Create the `drivers` table if absent and insert the seed driver if absent
///
/// Every step is idempotent, so this runs on each process start. The seed
/// insert is ignored when a row with the same email or phone already exists.
///
/// # Errors
/// `Persistence` if a statement fails.
pub fn ensure_schema(conn: &Connection) -> Result<()> {
    for step in schema_steps() {
        conn.execute_batch(step.sql).map_err(|e| {
            let message = format!("Schema step {} failed: {}", step.id, e);
            sqlite_error("ensure_schema", e).with_message(message)
        })?;
        tracing::debug!(step = step.id, "schema step applied");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ensure_schema() {
        let conn = Connection::open_in_memory().unwrap();
        assert!(ensure_schema(&conn).is_ok());
    }

    #[test]
    fn test_idempotency() {
        let conn = Connection::open_in_memory().unwrap();
        ensure_schema(&conn).unwrap();
        assert!(ensure_schema(&conn).is_ok());

        let count: i64 = conn
            .query_row("SELECT COUNT(*) FROM drivers", [], |r| r.get(0))
            .unwrap();
        assert_eq!(count, 1);
    }
}
