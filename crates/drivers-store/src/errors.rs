//! Error handling for drivers-store
//!
//! Classifies rusqlite failures into the core `ExError` taxonomy. The
//! original `rusqlite::Error` always travels along as the error's cause.

use drivers_core::errors::{ExError, ExErrorKind};

/// Result type alias using ExError
pub type Result<T> = std::result::Result<T, ExError>;

/// Kind for a rusqlite error; constraint failures map to `ConstraintViolation`
pub fn classify(err: &rusqlite::Error) -> ExErrorKind {
    match err {
        rusqlite::Error::SqliteFailure(e, _)
            if e.code == rusqlite::ErrorCode::ConstraintViolation =>
        {
            ExErrorKind::ConstraintViolation
        }
        _ => ExErrorKind::Persistence,
    }
}

/// Create a database error from rusqlite::Error
pub fn from_rusqlite(err: rusqlite::Error) -> ExError {
    sqlite_error("sqlite", err)
}

/// Create a database error from rusqlite::Error for a named operation
pub fn sqlite_error(op: &str, err: rusqlite::Error) -> ExError {
    ExError::new(classify(&err))
        .with_op(op)
        .with_message(err.to_string())
        .with_cause(err)
}

/// `map_err` adapter binding the operation name
pub fn sqlite_op(op: &'static str) -> impl Fn(rusqlite::Error) -> ExError {
    move |err| sqlite_error(op, err)
}

/// Create an invalid connection string error
pub fn invalid_connection_string(connection_string: &str, reason: &str) -> ExError {
    ExError::new(ExErrorKind::InvalidInput)
        .with_op("parse_connection_string")
        .with_field("connection_string")
        .with_message(format!(
            "Invalid connection string '{}': {}",
            connection_string, reason
        ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_constraint_failure_classified() {
        let conn = rusqlite::Connection::open_in_memory().unwrap();
        conn.execute_batch("CREATE TABLE t (v TEXT NOT NULL UNIQUE); INSERT INTO t VALUES ('a');")
            .unwrap();
        let err = conn
            .execute("INSERT INTO t VALUES ('a')", [])
            .map_err(sqlite_op("insert_t"))
            .unwrap_err();

        assert_eq!(err.kind(), ExErrorKind::ConstraintViolation);
        assert_eq!(err.op(), Some("insert_t"));
        assert!(err.source().is_some());
    }

    #[test]
    fn test_malformed_sql_is_persistence() {
        let conn = rusqlite::Connection::open_in_memory().unwrap();
        let err = from_rusqlite(conn.execute("SELEKT 1", []).unwrap_err());
        assert_eq!(err.kind(), ExErrorKind::Persistence);
        assert_eq!(err.op(), Some("sqlite"));
    }
}
