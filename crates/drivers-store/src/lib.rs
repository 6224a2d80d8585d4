//! Driver registry store - SQLite persistence
//!
//! Provides:
//! - Connection-string parsing and per-operation connection management
//! - Idempotent schema bootstrap with a seed driver
//! - `SqliteDriverRepository`, the SQLite implementation of `DriverRepository`

pub mod db;
pub mod errors;
pub mod repo;
pub mod schema;

// Re-export key types
pub use errors::Result;
pub use repo::SqliteDriverRepository;
pub use schema::ensure_schema;
