//! Repository layer persisting drivers to SQLite

pub mod sqlite_repo;

pub use sqlite_repo::SqliteDriverRepository;
