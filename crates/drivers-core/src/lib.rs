//! Driver registry core
//!
//! This crate provides the domain layer shared by storage, services and the CLI:
//! - The `Driver` model and its JSON shape
//! - The canonical error facility (`ExError`, `ExErrorKind`) and domain errors
//! - The `DriverRepository` port implemented by storage backends
//! - The case-insensitive alphabetizer
//! - Email and phone syntax validation
//! - Structured logging facility and configuration loading

pub mod alphabetize;
pub mod config;
pub mod errors;
pub mod logging_facility;
pub mod model;
pub mod ports;
pub mod rules;

// Re-export commonly used types
pub use alphabetize::alphabetize;
pub use config::Settings;
pub use errors::{DriverError, ExError, ExErrorKind, Result};
pub use model::Driver;
pub use ports::DriverRepository;

#[doc(hidden)]
pub use drivers_core_types::schema as log_schema;
