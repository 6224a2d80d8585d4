//! Schema bootstrap
//!
//! Provides:
//! - Embedded SQL for the `drivers` table and its seed row
//! - Idempotent `ensure_schema`, safe to run on every start

mod bootstrap;
mod embedded;

pub use bootstrap::ensure_schema;
pub use embedded::{SEED_EMAIL, SEED_PHONE_NUMBER};
