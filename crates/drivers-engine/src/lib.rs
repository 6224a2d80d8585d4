//! Driver registry engine - services over a `DriverRepository`
//!
//! Provides:
//! - `LoggedRepository`, a decorator that logs every repository call
//! - `DriverService`, the CRUD and bulk-seed service
//! - `OperationService`, alphabetize orchestration over the driver service
//! - Synthetic driver generation for seeding
//!
//! ## Logging Ownership
//!
//! The engine owns lifecycle logging (`log_op_start!`, `log_op_end!`,
//! `log_op_error!`). The store below it emits only `tracing::debug!`.

pub mod faker;
pub mod logged;
pub mod services;

pub use logged::LoggedRepository;
pub use services::{DriverService, OperationService};
