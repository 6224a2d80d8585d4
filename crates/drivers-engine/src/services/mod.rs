//! Domain services
//!
//! `DriverService` is the entry point for every driver operation.
//! `OperationService` layers alphabetize orchestration on top of it.

pub mod driver_service;
pub mod operation_service;

pub use driver_service::DriverService;
pub use operation_service::OperationService;
