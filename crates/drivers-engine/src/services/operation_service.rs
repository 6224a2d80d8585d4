//! Alphabetize orchestration
//!
//! Fetches drivers through a `DriverService` and maps them through the pure
//! transform in `drivers_core::alphabetize`, with lifecycle logging around
//! each operation.

use std::time::Instant;

use drivers_core::errors::Result;
use drivers_core::{alphabetize, log_op_end, log_op_error, log_op_start, Driver, DriverRepository};

use super::DriverService;

const OP_ALPHABETIZE: &str = "alphabetize";
const OP_ALPHABETIZE_ALL: &str = "alphabetize_all";
const OP_ALPHABETIZE_BY_ID: &str = "alphabetize_by_id";

/// Operations that derive values from stored drivers
#[derive(Debug)]
pub struct OperationService<'a, R> {
    drivers: &'a DriverService<R>,
}

impl<'a, R: DriverRepository> OperationService<'a, R> {
    pub fn new(drivers: &'a DriverService<R>) -> Self {
        Self { drivers }
    }

    /// Alphabetize a single driver's name
    ///
    /// # Errors
    /// `InvalidInput` when the first or last name is empty.
    pub fn alphabetize(&self, driver: &Driver) -> Result<String> {
        log_op_start!(OP_ALPHABETIZE, driver_id = driver.id);
        let start = Instant::now();

        let name = alphabetize(driver).map_err(|e| {
            log_op_error!(
                OP_ALPHABETIZE,
                e.clone(),
                duration_ms = start.elapsed().as_millis() as u64
            );
            e
        })?;

        log_op_end!(
            OP_ALPHABETIZE,
            duration_ms = start.elapsed().as_millis() as u64,
            driver_id = driver.id
        );
        Ok(name)
    }

    /// Alphabetized names of every stored driver, in fetch order
    ///
    /// # Errors
    /// Storage failure while listing, or `InvalidInput` for a stored driver
    /// with an empty name.
    pub fn alphabetize_all(&self) -> Result<Vec<String>> {
        log_op_start!(OP_ALPHABETIZE_ALL);
        let start = Instant::now();

        let names = self
            .drivers
            .list()
            .and_then(|drivers| drivers.iter().map(alphabetize).collect::<Result<Vec<_>>>())
            .map_err(|e| {
                log_op_error!(
                    OP_ALPHABETIZE_ALL,
                    e.clone(),
                    duration_ms = start.elapsed().as_millis() as u64
                );
                e
            })?;

        log_op_end!(
            OP_ALPHABETIZE_ALL,
            duration_ms = start.elapsed().as_millis() as u64,
            rows = names.len()
        );
        Ok(names)
    }

    /// Alphabetized name of one stored driver, `None` when it does not exist
    ///
    /// # Errors
    /// Storage failure, or `InvalidInput` when the stored name is empty.
    pub fn alphabetize_by_id(&self, id: i64) -> Result<Option<String>> {
        log_op_start!(OP_ALPHABETIZE_BY_ID, driver_id = id);
        let start = Instant::now();

        let name = self
            .drivers
            .get(id)
            .and_then(|found| found.as_ref().map(alphabetize).transpose())
            .map_err(|e| {
                log_op_error!(
                    OP_ALPHABETIZE_BY_ID,
                    e.clone(),
                    duration_ms = start.elapsed().as_millis() as u64,
                    driver_id = id
                );
                e
            })?;

        log_op_end!(
            OP_ALPHABETIZE_BY_ID,
            duration_ms = start.elapsed().as_millis() as u64,
            driver_id = id,
            found = name.is_some()
        );
        Ok(name)
    }
}
