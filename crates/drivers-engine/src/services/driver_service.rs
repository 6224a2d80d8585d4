//! Driver domain service
//!
//! Every call reaches storage through a `LoggedRepository`, so each
//! operation is bracketed by start/end (or end_error) events without the
//! service repeating them. The service performs no validation of its own;
//! callers validate input with `drivers_core::rules` before submitting it.

use std::time::Instant;

use drivers_core::errors::{ExError, ExErrorKind, Result};
use drivers_core::{log_op_end, log_op_error, log_op_start, Driver, DriverRepository};
use rand::Rng;

use crate::faker;
use crate::logged::LoggedRepository;

const OP_CREATE_RANDOM: &str = "create_random_drivers";

/// CRUD and bulk-seed operations over a driver repository
#[derive(Debug, Clone)]
pub struct DriverService<R> {
    repo: LoggedRepository<R>,
}

impl<R: DriverRepository> DriverService<R> {
    pub fn new(repo: R) -> Self {
        Self {
            repo: LoggedRepository::new(repo),
        }
    }

    /// The undecorated repository
    pub fn repository(&self) -> &R {
        self.repo.inner()
    }

    /// All drivers in storage order
    ///
    /// # Errors
    /// Storage failure.
    pub fn list(&self) -> Result<Vec<Driver>> {
        self.repo.list()
    }

    /// A single driver, `None` when no row has this id
    ///
    /// # Errors
    /// Storage failure.
    pub fn get(&self, id: i64) -> Result<Option<Driver>> {
        self.repo.get(id)
    }

    /// Insert a driver and return the number of rows added
    ///
    /// # Errors
    /// `ConstraintViolation` on duplicate email or phone, otherwise storage failure.
    pub fn add(&self, driver: &Driver) -> Result<usize> {
        self.repo.add(driver)
    }

    /// Overwrite the driver with `driver.id`; 0 rows when it does not exist
    ///
    /// # Errors
    /// `ConstraintViolation` on duplicate email or phone, otherwise storage failure.
    pub fn update(&self, driver: &Driver) -> Result<usize> {
        self.repo.update(driver)
    }

    /// Delete the driver with `id`; 0 rows when it does not exist
    ///
    /// # Errors
    /// Storage failure.
    pub fn delete(&self, id: i64) -> Result<usize> {
        self.repo.delete(id)
    }

    /// Generate `count` synthetic drivers and insert them as one batch
    ///
    /// Returns the number of drivers inserted. A non-positive `count` submits
    /// an empty batch and returns 0.
    ///
    /// # Errors
    /// `InvalidInput` when `count` drivers cannot be allocated, otherwise
    /// storage failure; the batch is rolled back and nothing is inserted.
    pub fn create_random_drivers(&self, count: i64) -> Result<usize> {
        self.create_random_drivers_with_rng(&mut rand::thread_rng(), count)
    }

    /// `create_random_drivers` with a caller-supplied RNG
    ///
    /// # Errors
    /// `InvalidInput` when `count` drivers cannot be allocated, otherwise
    /// storage failure; the batch is rolled back and nothing is inserted.
    pub fn create_random_drivers_with_rng<G: Rng + ?Sized>(
        &self,
        rng: &mut G,
        count: i64,
    ) -> Result<usize> {
        log_op_start!(OP_CREATE_RANDOM, count = count);
        let start = Instant::now();

        let inserted = self.seed_batch(rng, count).map_err(|e| {
            log_op_error!(
                OP_CREATE_RANDOM,
                e.clone(),
                duration_ms = start.elapsed().as_millis() as u64,
                count = count
            );
            e
        })?;

        log_op_end!(
            OP_CREATE_RANDOM,
            duration_ms = start.elapsed().as_millis() as u64,
            rows = inserted
        );

        Ok(inserted)
    }

    fn seed_batch<G: Rng + ?Sized>(&self, rng: &mut G, count: i64) -> Result<usize> {
        let drivers = faker::random_drivers(rng, usize::try_from(count).unwrap_or(0)).map_err(|e| {
            ExError::new(ExErrorKind::InvalidInput)
                .with_op(OP_CREATE_RANDOM)
                .with_field("count")
                .with_message(format!("Cannot generate {} drivers: {}", count, e))
                .with_cause(e)
        })?;

        self.repo.bulk_insert(&drivers)?;
        Ok(drivers.len())
    }
}
