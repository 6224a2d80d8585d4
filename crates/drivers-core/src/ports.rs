//! Storage port for drivers
//!
//! The service layer depends on this trait only. The SQLite gateway in
//! `drivers-store` implements it, the logging decorator in `drivers-engine`
//! wraps any implementation of it, and tests substitute in-memory fakes.

use crate::errors::Result;
use crate::model::Driver;

/// CRUD and bulk-insert contract over the `drivers` table
///
/// Absence is never an error: `get` returns `None` and `update`/`delete`
/// return zero affected rows when no row has the given id. Storage
/// failures are returned as `ExError` values whose kind satisfies
/// `is_storage()`.
pub trait DriverRepository {
    /// All drivers in storage order
    ///
    /// # Errors
    /// Storage failure.
    fn list(&self) -> Result<Vec<Driver>>;

    /// A single driver by id
    ///
    /// # Errors
    /// Storage failure.
    fn get(&self, id: i64) -> Result<Option<Driver>>;

    /// Insert a driver; storage assigns the id. Returns rows affected.
    ///
    /// # Errors
    /// `ConstraintViolation` on duplicate email or phone, otherwise storage failure.
    fn add(&self, driver: &Driver) -> Result<usize>;

    /// Overwrite every field of the row matching `driver.id`. Returns rows affected.
    ///
    /// # Errors
    /// `ConstraintViolation` on duplicate email or phone, otherwise storage failure.
    fn update(&self, driver: &Driver) -> Result<usize>;

    /// Remove the row with the given id. Returns rows affected.
    ///
    /// # Errors
    /// Storage failure.
    fn delete(&self, id: i64) -> Result<usize>;

    /// Insert all drivers atomically: every row commits or none do
    ///
    /// # Errors
    /// The first row failure, after the whole batch has been rolled back.
    fn bulk_insert(&self, drivers: &[Driver]) -> Result<()>;
}

impl<R: DriverRepository + ?Sized> DriverRepository for &R {
    fn list(&self) -> Result<Vec<Driver>> {
        (**self).list()
    }

    fn get(&self, id: i64) -> Result<Option<Driver>> {
        (**self).get(id)
    }

    fn add(&self, driver: &Driver) -> Result<usize> {
        (**self).add(driver)
    }

    fn update(&self, driver: &Driver) -> Result<usize> {
        (**self).update(driver)
    }

    fn delete(&self, id: i64) -> Result<usize> {
        (**self).delete(id)
    }

    fn bulk_insert(&self, drivers: &[Driver]) -> Result<()> {
        (**self).bulk_insert(drivers)
    }
}
