//! Logging decorator for driver repositories
//!
//! `LoggedRepository<R>` implements `DriverRepository` by delegating to `R`
//! and wrapping each call in start/end/error events. Errors pass through
//! unchanged after being logged. Zero-row mutations and absent lookups are
//! not errors and are reported with an additional warning.

use std::time::Instant;

use drivers_core::errors::Result;
use drivers_core::{log_op_end, log_op_error, log_op_start, Driver, DriverRepository};
use drivers_core_types::Sensitive;

pub const OP_LIST: &str = "driver_list";
pub const OP_GET: &str = "driver_get";
pub const OP_ADD: &str = "driver_add";
pub const OP_UPDATE: &str = "driver_update";
pub const OP_DELETE: &str = "driver_delete";
pub const OP_BULK_INSERT: &str = "driver_bulk_insert";

/// Repository decorator emitting structured operation logs
#[derive(Debug, Clone)]
pub struct LoggedRepository<R> {
    inner: R,
}

impl<R> LoggedRepository<R> {
    pub fn new(inner: R) -> Self {
        Self { inner }
    }

    pub fn inner(&self) -> &R {
        &self.inner
    }

    pub fn into_inner(self) -> R {
        self.inner
    }
}

fn elapsed_ms(start: Instant) -> u64 {
    start.elapsed().as_millis() as u64
}

/// Run `call`, logging its error or handing the value and duration to `on_ok`
///
/// `driver_id` is attached to the error event when the operation targets
/// one driver.
fn observe<T>(
    op: &'static str,
    driver_id: Option<i64>,
    call: impl FnOnce() -> Result<T>,
    on_ok: impl FnOnce(&T, u64),
) -> Result<T> {
    let start = Instant::now();
    match call() {
        Ok(value) => {
            on_ok(&value, elapsed_ms(start));
            Ok(value)
        }
        Err(err) => {
            log_op_error!(
                op,
                err.clone(),
                duration_ms = elapsed_ms(start),
                driver_id = driver_id
            );
            Err(err)
        }
    }
}

fn trace_contact(op: &'static str, driver: &Driver) {
    tracing::debug!(
        op = op,
        email = %Sensitive::new(&driver.email),
        phone_number = %Sensitive::new(&driver.phone_number),
        "driver contact fields"
    );
}

impl<R: DriverRepository> DriverRepository for LoggedRepository<R> {
    fn list(&self) -> Result<Vec<Driver>> {
        log_op_start!(OP_LIST);
        observe(
            OP_LIST,
            None,
            || self.inner.list(),
            |drivers, ms| {
                log_op_end!(OP_LIST, duration_ms = ms, rows = drivers.len());
            },
        )
    }

    fn get(&self, id: i64) -> Result<Option<Driver>> {
        log_op_start!(OP_GET, driver_id = id);
        observe(
            OP_GET,
            Some(id),
            || self.inner.get(id),
            |found, ms| {
                log_op_end!(OP_GET, duration_ms = ms, driver_id = id, found = found.is_some());
                if found.is_none() {
                    tracing::warn!(op = OP_GET, driver_id = id, "Driver does not exist");
                }
            },
        )
    }

    fn add(&self, driver: &Driver) -> Result<usize> {
        log_op_start!(OP_ADD, name = %driver.full_name());
        trace_contact(OP_ADD, driver);
        observe(
            OP_ADD,
            None,
            || self.inner.add(driver),
            |rows, ms| {
                log_op_end!(OP_ADD, duration_ms = ms, rows = *rows);
                if *rows == 0 {
                    tracing::warn!(op = OP_ADD, "Driver could not be added: no rows affected");
                }
            },
        )
    }

    fn update(&self, driver: &Driver) -> Result<usize> {
        log_op_start!(OP_UPDATE, driver_id = driver.id, name = %driver.full_name());
        trace_contact(OP_UPDATE, driver);
        observe(
            OP_UPDATE,
            Some(driver.id),
            || self.inner.update(driver),
            |rows, ms| {
                log_op_end!(OP_UPDATE, duration_ms = ms, driver_id = driver.id, rows = *rows);
                if *rows == 0 {
                    tracing::warn!(
                        op = OP_UPDATE,
                        driver_id = driver.id,
                        "Driver could not be updated: no rows affected"
                    );
                }
            },
        )
    }

    fn delete(&self, id: i64) -> Result<usize> {
        log_op_start!(OP_DELETE, driver_id = id);
        observe(
            OP_DELETE,
            Some(id),
            || self.inner.delete(id),
            |rows, ms| {
                log_op_end!(OP_DELETE, duration_ms = ms, driver_id = id, rows = *rows);
                if *rows == 0 {
                    tracing::warn!(
                        op = OP_DELETE,
                        driver_id = id,
                        "Driver could not be deleted: no rows affected"
                    );
                }
            },
        )
    }

    fn bulk_insert(&self, drivers: &[Driver]) -> Result<()> {
        log_op_start!(OP_BULK_INSERT, count = drivers.len());
        observe(
            OP_BULK_INSERT,
            None,
            || self.inner.bulk_insert(drivers),
            |_, ms| {
                log_op_end!(OP_BULK_INSERT, duration_ms = ms, rows = drivers.len());
            },
        )
    }
}
