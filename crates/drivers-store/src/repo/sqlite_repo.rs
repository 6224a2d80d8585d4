//! SQLite repository implementation
//!
//! Persists drivers to the `drivers` table. Each operation opens its own
//! connection from the configured path and drops it before returning, on
//! success and error alike.

use std::path::{Path, PathBuf};

use crate::db;
use crate::errors::{sqlite_op, Result};
use crate::schema::ensure_schema;
use drivers_core::{Driver, DriverRepository};
use rusqlite::{Connection, OptionalExtension, Row};

// Column order is significant: rows are materialized positionally.
const SELECT_DRIVERS: &str = "SELECT id, firstName, lastName, email, phoneNumber FROM drivers";

const INSERT_DRIVER: &str = "INSERT INTO drivers (firstName, lastName, email, phoneNumber)
     VALUES (?1, ?2, ?3, ?4)";

const UPDATE_DRIVER: &str = "UPDATE drivers
     SET firstName = ?2, lastName = ?3, email = ?4, phoneNumber = ?5
     WHERE id = ?1";

const DELETE_DRIVER: &str = "DELETE FROM drivers WHERE id = ?1";

/// SQLite repository for drivers
#[derive(Debug, Clone)]
pub struct SqliteDriverRepository {
    path: PathBuf,
}

impl SqliteDriverRepository {
    /// Repository over the SQLite file at `path`
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Repository over the file named by a connection string
    ///
    /// # Errors
    /// `InvalidInput` if the connection string names no data source.
    pub fn from_connection_string(connection_string: &str) -> Result<Self> {
        Ok(Self::new(db::data_source(connection_string)?))
    }

    /// Path of the backing SQLite file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Create the schema and seed driver if they do not exist yet
    ///
    /// # Errors
    /// Storage failure while opening the file or running the schema SQL.
    pub fn bootstrap(&self) -> Result<()> {
        let conn = self.connect()?;
        ensure_schema(&conn)
    }

    fn connect(&self) -> Result<Connection> {
        let conn = db::open(&self.path)?;
        db::configure(&conn)?;
        Ok(conn)
    }
}

fn driver_from_row(row: &Row<'_>) -> rusqlite::Result<Driver> {
    Ok(Driver {
        id: row.get(0)?,
        first_name: row.get(1)?,
        last_name: row.get(2)?,
        email: row.get(3)?,
        phone_number: row.get(4)?,
    })
}

impl DriverRepository for SqliteDriverRepository {
    fn list(&self) -> Result<Vec<Driver>> {
        let conn = self.connect()?;
        let mut stmt = conn.prepare(SELECT_DRIVERS).map_err(sqlite_op("driver_list"))?;

        let drivers = stmt
            .query_map([], driver_from_row)
            .map_err(sqlite_op("driver_list"))?
            .collect::<rusqlite::Result<Vec<_>>>()
            .map_err(sqlite_op("driver_list"))?;

        tracing::debug!(rows = drivers.len(), "drivers scanned");
        Ok(drivers)
    }

    fn get(&self, id: i64) -> Result<Option<Driver>> {
        let conn = self.connect()?;
        let mut stmt = conn
            .prepare(&format!("{} WHERE id = ?1", SELECT_DRIVERS))
            .map_err(sqlite_op("driver_get"))?;

        let driver = stmt
            .query_row([id], driver_from_row)
            .optional()
            .map_err(|e| sqlite_op("driver_get")(e).with_driver_id(id))?;

        Ok(driver)
    }

    fn add(&self, driver: &Driver) -> Result<usize> {
        let conn = self.connect()?;
        conn.execute(
            INSERT_DRIVER,
            rusqlite::params![
                driver.first_name,
                driver.last_name,
                driver.email,
                driver.phone_number,
            ],
        )
        .map_err(sqlite_op("driver_add"))
    }

    fn update(&self, driver: &Driver) -> Result<usize> {
        let conn = self.connect()?;
        conn.execute(
            UPDATE_DRIVER,
            rusqlite::params![
                driver.id,
                driver.first_name,
                driver.last_name,
                driver.email,
                driver.phone_number,
            ],
        )
        .map_err(|e| sqlite_op("driver_update")(e).with_driver_id(driver.id))
    }

    fn delete(&self, id: i64) -> Result<usize> {
        let conn = self.connect()?;
        conn.execute(DELETE_DRIVER, [id])
            .map_err(|e| sqlite_op("driver_delete")(e).with_driver_id(id))
    }

    fn bulk_insert(&self, drivers: &[Driver]) -> Result<()> {
        let mut conn = self.connect()?;
        // Dropping the transaction without commit rolls the batch back.
        let tx = conn.transaction().map_err(sqlite_op("driver_bulk_insert"))?;
        {
            let mut stmt = tx
                .prepare(INSERT_DRIVER)
                .map_err(sqlite_op("driver_bulk_insert"))?;

            for (index, driver) in drivers.iter().enumerate() {
                stmt.execute(rusqlite::params![
                    driver.first_name,
                    driver.last_name,
                    driver.email,
                    driver.phone_number,
                ])
                .map_err(|e| {
                    let message = format!(
                        "Row {} of {} rejected, batch rolled back: {}",
                        index + 1,
                        drivers.len(),
                        e
                    );
                    sqlite_op("driver_bulk_insert")(e).with_message(message)
                })?;
            }
        }
        tx.commit().map_err(sqlite_op("driver_bulk_insert"))?;

        tracing::debug!(rows = drivers.len(), "bulk insert committed");
        Ok(())
    }
}
