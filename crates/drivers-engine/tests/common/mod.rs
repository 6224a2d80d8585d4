// Shared fakes for engine tests.

#![allow(dead_code)]

use std::sync::Mutex;

use drivers_core::errors::{ExError, ExErrorKind, Result};
use drivers_core::{Driver, DriverRepository};

/// In-memory repository enforcing the same constraints as the table
#[derive(Default)]
pub struct InMemoryRepository {
    state: Mutex<State>,
}

#[derive(Default)]
struct State {
    rows: Vec<Driver>,
    next_id: i64,
}

impl InMemoryRepository {
    pub fn with_drivers(drivers: &[Driver]) -> Self {
        let repo = Self::default();
        for driver in drivers {
            repo.add(driver).unwrap();
        }
        repo
    }

    pub fn len(&self) -> usize {
        self.state.lock().unwrap().rows.len()
    }
}

fn duplicate(op: &str, column: &str) -> ExError {
    ExError::new(ExErrorKind::ConstraintViolation)
        .with_op(op)
        .with_message(format!("UNIQUE constraint failed: drivers.{}", column))
}

fn check_constraints(rows: &[Driver], candidate: &Driver, op: &str) -> Result<()> {
    if candidate.first_name.trim().is_empty() || candidate.last_name.trim().is_empty() {
        return Err(ExError::new(ExErrorKind::ConstraintViolation)
            .with_op(op)
            .with_message("CHECK constraint failed: drivers"));
    }
    let others = rows.iter().filter(|d| d.id != candidate.id);
    for other in others {
        if other.email == candidate.email {
            return Err(duplicate(op, "email"));
        }
        if other.phone_number == candidate.phone_number {
            return Err(duplicate(op, "phoneNumber"));
        }
    }
    Ok(())
}

impl State {
    fn insert(&mut self, driver: &Driver, op: &str) -> Result<()> {
        let stored = driver.clone().with_id(self.next_id + 1);
        check_constraints(&self.rows, &stored, op)?;
        self.next_id += 1;
        self.rows.push(stored);
        Ok(())
    }
}

impl DriverRepository for InMemoryRepository {
    fn list(&self) -> Result<Vec<Driver>> {
        Ok(self.state.lock().unwrap().rows.clone())
    }

    fn get(&self, id: i64) -> Result<Option<Driver>> {
        let state = self.state.lock().unwrap();
        Ok(state.rows.iter().find(|d| d.id == id).cloned())
    }

    fn add(&self, driver: &Driver) -> Result<usize> {
        self.state.lock().unwrap().insert(driver, "driver_add")?;
        Ok(1)
    }

    fn update(&self, driver: &Driver) -> Result<usize> {
        let mut state = self.state.lock().unwrap();
        check_constraints(&state.rows, driver, "driver_update")?;
        match state.rows.iter_mut().find(|d| d.id == driver.id) {
            Some(row) => {
                *row = driver.clone();
                Ok(1)
            }
            None => Ok(0),
        }
    }

    fn delete(&self, id: i64) -> Result<usize> {
        let mut state = self.state.lock().unwrap();
        let before = state.rows.len();
        state.rows.retain(|d| d.id != id);
        Ok(before - state.rows.len())
    }

    fn bulk_insert(&self, drivers: &[Driver]) -> Result<()> {
        let mut state = self.state.lock().unwrap();
        let rows = state.rows.clone();
        let next_id = state.next_id;
        for driver in drivers {
            if let Err(e) = state.insert(driver, "driver_bulk_insert") {
                state.rows = rows;
                state.next_id = next_id;
                return Err(e);
            }
        }
        Ok(())
    }
}

/// Repository whose every call fails with a persistence error
pub struct FailingRepository;

fn unavailable(op: &str) -> ExError {
    ExError::new(ExErrorKind::Persistence)
        .with_op(op)
        .with_message("database is locked")
}

impl DriverRepository for FailingRepository {
    fn list(&self) -> Result<Vec<Driver>> {
        Err(unavailable("driver_list"))
    }

    fn get(&self, _id: i64) -> Result<Option<Driver>> {
        Err(unavailable("driver_get"))
    }

    fn add(&self, _driver: &Driver) -> Result<usize> {
        Err(unavailable("driver_add"))
    }

    fn update(&self, _driver: &Driver) -> Result<usize> {
        Err(unavailable("driver_update"))
    }

    fn delete(&self, _id: i64) -> Result<usize> {
        Err(unavailable("driver_delete"))
    }

    fn bulk_insert(&self, _drivers: &[Driver]) -> Result<()> {
        Err(unavailable("driver_bulk_insert"))
    }
}

pub fn john() -> Driver {
    Driver::new("John", "Doe", "john.doe@example.com", "(123) 456-7890")
}

pub fn jane() -> Driver {
    Driver::new("Jane", "Mickel", "jane.mickel@example.com", "(555) 201-3344")
}
