//! Name alphabetizer
//!
//! Sorts the characters of each name field into ascending order, comparing
//! characters by their lowercase form while keeping each character's
//! original case in the output. `slice::sort_by` is stable, so characters
//! that compare equal (`'J'` and `'j'`) keep their original relative order.

use crate::errors::{DriverError, ExError, Result};
use crate::model::Driver;

/// Sort the characters of `value` case-insensitively, preserving case
///
/// # Example
///
/// ```
/// use drivers_core::alphabetize::sort_chars_case_insensitive;
///
/// assert_eq!(sort_chars_case_insensitive("John"), "hJno");
/// assert_eq!(sort_chars_case_insensitive("Mickel"), "ceiklM");
/// ```
pub fn sort_chars_case_insensitive(value: &str) -> String {
    let mut chars: Vec<char> = value.chars().collect();
    chars.sort_by(|a, b| a.to_lowercase().cmp(b.to_lowercase()));
    chars.into_iter().collect()
}

/// Alphabetize a driver's name as `"<sorted first> <sorted last>"`
///
/// # Errors
/// Returns an `InvalidInput` error naming the field when the first or last
/// name is empty.
pub fn alphabetize(driver: &Driver) -> Result<String> {
    if driver.first_name.is_empty() {
        return Err(name_missing(driver, "firstName"));
    }
    if driver.last_name.is_empty() {
        return Err(name_missing(driver, "lastName"));
    }

    Ok(format!(
        "{} {}",
        sort_chars_case_insensitive(&driver.first_name),
        sort_chars_case_insensitive(&driver.last_name)
    ))
}

fn name_missing(driver: &Driver, field: &'static str) -> ExError {
    let err: ExError = DriverError::MissingName { field }.into();
    err.with_op("alphabetize").with_driver_id(driver.id)
}
