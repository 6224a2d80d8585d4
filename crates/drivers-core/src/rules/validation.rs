//! Syntactic validation of driver contact fields
//!
//! These checks are syntax only. Uniqueness of email and phone is a storage
//! constraint and is never checked here.

use std::sync::OnceLock;

use regex::Regex;

use crate::errors::DriverError;
use crate::model::Driver;

const MIN_PHONE_DIGITS: usize = 7;
const MAX_PHONE_DIGITS: usize = 15;

fn email_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^[^@\s]+@[^@\s.]+(\.[^@\s.]+)+$").expect("email pattern is valid")
    })
}

fn phone_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^[0-9 ()+.\-]+$").expect("phone pattern is valid"))
}

/// Validate that `email` is a syntactically valid address
///
/// Requires exactly one `@`, a non-empty local part and a dotted domain
/// with non-empty labels. Whitespace is rejected anywhere.
///
/// # Errors
/// Returns `DriverError::InvalidEmail` when the syntax check fails.
pub fn validate_email(email: &str) -> Result<(), DriverError> {
    if email_pattern().is_match(email) {
        Ok(())
    } else {
        Err(DriverError::InvalidEmail {
            email: email.to_string(),
        })
    }
}

/// Validate that `phone` is a syntactically valid phone number
///
/// Accepts digits with the usual separators (`(`, `)`, `-`, `.`, spaces and
/// a `+` prefix) and between 7 and 15 digits in total.
///
/// # Errors
/// Returns `DriverError::InvalidPhone` when the syntax check fails.
pub fn validate_phone(phone: &str) -> Result<(), DriverError> {
    let digits = phone.chars().filter(char::is_ascii_digit).count();
    let plus_ok = phone.rfind('+').map_or(true, |idx| idx == 0);

    if phone_pattern().is_match(phone)
        && plus_ok
        && (MIN_PHONE_DIGITS..=MAX_PHONE_DIGITS).contains(&digits)
    {
        Ok(())
    } else {
        Err(DriverError::InvalidPhone {
            phone: phone.to_string(),
        })
    }
}

/// Validate every field of a driver
///
/// # Errors
/// Returns the first failing check: missing first name, missing last name,
/// invalid email, invalid phone.
pub fn validate_driver(driver: &Driver) -> Result<(), DriverError> {
    if driver.first_name.trim().is_empty() {
        return Err(DriverError::MissingName {
            field: "firstName",
        });
    }
    if driver.last_name.trim().is_empty() {
        return Err(DriverError::MissingName { field: "lastName" });
    }
    validate_email(&driver.email)?;
    validate_phone(&driver.phone_number)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_contact_is_valid() {
        assert!(validate_email("john.doe@example.com").is_ok());
        assert!(validate_phone("(123) 456-7890").is_ok());
    }

    #[test]
    fn test_plus_only_allowed_as_prefix() {
        assert!(validate_phone("+44 20 7946 0958").is_ok());
        assert!(validate_phone("44+20 7946 0958").is_err());
    }
}
