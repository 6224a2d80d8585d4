pub mod validation;

pub use validation::{validate_driver, validate_email, validate_phone};
