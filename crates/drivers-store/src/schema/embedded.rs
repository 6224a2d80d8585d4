//! Embedded schema SQL
//!
//! Statements are embedded at compile time using include_str!

/// Ordered bootstrap step
pub struct SchemaStep {
    pub id: &'static str,
    pub sql: &'static str,
}

/// Email of the seed driver inserted by `002_seed_driver`
pub const SEED_EMAIL: &str = "john.doe@example.com";

/// Phone number of the seed driver inserted by `002_seed_driver`
pub const SEED_PHONE_NUMBER: &str = "(123) 456-7890";

/// All bootstrap steps in order
pub fn schema_steps() -> [SchemaStep; 2] {
    [
        SchemaStep {
            id: "001_create_drivers",
            sql: include_str!("../../sql/001_create_drivers.sql"),
        },
        SchemaStep {
            id: "002_seed_driver",
            sql: include_str!("../../sql/002_seed_driver.sql"),
        },
    ]
}
