pub mod add;
pub mod alphabetize;
pub mod delete;
pub mod fake;
pub mod get;
pub mod update;

use drivers_engine::DriverService;
use drivers_store::SqliteDriverRepository;

pub type Drivers = DriverService<SqliteDriverRepository>;

pub type CommandResult = Result<(), Box<dyn std::error::Error>>;

/// Error returned when a command names a driver that does not exist
pub fn not_found(id: i64) -> Box<dyn std::error::Error> {
    format!("Driver {} does not exist", id).into()
}
