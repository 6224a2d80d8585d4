//! Update command
//!
//! Usage: drivers update --id <ID> --first-name <F> --last-name <L> [--email <E>] [--phone-number <P>]

use clap::Args;
use drivers_core::errors::ExError;
use drivers_core::rules::validate_driver;
use drivers_core::Driver;

use super::{not_found, CommandResult, Drivers};

#[derive(Debug, Args)]
pub struct UpdateArgs {
    #[arg(long)]
    pub id: i64,

    #[arg(long)]
    pub first_name: String,

    #[arg(long)]
    pub last_name: String,

    /// Defaults to the stored email
    #[arg(long)]
    pub email: Option<String>,

    /// Defaults to the stored phone number
    #[arg(long)]
    pub phone_number: Option<String>,
}

/// Execute update command
pub fn execute(drivers: &Drivers, args: UpdateArgs) -> CommandResult {
    let stored = drivers.get(args.id)?.ok_or_else(|| not_found(args.id))?;

    let driver = Driver {
        id: stored.id,
        first_name: args.first_name,
        last_name: args.last_name,
        email: args.email.unwrap_or(stored.email),
        phone_number: args.phone_number.unwrap_or(stored.phone_number),
    };
    validate_driver(&driver).map_err(|e| ExError::from(e).with_op("update").with_driver_id(driver.id))?;

    // A concurrent delete between the read and the write leaves nothing to update
    if drivers.update(&driver)? == 0 {
        return Err(not_found(driver.id));
    }
    println!("✓ Updated driver {}", driver.id);
    Ok(())
}
