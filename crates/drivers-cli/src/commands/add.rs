//! Add command
//!
//! Usage: drivers add [--first-name <F> --last-name <L> --email <E> --phone-number <P>]
//!
//! With no fields a random driver is added. Otherwise every field is
//! required and validated before anything is written.

use clap::Args;
use drivers_core::errors::ExError;
use drivers_core::rules::validate_driver;
use drivers_core::Driver;
use drivers_engine::faker;

use super::{CommandResult, Drivers};

#[derive(Debug, Args)]
pub struct AddArgs {
    #[arg(long)]
    pub first_name: Option<String>,

    #[arg(long)]
    pub last_name: Option<String>,

    #[arg(long)]
    pub email: Option<String>,

    #[arg(long)]
    pub phone_number: Option<String>,
}

impl AddArgs {
    fn is_empty(&self) -> bool {
        self.first_name.is_none()
            && self.last_name.is_none()
            && self.email.is_none()
            && self.phone_number.is_none()
    }

    fn into_driver(self) -> Driver {
        Driver::new(
            self.first_name.unwrap_or_default(),
            self.last_name.unwrap_or_default(),
            self.email.unwrap_or_default(),
            self.phone_number.unwrap_or_default(),
        )
    }
}

/// Execute add command
pub fn execute(drivers: &Drivers, args: AddArgs) -> CommandResult {
    let driver = if args.is_empty() {
        faker::random_driver(&mut rand::thread_rng())
    } else {
        args.into_driver()
    };

    validate_driver(&driver).map_err(|e| ExError::from(e).with_op("add"))?;

    let rows = drivers.add(&driver)?;
    println!("✓ Added {} ({} row)", driver.full_name(), rows);
    Ok(())
}
