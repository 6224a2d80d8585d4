//! Fake command
//!
//! Usage: drivers fake [--count <N>]

use clap::Args;

use super::{CommandResult, Drivers};

#[derive(Debug, Args)]
pub struct FakeArgs {
    /// Number of random drivers to insert
    #[arg(long, default_value_t = 10, allow_negative_numbers = true)]
    pub count: i64,
}

/// Execute fake command
pub fn execute(drivers: &Drivers, args: FakeArgs) -> CommandResult {
    let added = drivers.create_random_drivers(args.count)?;
    println!("✓ Added {} random drivers", added);
    Ok(())
}
