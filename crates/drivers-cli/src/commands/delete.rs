//! Delete command
//!
//! Usage: drivers delete --id <ID>

use clap::Args;

use super::{not_found, CommandResult, Drivers};

#[derive(Debug, Args)]
pub struct DeleteArgs {
    #[arg(long)]
    pub id: i64,
}

/// Execute delete command
pub fn execute(drivers: &Drivers, args: DeleteArgs) -> CommandResult {
    if drivers.delete(args.id)? == 0 {
        return Err(not_found(args.id));
    }
    println!("✓ Deleted driver {}", args.id);
    Ok(())
}
