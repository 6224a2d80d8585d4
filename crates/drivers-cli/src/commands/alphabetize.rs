//! Alphabetize command
//!
//! Usage: drivers alphabetize [--id <ID>]

use clap::Args;
use drivers_engine::OperationService;

use super::{not_found, CommandResult, Drivers};

#[derive(Debug, Args)]
pub struct AlphabetizeArgs {
    /// Driver id; all drivers when omitted
    #[arg(long)]
    pub id: Option<i64>,
}

/// Execute alphabetize command
pub fn execute(drivers: &Drivers, args: AlphabetizeArgs) -> CommandResult {
    let ops = OperationService::new(drivers);

    match args.id {
        Some(id) => {
            let name = ops.alphabetize_by_id(id)?.ok_or_else(|| not_found(id))?;
            println!("{}", name);
        }
        None => {
            for name in ops.alphabetize_all()? {
                println!("{}", name);
            }
        }
    }
    Ok(())
}
