//! Get command
//!
//! Usage: drivers get [--id <ID>]

use clap::Args;

use super::{not_found, CommandResult, Drivers};

#[derive(Debug, Args)]
pub struct GetArgs {
    /// Driver id; all drivers when omitted
    #[arg(long)]
    pub id: Option<i64>,
}

/// Execute get command
pub fn execute(drivers: &Drivers, args: GetArgs) -> CommandResult {
    let json = match args.id {
        Some(id) => {
            let driver = drivers.get(id)?.ok_or_else(|| not_found(id))?;
            serde_json::to_string_pretty(&driver)?
        }
        None => serde_json::to_string_pretty(&drivers.list()?)?,
    };
    println!("{}", json);
    Ok(())
}
