//! Driver registry CLI
//!
//! Command-line interface over the driver services, backed by SQLite

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use drivers_core::logging_facility;
use drivers_core::Settings;
use drivers_engine::DriverService;
use drivers_store::SqliteDriverRepository;

mod commands;

#[derive(Debug, Parser)]
#[command(name = "drivers")]
#[command(about = "Driver registry - manage drivers stored in SQLite", long_about = None)]
struct Cli {
    /// Connection string (`drivers.db` or `Data Source=drivers.db;...`)
    #[arg(long, global = true)]
    db: Option<String>,

    /// Path to a TOML configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Show one driver or all drivers as JSON
    Get(commands::get::GetArgs),
    /// Add a driver (a random one when no fields are given)
    Add(commands::add::AddArgs),
    /// Overwrite an existing driver
    Update(commands::update::UpdateArgs),
    /// Delete a driver
    Delete(commands::delete::DeleteArgs),
    /// Insert a batch of random drivers
    Fake(commands::fake::FakeArgs),
    /// Show drivers' names with their characters sorted
    Alphabetize(commands::alphabetize::AlphabetizeArgs),
}

fn connect(cli: &Cli) -> Result<DriverService<SqliteDriverRepository>, Box<dyn std::error::Error>> {
    let mut settings = Settings::load(cli.config.as_deref())?;
    if let Some(db) = &cli.db {
        settings.database.connection_string = db.clone();
    }

    logging_facility::init(settings.logging.profile);

    let repo = SqliteDriverRepository::from_connection_string(&settings.database.connection_string)?;
    repo.bootstrap()?;
    tracing::debug!(path = %repo.path().display(), "schema ready");

    Ok(DriverService::new(repo))
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let drivers = connect(&cli)?;

    match cli.command {
        Commands::Get(args) => commands::get::execute(&drivers, args),
        Commands::Add(args) => commands::add::execute(&drivers, args),
        Commands::Update(args) => commands::update::execute(&drivers, args),
        Commands::Delete(args) => commands::delete::execute(&drivers, args),
        Commands::Fake(args) => commands::fake::execute(&drivers, args),
        Commands::Alphabetize(args) => commands::alphabetize::execute(&drivers, args),
    }
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
