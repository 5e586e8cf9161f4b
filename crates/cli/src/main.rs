use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Result;
use clap::{Parser, Subcommand};
use runlet_core::configs::Config;
use runlet_core::logging::Logger;

mod commands;

/// Runlet - a command runner
#[derive(Parser)]
#[command(name = "runlet")]
#[command(about = "Run user-defined commands and their dependencies")]
#[command(version)]
struct Cli {
    /// Path to the config file
    #[arg(short, long, default_value = "runlet.yaml")]
    config: PathBuf,

    /// Enable debug logging (equivalent to RUNLET_DEBUG=1)
    #[arg(short, long)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a command after its dependencies
    Run {
        /// Name of the command to run
        name: String,
    },
    /// List the commands defined in the config
    List,
    /// Print the JSON Schema for the config file format
    Schema,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let logger = Arc::new(Logger::new(cli.debug || runlet_core::env::is_debug()));

    // Wire the cancellable context before anything long-running starts; the
    // first SIGINT/SIGTERM cancels it.
    let cancel = runlet_core::lifecycle::interruptible(Arc::clone(&logger));

    // Execute command (CLI layer only handles presentation)
    match cli.command {
        Commands::Run { name } => {
            let config = load_and_validate(&cli.config)?;
            commands::run::execute(&config, logger, cancel, &name).await
        }
        Commands::List => {
            let config = load_and_validate(&cli.config)?;
            commands::list::execute(&config)
        }
        Commands::Schema => commands::schema::execute(),
    }
}

/// Load the config and reject circular dependencies before any execution
fn load_and_validate(path: &Path) -> Result<Config> {
    let config = runlet_core::configs::load_config(path)
        .map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;

    runlet_core::validate::validate(&config)?;

    Ok(config)
}
