use std::sync::Arc;

use anyhow::Result;
use colored::*;
use runlet_core::configs::Config;
use runlet_core::execution::CommandRunner;
use runlet_core::lifecycle::CancelToken;
use runlet_core::logging::Logger;

pub async fn execute(
    config: &Config,
    logger: Arc<Logger>,
    cancel: CancelToken,
    name: &str,
) -> Result<()> {
    println!("{} {}", "Running command".bold(), name.cyan());
    println!();

    let runner = CommandRunner::new(config, logger, cancel);
    runner
        .run(name)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to run command: {}", e))?;

    println!();
    println!(
        "{} {}",
        "✓".green().bold(),
        format!("'{}' completed successfully", name).green()
    );

    Ok(())
}
