use anyhow::Result;
use colored::*;
use runlet_core::configs::Config;

pub fn execute(config: &Config) -> Result<()> {
    println!("{}", "Commands".bold().underline());

    let mut commands: Vec<_> = config.commands.values().collect();
    commands.sort_by(|a, b| a.name.cmp(&b.name));

    if commands.is_empty() {
        println!("  {}", "No commands defined".dimmed());
        return Ok(());
    }

    for command in commands {
        match &command.description {
            Some(description) => {
                println!("{} {}", command.name.blue().bold(), description.dimmed());
            }
            None => println!("{}", command.name.blue().bold()),
        }

        if !command.depends.is_empty() {
            println!(
                "  {} {}",
                "depends on:".dimmed(),
                command.depends.join(", ")
            );
        }
    }

    Ok(())
}
