//! Command dependency validation
//!
//! Runs after config loading and before any execution; a validation error
//! aborts startup.

use crate::configs::{Command, Config};
use crate::types::{RunletError, RunletResult};

/// Validate a loaded configuration
pub fn validate(config: &Config) -> RunletResult<()> {
    validate_circular_depends(config)
}

/// Reject configs where any two commands list each other as dependencies.
///
/// This is a pairwise scan: only direct mutual cycles are caught. Longer
/// cycles (a -> b -> c -> a) pass validation; the runner's visited set
/// keeps them from looping at execution time.
fn validate_circular_depends(config: &Config) -> RunletResult<()> {
    for command_a in config.commands.values() {
        for command_b in config.commands.values() {
            if command_a.name == command_b.name {
                continue;
            }

            if depends_intersect(command_a, command_b) {
                return Err(RunletError::CircularDependency {
                    command_a: command_a.name.clone(),
                    command_b: command_b.name.clone(),
                });
            }
        }
    }

    Ok(())
}

fn depends_intersect(command_a: &Command, command_b: &Command) -> bool {
    command_b.depends.contains(&command_a.name) && command_a.depends.contains(&command_b.name)
}
