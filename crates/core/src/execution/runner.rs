//! High-level command runner
//!
//! Resolves a deps-first execution order for a requested command and runs
//! the commands sequentially, stopping once the context is canceled.

use std::collections::HashSet;
use std::sync::Arc;

use crate::configs::{Command, Config};
use crate::execution::command::ShellExecutor;
use crate::lifecycle::CancelToken;
use crate::logging::{Entry, Level, Logger};
use crate::types::{RunletError, RunletResult};

pub struct CommandRunner<'a> {
    config: &'a Config,
    logger: Arc<Logger>,
    cancel: CancelToken,
}

impl<'a> CommandRunner<'a> {
    pub fn new(config: &'a Config, logger: Arc<Logger>, cancel: CancelToken) -> Self {
        Self {
            config,
            logger,
            cancel,
        }
    }

    /// Run a command after its dependencies; each command runs at most once
    pub async fn run(&self, name: &str) -> RunletResult<()> {
        let order = self.resolve_execution_order(name)?;
        let executor =
            ShellExecutor::new(&self.config.shell, &self.config.env, self.cancel.clone());

        for command in order {
            if self.cancel.is_canceled() {
                return Err(RunletError::Command(format!(
                    "canceled before command '{}' started",
                    command.name
                )));
            }

            self.logger
                .log(Entry::new(Level::Debug, "executing command").field("command", &command.name));
            executor.execute(command).await?;
        }

        Ok(())
    }

    /// Deps-first order for a command. The visited set keeps indirect
    /// dependency cycles from recursing forever; rejecting those is the
    /// validator's call, not the runner's.
    fn resolve_execution_order(&self, name: &str) -> RunletResult<Vec<&'a Command>> {
        let mut visited = HashSet::new();
        let mut order = Vec::new();
        self.collect(name, &mut visited, &mut order)?;
        Ok(order)
    }

    fn collect(
        &self,
        name: &str,
        visited: &mut HashSet<String>,
        order: &mut Vec<&'a Command>,
    ) -> RunletResult<()> {
        if !visited.insert(name.to_string()) {
            return Ok(());
        }

        let command = self
            .config
            .commands
            .get(name)
            .ok_or_else(|| RunletError::Command(format!("command '{}' not found", name)))?;

        for dep in &command.depends {
            if !self.config.commands.contains_key(dep) {
                return Err(RunletError::Command(format!(
                    "command '{}' depends on '{}' which was not found",
                    name, dep
                )));
            }
            self.collect(dep, visited, order)?;
        }

        order.push(command);
        Ok(())
    }
}
