//! Single command execution
//!
//! Executes one command through the configured shell (or directly as
//! program + args), wiring up environment and racing the child process
//! against the cancellable context.

use std::collections::HashMap;

use tokio::process::Command as ProcessCommand;

use crate::configs::{Cmd, Command};
use crate::lifecycle::CancelToken;
use crate::types::{RunletError, RunletResult};

pub struct ShellExecutor<'a> {
    shell: &'a str,
    global_env: &'a HashMap<String, String>,
    cancel: CancelToken,
}

impl<'a> ShellExecutor<'a> {
    pub fn new(
        shell: &'a str,
        global_env: &'a HashMap<String, String>,
        cancel: CancelToken,
    ) -> Self {
        Self {
            shell,
            global_env,
            cancel,
        }
    }

    /// Execute a single command, inheriting stdio. On cancellation the
    /// child is killed and the command reports an error.
    pub async fn execute(&self, command: &Command) -> RunletResult<()> {
        let mut process = match &command.cmd {
            Some(Cmd::Single(script)) => {
                let mut process = ProcessCommand::new(self.shell);
                process.arg("-c").arg(script);
                process
            }
            Some(Cmd::Multiple(parts)) => {
                if parts.is_empty() {
                    return Ok(());
                }
                let mut process = ProcessCommand::new(&parts[0]);
                process.args(&parts[1..]);
                process
            }
            None => {
                return Err(RunletError::Command(format!(
                    "command '{}' has nothing to execute",
                    command.name
                )));
            }
        };

        process.envs(self.global_env);
        process.envs(&command.env);
        process.env("RUNLET_COMMAND_NAME", &command.name);

        let mut child = process.spawn().map_err(|e| {
            RunletError::Command(format!(
                "failed to execute command '{}': {}",
                command.name, e
            ))
        })?;

        tokio::select! {
            status = child.wait() => {
                let status = status.map_err(|e| {
                    RunletError::Command(format!(
                        "failed to wait for command '{}': {}",
                        command.name, e
                    ))
                })?;

                if !status.success() {
                    return Err(RunletError::Command(format!(
                        "command '{}' failed with exit code {}",
                        command.name,
                        status.code().unwrap_or(-1)
                    )));
                }

                Ok(())
            }
            _ = self.cancel.canceled() => {
                let _ = child.kill().await;
                Err(RunletError::Command(format!(
                    "command '{}' was canceled",
                    command.name
                )))
            }
        }
    }
}
