use std::process::Command;

use tracing::info;

use crate::domain::{AppError, CommandStatus, ConfigureCommand};
use crate::ports::ConfigureRunner;

/// Runs the configure command as a child process with inherited stdio.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessConfigureRunner;

impl ProcessConfigureRunner {
    pub fn new() -> Self {
        Self
    }
}

impl ConfigureRunner for ProcessConfigureRunner {
    fn run(&self, command: &ConfigureCommand) -> Result<CommandStatus, AppError> {
        info!(command = %command, "running configure command");

        let status = Command::new(&command.program)
            .args(&command.args)
            .status()
            .map_err(|source| AppError::CommandSpawn { program: command.program.clone(), source })?;

        let status = CommandStatus { code: status.code() };
        info!(code = ?status.code, "configure command finished");
        Ok(status)
    }
}
