use crate::domain::{AppError, CommandStatus, ConfigureCommand};

/// Port for launching the external build-configuration tool.
///
/// The command runs in the current process working directory and blocks
/// until it exits.
pub trait ConfigureRunner {
    /// Run the command and report its exit status.
    ///
    /// Returns `AppError::CommandSpawn` when the program cannot be started.
    fn run(&self, command: &ConfigureCommand) -> Result<CommandStatus, AppError>;
}
