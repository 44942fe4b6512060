use std::path::Path;

use crate::adapters::WorkingDirGuard;
use crate::domain::{AppError, CommandStatus, ConfigureCommand};
use crate::ports::ConfigureRunner;

/// Run `command` with `build_dir` as the process working directory.
///
/// The original directory is restored on every path out of this function,
/// including runner errors and unwinding panics.
pub fn configure_build<R: ConfigureRunner>(
    runner: &R,
    build_dir: &Path,
    command: &ConfigureCommand,
) -> Result<CommandStatus, AppError> {
    let guard = WorkingDirGuard::enter(build_dir)?;
    let result = runner.run(command);
    let restored = guard.restore();

    let status = result?;
    restored?;
    Ok(status)
}
