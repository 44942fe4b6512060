//! API Facade for the application.
//!
//! Glues context creation to command execution using the real filesystem,
//! process runner and console.

use std::path::{Path, PathBuf};

use crate::adapters::{LocalFilesystem, ProcessConfigureRunner, StdioConsole};
use crate::app::{
    AppContext,
    commands::{self, check, plan, platforms, setup},
};

pub use crate::app::commands::check::CheckReport;
pub use crate::app::commands::plan::SetupPlan;
pub use crate::app::commands::setup::SetupOutcome;
pub use crate::app::commands::{ResolvedRun, SetupRequest};
pub use crate::domain::{
    AppError, CacheAction, ConfigOverrides, ConfigureCommand, ExitStatusPolicy, HostPlatform,
};

fn create_context() -> AppContext<LocalFilesystem, ProcessConfigureRunner, StdioConsole> {
    AppContext::new(LocalFilesystem::new(), ProcessConfigureRunner::new(), StdioConsole::new())
}

fn absolute_root(root: impl AsRef<Path>) -> Result<PathBuf, AppError> {
    Ok(std::path::absolute(root.as_ref())?)
}

/// Resolve configuration, overrides, platform and layout for `root`.
pub fn resolve_at(root: impl AsRef<Path>, request: &SetupRequest) -> Result<ResolvedRun, AppError> {
    let root = absolute_root(root)?;
    commands::resolve(&LocalFilesystem::new(), &root, request)
}

/// Run the full setup flow for an already resolved run.
pub fn setup_resolved(run: &ResolvedRun) -> Result<SetupOutcome, AppError> {
    setup::execute(&create_context(), run)
}

/// Check, provision and configure the project at `root`.
pub fn setup_at(root: impl AsRef<Path>, request: &SetupRequest) -> Result<SetupOutcome, AppError> {
    let run = resolve_at(root, request)?;
    setup_resolved(&run)
}

/// Check, provision and configure the project in the current directory.
pub fn setup(request: &SetupRequest) -> Result<SetupOutcome, AppError> {
    setup_at(std::env::current_dir()?, request)
}

/// Report reserved-path conflicts at `root` without changing anything.
pub fn check_at(root: impl AsRef<Path>, request: &SetupRequest) -> Result<CheckReport, AppError> {
    let run = resolve_at(root, request)?;
    Ok(check::execute(&LocalFilesystem::new(), &run))
}

/// Describe what `setup` would do at `root` without changing anything.
pub fn plan_at(root: impl AsRef<Path>, request: &SetupRequest) -> Result<SetupPlan, AppError> {
    let run = resolve_at(root, request)?;
    plan::execute(&LocalFilesystem::new(), &run)
}

/// Configure command per platform, honoring the `[configure]` section at `root`.
pub fn platforms_at(
    root: impl AsRef<Path>,
    config_path: Option<&Path>,
) -> Result<Vec<(HostPlatform, ConfigureCommand)>, AppError> {
    let root = absolute_root(root)?;
    let config = crate::app::config::load_config(&LocalFilesystem::new(), &root, config_path)?;
    Ok(platforms::table(&config.configure))
}
