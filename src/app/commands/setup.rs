//! Setup command: conflict check, provisioning, configure.

use tracing::warn;

use super::ResolvedRun;
use super::configure::configure_build;
use super::provision::{apply_steps, check_conflicts, ensure_directory, observe_cache};
use crate::app::AppContext;
use crate::domain::{
    AppError, CacheAction, CommandOutcome, ConfigureCommand, ExitStatusPolicy, ProjectLayout,
    plan_cache,
};
use crate::ports::{ConfigureRunner, Console, ProjectFilesystem};

/// Prompt shown before exiting when pausing is enabled.
pub const PAUSE_PROMPT: &str = "Finished. Press enter to exit...";

/// Result of a completed setup run.
#[derive(Debug, Clone)]
pub struct SetupOutcome {
    pub layout: ProjectLayout,
    pub command: ConfigureCommand,
    /// `None` when the dependency cache is disabled.
    pub cache_action: Option<CacheAction>,
    pub outcome: CommandOutcome,
    /// Process exit code after applying the exit status policy.
    pub exit_code: i32,
}

pub fn execute<F, R, C>(
    ctx: &AppContext<F, R, C>,
    run: &ResolvedRun,
) -> Result<SetupOutcome, AppError>
where
    F: ProjectFilesystem,
    R: ConfigureRunner,
    C: Console,
{
    let filesystem = ctx.filesystem();
    let console = ctx.console();
    let layout = &run.layout;

    check_conflicts(filesystem, layout)?;

    let cache_action = match layout.dependency_cache() {
        Some(cache) => {
            console.progress("-- Setting up dependency cache...");
            let plan = plan_cache(cache, observe_cache(filesystem, cache))?;
            apply_steps(filesystem, &plan.steps)?;
            if plan.action == CacheAction::LeftInconsistent {
                console.warn(&format!(
                    "{} and {} are both directories; leaving them as they are",
                    cache.base_project_dir.display(),
                    cache.base_shared_dir.display()
                ));
            }
            console.progress("-- Dependency cache is ready.");
            Some(plan.action)
        }
        None => None,
    };

    console.progress("-- Setting up build directory...");
    ensure_directory(filesystem, layout.build_dir())?;

    let policy = run.config.configure.exit_status;
    let command = ConfigureCommand::for_platform(run.platform, &run.config.configure);
    let outcome = match configure_build(ctx.runner(), layout.build_dir(), &command) {
        Ok(status) => CommandOutcome::Exited(status),
        Err(AppError::CommandSpawn { program, source }) if policy == ExitStatusPolicy::Ignore => {
            let message = format!("Failed to start '{}': {}", program, source);
            console.warn(&message);
            CommandOutcome::SpawnFailed(message)
        }
        Err(err) => return Err(err),
    };

    if let CommandOutcome::Exited(status) = &outcome {
        if !status.success() {
            warn!(code = ?status.code, %policy, "configure command failed");
        }
    }
    console.progress("-- Build directory is ready.");

    let exit_code = policy.exit_code(&outcome);
    Ok(SetupOutcome { layout: layout.clone(), command, cache_action, outcome, exit_code })
}

/// Block on the console when the session asks for it.
pub fn pause_if_requested<C: Console>(console: &C, pause: bool) -> Result<(), AppError> {
    if pause {
        console.pause(PAUSE_PROMPT)?;
    }
    Ok(())
}
