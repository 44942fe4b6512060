//! Plan command: describe what `setup` would do.

use std::fmt;

use super::ResolvedRun;
use super::provision::{build_dir_steps, check_conflicts, observe_cache};
use crate::domain::{
    AppError, CachePlan, ConfigureCommand, ExitStatusPolicy, ProvisionStep, plan_cache,
};
use crate::ports::ProjectFilesystem;

/// Side effects `setup` would perform from the current state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetupPlan {
    pub cache: Option<CachePlan>,
    pub build: Vec<ProvisionStep>,
    pub command: ConfigureCommand,
    pub exit_status: ExitStatusPolicy,
}

impl fmt::Display for SetupPlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(cache) = &self.cache {
            writeln!(f, "Dependency cache: {}", cache.action)?;
            for step in &cache.steps {
                writeln!(f, "  {}", step)?;
            }
        }
        writeln!(f, "Build directory:")?;
        if self.build.is_empty() {
            writeln!(f, "  already present")?;
        }
        for step in &self.build {
            writeln!(f, "  {}", step)?;
        }
        write!(f, "Configure: {} (exit status: {})", self.command, self.exit_status)
    }
}

pub fn execute<F: ProjectFilesystem>(
    filesystem: &F,
    run: &ResolvedRun,
) -> Result<SetupPlan, AppError> {
    check_conflicts(filesystem, &run.layout)?;

    let cache = match run.layout.dependency_cache() {
        Some(layout) => Some(plan_cache(layout, observe_cache(filesystem, layout))?),
        None => None,
    };

    Ok(SetupPlan {
        cache,
        build: build_dir_steps(filesystem, &run.layout),
        command: ConfigureCommand::for_platform(run.platform, &run.config.configure),
        exit_status: run.config.configure.exit_status,
    })
}
