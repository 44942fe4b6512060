//! Command implementations shared by the CLI and the library API.

pub mod check;
pub mod configure;
pub mod plan;
pub mod platforms;
pub mod provision;
pub mod setup;

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::app::config::load_config;
use crate::domain::{AppError, BootstrapConfig, ConfigOverrides, HostPlatform, ProjectLayout};
use crate::ports::ProjectFilesystem;

/// Caller-supplied inputs shared by `setup`, `check` and `plan`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SetupRequest {
    /// Config file path; relative paths resolve against the root.
    pub config_path: Option<PathBuf>,
    /// Values overriding the config file.
    pub overrides: ConfigOverrides,
    /// Platform override; detected from the host when absent.
    pub platform: Option<HostPlatform>,
}

/// Fully resolved inputs of one run.
#[derive(Debug, Clone)]
pub struct ResolvedRun {
    pub config: BootstrapConfig,
    pub layout: ProjectLayout,
    pub platform: HostPlatform,
}

/// Load configuration, apply overrides and compute the layout for `root`.
pub fn resolve<F: ProjectFilesystem>(
    filesystem: &F,
    root: &Path,
    request: &SetupRequest,
) -> Result<ResolvedRun, AppError> {
    let mut config = load_config(filesystem, root, request.config_path.as_deref())?;
    request.overrides.apply(&mut config);
    config.validate()?;

    let platform = match request.platform {
        Some(platform) => platform,
        None => HostPlatform::detect()?,
    };
    let layout = ProjectLayout::resolve(root, &config);
    debug!(
        root = %layout.root().display(),
        build_dir = %layout.build_dir().display(),
        dependency_cache = config.dependency_cache.enabled,
        %platform,
        "resolved run"
    );

    Ok(ResolvedRun { config, layout, platform })
}
