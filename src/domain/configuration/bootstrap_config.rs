//! Bootstrap configuration domain models.

use std::path::{Component, Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::ExitStatusPolicy;
use crate::domain::AppError;

/// Configuration loaded from `buildprep.toml`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BootstrapConfig {
    /// Build directory settings.
    #[serde(default)]
    pub build: BuildConfig,
    /// Shared dependency cache settings.
    #[serde(default)]
    pub dependency_cache: DependencyCacheConfig,
    /// External configure command settings.
    #[serde(default)]
    pub configure: ConfigureConfig,
    /// Interactive session settings.
    #[serde(default)]
    pub session: SessionConfig,
}

impl BootstrapConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        self.build.validate()?;
        self.dependency_cache.validate()?;
        self.configure.validate()?;
        Ok(())
    }
}

/// Build directory settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BuildConfig {
    /// Build directory, relative to the working root.
    #[serde(default = "default_build_dir")]
    pub dir: PathBuf,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self { dir: default_build_dir() }
    }
}

impl BuildConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.dir.as_os_str().is_empty() {
            return Err(AppError::config_error("build.dir must not be empty"));
        }
        Ok(())
    }
}

fn default_build_dir() -> PathBuf {
    PathBuf::from("build")
}

/// Shared dependency cache ("Hunter") settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DependencyCacheConfig {
    /// Whether the cache directories are provisioned at all.
    #[serde(default)]
    pub enabled: bool,
    /// Per-project cache directory, relative to the working root.
    #[serde(default = "default_project_dir")]
    pub project_dir: PathBuf,
    /// Shared cache root, relative to the working root.
    #[serde(default = "default_shared_dir")]
    pub shared_dir: PathBuf,
    /// Name of the sub-directory promoted into the shared root.
    #[serde(default = "default_base_name")]
    pub base_name: String,
}

impl Default for DependencyCacheConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            project_dir: default_project_dir(),
            shared_dir: default_shared_dir(),
            base_name: default_base_name(),
        }
    }
}

impl DependencyCacheConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.project_dir.as_os_str().is_empty() {
            return Err(AppError::config_error("dependency_cache.project_dir must not be empty"));
        }
        if self.shared_dir.as_os_str().is_empty() {
            return Err(AppError::config_error("dependency_cache.shared_dir must not be empty"));
        }
        let mut components = Path::new(&self.base_name).components();
        let single_normal = matches!(
            (components.next(), components.next()),
            (Some(Component::Normal(_)), None)
        );
        if !single_normal {
            return Err(AppError::config_error(format!(
                "dependency_cache.base_name must be a single directory name, got '{}'",
                self.base_name
            )));
        }
        Ok(())
    }
}

fn default_project_dir() -> PathBuf {
    PathBuf::from("hunter")
}

fn default_shared_dir() -> PathBuf {
    PathBuf::from("../hunter")
}

fn default_base_name() -> String {
    "_Base".to_string()
}

/// External configure command settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigureConfig {
    /// Program to run inside the build directory.
    #[serde(default = "default_program")]
    pub program: String,
    /// Top-level build description, relative to the build directory.
    #[serde(default = "default_source")]
    pub source: String,
    /// Generator passed on Windows hosts.
    #[serde(default = "default_windows_generator")]
    pub windows_generator: String,
    /// Arguments inserted before the source path.
    #[serde(default)]
    pub extra_args: Vec<String>,
    /// How the command's exit status is reported.
    #[serde(default)]
    pub exit_status: ExitStatusPolicy,
}

impl Default for ConfigureConfig {
    fn default() -> Self {
        Self {
            program: default_program(),
            source: default_source(),
            windows_generator: default_windows_generator(),
            extra_args: Vec::new(),
            exit_status: ExitStatusPolicy::default(),
        }
    }
}

impl ConfigureConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.program.trim().is_empty() {
            return Err(AppError::config_error("configure.program must not be empty"));
        }
        if self.source.trim().is_empty() {
            return Err(AppError::config_error("configure.source must not be empty"));
        }
        if self.windows_generator.trim().is_empty() {
            return Err(AppError::config_error("configure.windows_generator must not be empty"));
        }
        Ok(())
    }
}

fn default_program() -> String {
    "cmake".to_string()
}

fn default_source() -> String {
    "../".to_string()
}

fn default_windows_generator() -> String {
    "Visual Studio 16 2019".to_string()
}

/// Interactive session settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SessionConfig {
    /// Block on one line of input before exiting.
    #[serde(default)]
    pub pause_before_exit: bool,
}
