use std::path::PathBuf;

use super::{BootstrapConfig, ExitStatusPolicy};
use crate::domain::AppError;

/// File name looked up in the working root when no explicit path is given.
pub const CONFIG_FILE: &str = "buildprep.toml";

/// Parse and validate `buildprep.toml` content.
pub fn parse_config_content(content: &str) -> Result<BootstrapConfig, AppError> {
    let config: BootstrapConfig = toml::from_str(content)?;
    config.validate()?;
    Ok(config)
}

/// Command-line values that take precedence over the configuration file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigOverrides {
    pub build_dir: Option<PathBuf>,
    pub dependency_cache: Option<bool>,
    pub exit_status: Option<ExitStatusPolicy>,
    pub pause_before_exit: Option<bool>,
}

impl ConfigOverrides {
    pub fn apply(&self, config: &mut BootstrapConfig) {
        if let Some(dir) = &self.build_dir {
            config.build.dir = dir.clone();
        }
        if let Some(enabled) = self.dependency_cache {
            config.dependency_cache.enabled = enabled;
        }
        if let Some(policy) = self.exit_status {
            config.configure.exit_status = policy;
        }
        if let Some(pause) = self.pause_before_exit {
            config.session.pause_before_exit = pause;
        }
    }
}
