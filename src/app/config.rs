//! Configuration loading from the working root.

use std::path::Path;

use tracing::debug;

use crate::domain::{AppError, BootstrapConfig, CONFIG_FILE, EntryKind, parse_config_content};
use crate::ports::ProjectFilesystem;

/// Load `buildprep.toml`.
///
/// An explicit path must exist. Without one, a missing `buildprep.toml` in
/// `root` means the defaults.
pub fn load_config<F: ProjectFilesystem>(
    filesystem: &F,
    root: &Path,
    explicit: Option<&Path>,
) -> Result<BootstrapConfig, AppError> {
    let (path, required) = match explicit {
        Some(path) => (root.join(path), true),
        None => (root.join(CONFIG_FILE), false),
    };

    match filesystem.entry_kind(&path) {
        EntryKind::Missing if required => Err(AppError::ConfigFileMissing(path)),
        EntryKind::Missing => {
            debug!(path = %path.display(), "no config file, using defaults");
            Ok(BootstrapConfig::default())
        }
        EntryKind::Directory => Err(AppError::config_error(format!(
            "Config path is a directory: {}",
            path.display()
        ))),
        EntryKind::Other => {
            debug!(path = %path.display(), "loading config file");
            let content = filesystem.read_file(&path)?;
            parse_config_content(&content)
        }
    }
}
