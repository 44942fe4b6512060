//! Scoped change of the process working directory.

use std::env;
use std::path::{Path, PathBuf};

use tracing::{debug, error};

use crate::domain::AppError;

/// Changes the process working directory and restores it when dropped.
///
/// The working directory is process-global; callers that hold a guard must
/// not run concurrently with anything else that depends on it.
#[derive(Debug)]
pub struct WorkingDirGuard {
    original: PathBuf,
    restored: bool,
}

impl WorkingDirGuard {
    /// Remember the current directory, then change into `dir`.
    pub fn enter(dir: &Path) -> Result<Self, AppError> {
        let original = env::current_dir()?;
        env::set_current_dir(dir)
            .map_err(|e| AppError::filesystem("change directory into", dir, e))?;
        debug!(from = %original.display(), to = %dir.display(), "entered directory");
        Ok(Self { original, restored: false })
    }

    /// Directory that will be restored.
    pub fn original(&self) -> &Path {
        &self.original
    }

    /// Restore the original directory, reporting failure to the caller.
    pub fn restore(mut self) -> Result<(), AppError> {
        self.restored = true;
        env::set_current_dir(&self.original)
            .map_err(|e| AppError::filesystem("restore working directory", &self.original, e))
    }
}

impl Drop for WorkingDirGuard {
    fn drop(&mut self) {
        if self.restored {
            return;
        }
        if let Err(err) = env::set_current_dir(&self.original) {
            error!(
                path = %self.original.display(),
                error = %err,
                "failed to restore working directory"
            );
        }
    }
}
