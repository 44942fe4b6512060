//! Filesystem operations the provisioner needs.
//!
//! Paths are absolute; the layout resolves them before any port call.

use std::path::{Path, PathBuf};

use crate::domain::{AppError, EntryKind};

/// Port for inspecting and mutating the project tree.
pub trait ProjectFilesystem {
    /// Kind of entry at `path`, following symbolic links.
    fn entry_kind(&self, path: &Path) -> EntryKind;

    /// Target of the symbolic link at `path`, or `None` when `path` is not a link.
    fn link_target(&self, path: &Path) -> Option<PathBuf>;

    /// Read a file as UTF-8 text.
    fn read_file(&self, path: &Path) -> Result<String, AppError>;

    /// Create a directory and all missing ancestors. No-op if it already exists.
    fn create_dir_all(&self, path: &Path) -> Result<(), AppError>;

    /// Move a directory to a new location that must not exist yet.
    fn move_dir(&self, from: &Path, to: &Path) -> Result<(), AppError>;

    /// Create a directory symbolic link at `link` pointing to `target`.
    fn symlink_dir(&self, target: &Path, link: &Path) -> Result<(), AppError>;

    /// Remove the symbolic link at `link` without touching its target.
    fn remove_link(&self, link: &Path) -> Result<(), AppError>;
}
