//! `ProjectFilesystem` backed by `std::fs`.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::{debug, info};
use walkdir::WalkDir;

use crate::domain::{AppError, EntryKind};
use crate::ports::ProjectFilesystem;

/// Filesystem adapter operating on the real disk.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    pub fn new() -> Self {
        Self
    }
}

impl ProjectFilesystem for LocalFilesystem {
    fn entry_kind(&self, path: &Path) -> EntryKind {
        match fs::metadata(path) {
            Ok(metadata) if metadata.is_dir() => EntryKind::Directory,
            Ok(_) => EntryKind::Other,
            Err(err) => {
                if err.kind() != io::ErrorKind::NotFound {
                    debug!(
                        path = %path.display(),
                        error = %err,
                        "treating unreadable path as missing"
                    );
                }
                EntryKind::Missing
            }
        }
    }

    fn link_target(&self, path: &Path) -> Option<PathBuf> {
        fs::read_link(path).ok()
    }

    fn read_file(&self, path: &Path) -> Result<String, AppError> {
        fs::read_to_string(path).map_err(|e| AppError::filesystem("read", path, e))
    }

    fn create_dir_all(&self, path: &Path) -> Result<(), AppError> {
        if path.is_dir() {
            return Ok(());
        }
        fs::create_dir_all(path).map_err(|e| AppError::filesystem("create directory", path, e))?;
        info!(path = %path.display(), "created directory");
        Ok(())
    }

    fn move_dir(&self, from: &Path, to: &Path) -> Result<(), AppError> {
        if to.exists() || to.is_symlink() {
            return Err(AppError::filesystem(
                "move directory to",
                to,
                io::Error::new(io::ErrorKind::AlreadyExists, "destination already exists"),
            ));
        }

        match fs::rename(from, to) {
            Ok(()) => {}
            Err(err) if err.kind() == io::ErrorKind::CrossesDevices => {
                debug!(
                    from = %from.display(),
                    to = %to.display(),
                    "rename crosses devices, copying instead"
                );
                copy_tree(from, to)?;
                fs::remove_dir_all(from)
                    .map_err(|e| AppError::filesystem("remove moved directory", from, e))?;
            }
            Err(err) => return Err(AppError::filesystem("move directory", from, err)),
        }

        info!(from = %from.display(), to = %to.display(), "moved directory");
        Ok(())
    }

    fn symlink_dir(&self, target: &Path, link: &Path) -> Result<(), AppError> {
        create_dir_symlink(target, link)
            .map_err(|e| AppError::filesystem("create symbolic link", link, e))?;
        info!(link = %link.display(), target = %target.display(), "created symbolic link");
        Ok(())
    }

    fn remove_link(&self, link: &Path) -> Result<(), AppError> {
        remove_dir_symlink(link)
            .map_err(|e| AppError::filesystem("remove symbolic link", link, e))?;
        info!(link = %link.display(), "removed symbolic link");
        Ok(())
    }
}

fn copy_tree(from: &Path, to: &Path) -> Result<(), AppError> {
    for entry in WalkDir::new(from) {
        let entry = entry.map_err(|e| AppError::filesystem("read directory", from, e.into()))?;
        let relative = entry
            .path()
            .strip_prefix(from)
            .map_err(|e| AppError::filesystem("copy", entry.path(), io::Error::other(e)))?;
        let dest = to.join(relative);
        let file_type = entry.file_type();

        if file_type.is_dir() {
            fs::create_dir_all(&dest)
                .map_err(|e| AppError::filesystem("create directory", &dest, e))?;
        } else if file_type.is_symlink() {
            let target = fs::read_link(entry.path())
                .map_err(|e| AppError::filesystem("read link", entry.path(), e))?;
            copy_symlink(&target, entry.path(), &dest)
                .map_err(|e| AppError::filesystem("copy link", &dest, e))?;
        } else {
            fs::copy(entry.path(), &dest).map_err(|e| AppError::filesystem("copy", &dest, e))?;
        }
    }
    Ok(())
}

#[cfg(unix)]
fn create_dir_symlink(target: &Path, link: &Path) -> io::Result<()> {
    std::os::unix::fs::symlink(target, link)
}

#[cfg(windows)]
fn create_dir_symlink(target: &Path, link: &Path) -> io::Result<()> {
    std::os::windows::fs::symlink_dir(target, link)
}

#[cfg(unix)]
fn remove_dir_symlink(link: &Path) -> io::Result<()> {
    fs::remove_file(link)
}

// Directory links are removed like directories on Windows.
#[cfg(windows)]
fn remove_dir_symlink(link: &Path) -> io::Result<()> {
    fs::remove_dir(link).or_else(|_| fs::remove_file(link))
}

#[cfg(unix)]
fn copy_symlink(target: &Path, _source: &Path, dest: &Path) -> io::Result<()> {
    std::os::unix::fs::symlink(target, dest)
}

#[cfg(windows)]
fn copy_symlink(target: &Path, source: &Path, dest: &Path) -> io::Result<()> {
    if source.is_dir() {
        std::os::windows::fs::symlink_dir(target, dest)
    } else {
        std::os::windows::fs::symlink_file(target, dest)
    }
}
