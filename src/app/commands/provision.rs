//! Directory provisioning primitives.

use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::domain::layout::normalize_path;
use crate::domain::{
    AppError, BaseLink, CacheObservation, DependencyCacheLayout, EntryKind, ProjectLayout,
    ProvisionStep, find_conflicts,
};
use crate::ports::ProjectFilesystem;

/// True iff `path` is a directory or does not exist.
pub fn validate_no_conflict<F: ProjectFilesystem>(filesystem: &F, path: &Path) -> bool {
    filesystem.entry_kind(path).is_dir_or_missing()
}

/// Reserved paths of `layout` occupied by non-directories.
pub fn conflicting_paths<F: ProjectFilesystem>(
    filesystem: &F,
    layout: &ProjectLayout,
) -> Vec<PathBuf> {
    find_conflicts(layout.reserved_paths(), |path| filesystem.entry_kind(path))
}

/// Fail with `PathConflict` before any change if a reserved path is taken.
pub fn check_conflicts<F: ProjectFilesystem>(
    filesystem: &F,
    layout: &ProjectLayout,
) -> Result<(), AppError> {
    let paths = conflicting_paths(filesystem, layout);
    if paths.is_empty() {
        debug!(count = layout.reserved_paths().len(), "no reserved path conflicts");
        Ok(())
    } else {
        Err(AppError::PathConflict { paths })
    }
}

/// Create `path` and its missing ancestors; no-op when it is already a directory.
pub fn ensure_directory<F: ProjectFilesystem>(filesystem: &F, path: &Path) -> Result<(), AppError> {
    if filesystem.entry_kind(path) == EntryKind::Directory {
        return Ok(());
    }
    filesystem.create_dir_all(path)
}

/// Steps needed to make the build directory exist.
pub fn build_dir_steps<F: ProjectFilesystem>(
    filesystem: &F,
    layout: &ProjectLayout,
) -> Vec<ProvisionStep> {
    match filesystem.entry_kind(layout.build_dir()) {
        EntryKind::Directory => Vec::new(),
        _ => vec![ProvisionStep::CreateDir(layout.build_dir().to_path_buf())],
    }
}

/// Snapshot the cache paths.
pub fn observe_cache<F: ProjectFilesystem>(
    filesystem: &F,
    cache: &DependencyCacheLayout,
) -> CacheObservation {
    CacheObservation {
        project_dir: filesystem.entry_kind(&cache.project_dir),
        shared_dir: filesystem.entry_kind(&cache.shared_dir),
        base_project: filesystem.entry_kind(&cache.base_project_dir),
        base_project_link: observe_link(filesystem, cache),
        base_shared: filesystem.entry_kind(&cache.base_shared_dir),
    }
}

fn observe_link<F: ProjectFilesystem>(filesystem: &F, cache: &DependencyCacheLayout) -> BaseLink {
    let Some(target) = filesystem.link_target(&cache.base_project_dir) else {
        return BaseLink::NotALink;
    };
    // Relative targets resolve against the directory holding the link.
    let resolved = match cache.base_project_dir.parent() {
        Some(parent) => normalize_path(&parent.join(&target)),
        None => normalize_path(&target),
    };
    if resolved == cache.base_shared_dir {
        BaseLink::ToShared
    } else {
        debug!(target = %target.display(), "project cache link points elsewhere");
        BaseLink::Elsewhere
    }
}

/// Apply steps in order, stopping at the first failure.
pub fn apply_steps<F: ProjectFilesystem>(
    filesystem: &F,
    steps: &[ProvisionStep],
) -> Result<(), AppError> {
    for step in steps {
        info!(%step, "provisioning");
        match step {
            ProvisionStep::CreateDir(path) => ensure_directory(filesystem, path)?,
            ProvisionStep::Move { from, to } => filesystem.move_dir(from, to)?,
            ProvisionStep::Link { target, link } => filesystem.symlink_dir(target, link)?,
            ProvisionStep::RemoveLink(link) => filesystem.remove_link(link)?,
        }
    }
    Ok(())
}
