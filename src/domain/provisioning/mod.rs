pub mod cache;
pub mod step;

use std::path::{Path, PathBuf};

pub use cache::{BaseLink, CacheAction, CacheObservation, CachePlan, plan_cache};
pub use step::ProvisionStep;

/// Observed kind of a filesystem entry, following symbolic links.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    /// Nothing there, or a dangling link.
    Missing,
    Directory,
    /// Regular file, device, socket, ...
    Other,
}

impl EntryKind {
    /// The no-conflict predicate: a reserved path may be absent or a directory.
    pub fn is_dir_or_missing(self) -> bool {
        matches!(self, EntryKind::Missing | EntryKind::Directory)
    }
}

/// Collect the reserved paths that are occupied by non-directories.
pub fn find_conflicts<'a, I, F>(paths: I, mut kind_of: F) -> Vec<PathBuf>
where
    I: IntoIterator<Item = &'a Path>,
    F: FnMut(&Path) -> EntryKind,
{
    paths
        .into_iter()
        .filter(|path| !kind_of(path).is_dir_or_missing())
        .map(Path::to_path_buf)
        .collect()
}
