//! Check command: report reserved-path conflicts without touching anything.

use std::path::PathBuf;

use super::ResolvedRun;
use super::provision::conflicting_paths;
use crate::ports::ProjectFilesystem;

/// Result of a conflict check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckReport {
    /// Every reserved path that was inspected.
    pub checked: Vec<PathBuf>,
    /// Reserved paths occupied by non-directories.
    pub conflicts: Vec<PathBuf>,
}

impl CheckReport {
    pub fn is_clean(&self) -> bool {
        self.conflicts.is_empty()
    }
}

pub fn execute<F: ProjectFilesystem>(filesystem: &F, run: &ResolvedRun) -> CheckReport {
    let checked = run.layout.reserved_paths().into_iter().map(PathBuf::from).collect();
    let conflicts = conflicting_paths(filesystem, &run.layout);
    CheckReport { checked, conflicts }
}
