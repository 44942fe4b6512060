//! Promote-then-link protocol for the shared dependency cache.
//!
//! The first project that owns a `_Base` directory moves it into the shared
//! root; every project afterwards links its `_Base` to the shared copy.

use std::fmt;

use super::{EntryKind, ProvisionStep};
use crate::domain::{AppError, DependencyCacheLayout};

/// Observed state of the cache paths before provisioning.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheObservation {
    pub project_dir: EntryKind,
    pub shared_dir: EntryKind,
    pub base_project: EntryKind,
    pub base_project_link: BaseLink,
    pub base_shared: EntryKind,
}

/// Whether the per-project base is a symbolic link, and where it points.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BaseLink {
    NotALink,
    /// Link whose target is the shared base.
    ToShared,
    /// Link to any other location, typically left over from a moved tree.
    Elsewhere,
}

/// Which branch of the protocol ran.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CacheAction {
    /// Per-project base moved into the shared root, then linked back.
    Promoted,
    /// Neither base existed: shared base created, then linked.
    CreatedShared,
    /// Shared base existed: per-project base linked to it.
    Linked,
    /// Per-project base is already a link that resolves; nothing to do.
    AlreadyLinked,
    /// Link to the shared base was dangling: shared base recreated.
    RestoredShared,
    /// Link pointed elsewhere and did not resolve: replaced by a link to the shared base.
    Relinked,
    /// Both bases are real directories; left untouched.
    LeftInconsistent,
}

impl CacheAction {
    pub fn label(self) -> &'static str {
        match self {
            CacheAction::Promoted => "promoted project cache into shared cache",
            CacheAction::CreatedShared => "created shared cache",
            CacheAction::Linked => "linked project cache to shared cache",
            CacheAction::AlreadyLinked => "project cache already linked",
            CacheAction::RestoredShared => "recreated missing shared cache behind existing link",
            CacheAction::Relinked => "replaced stale project cache link",
            CacheAction::LeftInconsistent => {
                "project and shared caches both exist as directories; left untouched"
            }
        }
    }
}

impl fmt::Display for CacheAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Ordered side effects for one cache provisioning run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CachePlan {
    pub action: CacheAction,
    pub steps: Vec<ProvisionStep>,
}

/// Decide the cache steps from the observed state.
///
/// Fails with `PathConflict` if any cache path is a non-directory; the
/// preflight conflict check normally rules that out.
pub fn plan_cache(
    layout: &DependencyCacheLayout,
    observed: CacheObservation,
) -> Result<CachePlan, AppError> {
    let conflicts: Vec<_> = [
        (observed.project_dir, &layout.project_dir),
        (observed.shared_dir, &layout.shared_dir),
        (observed.base_project, &layout.base_project_dir),
        (observed.base_shared, &layout.base_shared_dir),
    ]
    .into_iter()
    .filter(|(kind, _)| !kind.is_dir_or_missing())
    .map(|(_, path)| path.clone())
    .collect();
    if !conflicts.is_empty() {
        return Err(AppError::PathConflict { paths: conflicts });
    }

    let link = ProvisionStep::Link {
        target: layout.base_shared_dir.clone(),
        link: layout.base_project_dir.clone(),
    };

    if observed.base_project_link != BaseLink::NotALink {
        return Ok(plan_existing_link(layout, observed, link));
    }

    let plan = match (observed.base_project, observed.base_shared) {
        (EntryKind::Directory, EntryKind::Missing) => {
            let mut steps = Vec::new();
            if observed.shared_dir == EntryKind::Missing {
                steps.push(ProvisionStep::CreateDir(layout.shared_dir.clone()));
            }
            steps.push(ProvisionStep::Move {
                from: layout.base_project_dir.clone(),
                to: layout.base_shared_dir.clone(),
            });
            steps.push(link);
            CachePlan { action: CacheAction::Promoted, steps }
        }
        (EntryKind::Missing, EntryKind::Missing) => {
            let mut steps = vec![ProvisionStep::CreateDir(layout.base_shared_dir.clone())];
            if observed.project_dir == EntryKind::Missing {
                steps.push(ProvisionStep::CreateDir(layout.project_dir.clone()));
            }
            steps.push(link);
            CachePlan { action: CacheAction::CreatedShared, steps }
        }
        (EntryKind::Missing, EntryKind::Directory) => {
            let mut steps = Vec::new();
            if observed.project_dir == EntryKind::Missing {
                steps.push(ProvisionStep::CreateDir(layout.project_dir.clone()));
            }
            steps.push(link);
            CachePlan { action: CacheAction::Linked, steps }
        }
        _ => CachePlan { action: CacheAction::LeftInconsistent, steps: Vec::new() },
    };

    Ok(plan)
}

// The per-project base is a link; only a dangling one needs work.
fn plan_existing_link(
    layout: &DependencyCacheLayout,
    observed: CacheObservation,
    link: ProvisionStep,
) -> CachePlan {
    if observed.base_project == EntryKind::Directory {
        return CachePlan { action: CacheAction::AlreadyLinked, steps: Vec::new() };
    }

    let mut steps = Vec::new();
    if observed.base_project_link == BaseLink::Elsewhere {
        steps.push(ProvisionStep::RemoveLink(layout.base_project_dir.clone()));
    }
    if observed.base_shared == EntryKind::Missing {
        steps.push(ProvisionStep::CreateDir(layout.base_shared_dir.clone()));
    }

    match observed.base_project_link {
        BaseLink::Elsewhere => {
            steps.push(link);
            CachePlan { action: CacheAction::Relinked, steps }
        }
        _ => CachePlan { action: CacheAction::RestoredShared, steps },
    }
}
