//! Absolute paths the provisioner owns, resolved once per run.

use std::path::{Component, Path, PathBuf};

use crate::domain::BootstrapConfig;

/// Paths of the shared dependency cache protocol.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DependencyCacheLayout {
    /// Per-project cache directory.
    pub project_dir: PathBuf,
    /// Shared cache root, usually one level above the project.
    pub shared_dir: PathBuf,
    /// `<project_dir>/<base>`: promoted once, then replaced by a link.
    pub base_project_dir: PathBuf,
    /// `<shared_dir>/<base>`: never moved once it exists.
    pub base_shared_dir: PathBuf,
}

/// Reserved paths for one working root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectLayout {
    root: PathBuf,
    build_dir: PathBuf,
    dependency_cache: Option<DependencyCacheLayout>,
}

impl ProjectLayout {
    /// Resolve the layout for `root`, which must already be absolute.
    pub fn resolve(root: &Path, config: &BootstrapConfig) -> Self {
        let root = normalize_path(root);
        let build_dir = normalize_path(&root.join(&config.build.dir));

        let dependency_cache = config.dependency_cache.enabled.then(|| {
            let cache = &config.dependency_cache;
            let project_dir = normalize_path(&root.join(&cache.project_dir));
            let shared_dir = normalize_path(&root.join(&cache.shared_dir));
            DependencyCacheLayout {
                base_project_dir: project_dir.join(&cache.base_name),
                base_shared_dir: shared_dir.join(&cache.base_name),
                project_dir,
                shared_dir,
            }
        });

        Self { root, build_dir, dependency_cache }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn build_dir(&self) -> &Path {
        &self.build_dir
    }

    pub fn dependency_cache(&self) -> Option<&DependencyCacheLayout> {
        self.dependency_cache.as_ref()
    }

    /// Every path that must be a directory or absent before anything is touched.
    pub fn reserved_paths(&self) -> Vec<&Path> {
        let mut paths = vec![self.build_dir.as_path()];
        if let Some(cache) = &self.dependency_cache {
            paths.extend([
                cache.project_dir.as_path(),
                cache.shared_dir.as_path(),
                cache.base_project_dir.as_path(),
                cache.base_shared_dir.as_path(),
            ]);
        }
        paths
    }
}

/// Drop `.` and fold `..` into its parent without touching the disk.
pub(crate) fn normalize_path(path: &Path) -> PathBuf {
    path.components().fold(PathBuf::new(), |mut out, component| {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                out.pop();
            }
            other => out.push(other.as_os_str()),
        }
        out
    })
}
