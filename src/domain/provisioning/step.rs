use std::fmt;
use std::path::PathBuf;

/// A single filesystem side effect performed by `setup`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProvisionStep {
    /// Create a directory and its missing ancestors.
    CreateDir(PathBuf),
    /// Relocate a directory (rename, copy+remove across filesystems).
    Move { from: PathBuf, to: PathBuf },
    /// Create a directory symbolic link at `link` pointing to `target`.
    Link { target: PathBuf, link: PathBuf },
    /// Delete a symbolic link, leaving whatever it pointed to.
    RemoveLink(PathBuf),
}

impl fmt::Display for ProvisionStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProvisionStep::CreateDir(path) => write!(f, "create {}", path.display()),
            ProvisionStep::Move { from, to } => {
                write!(f, "move {} -> {}", from.display(), to.display())
            }
            ProvisionStep::Link { target, link } => {
                write!(f, "link {} -> {}", link.display(), target.display())
            }
            ProvisionStep::RemoveLink(path) => write!(f, "remove link {}", path.display()),
        }
    }
}
