use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Library-wide error type for buildprep operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// A filesystem side effect failed for environmental reasons.
    #[error("Failed to {action} '{}': {source}", .path.display())]
    Filesystem {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Reserved paths are occupied by something other than a directory.
    #[error("Reserved directory paths are occupied by files: {}", format_paths(.paths))]
    PathConflict { paths: Vec<PathBuf> },

    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// Configuration file could not be located.
    #[error("Config file not found: {}", .0.display())]
    ConfigFileMissing(PathBuf),

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    TomlParseError(#[from] toml::de::Error),

    /// Host platform is neither Windows nor POSIX.
    #[error("Unsupported platform '{0}': expected 'windows' or 'posix'")]
    UnsupportedPlatform(String),

    /// Exit status policy identifier is invalid.
    #[error("Invalid exit status policy '{0}': expected 'ignore' or 'propagate'")]
    InvalidExitStatusPolicy(String),

    /// The external configure program could not be started.
    #[error("Failed to start '{program}': {source}")]
    CommandSpawn {
        program: String,
        #[source]
        source: io::Error,
    },
}

fn format_paths(paths: &[PathBuf]) -> String {
    paths.iter().map(|p| p.display().to_string()).collect::<Vec<_>>().join(", ")
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }

    pub(crate) fn filesystem(
        action: &'static str,
        path: impl Into<PathBuf>,
        source: io::Error,
    ) -> Self {
        AppError::Filesystem { action, path: path.into(), source }
    }

    /// Closest `io::ErrorKind` for this error.
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            AppError::Io(err) => err.kind(),
            AppError::Filesystem { source, .. } | AppError::CommandSpawn { source, .. } => {
                source.kind()
            }
            AppError::PathConflict { .. } => io::ErrorKind::AlreadyExists,
            AppError::Configuration(_)
            | AppError::TomlParseError(_)
            | AppError::UnsupportedPlatform(_)
            | AppError::InvalidExitStatusPolicy(_) => io::ErrorKind::InvalidInput,
            AppError::ConfigFileMissing(_) => io::ErrorKind::NotFound,
        }
    }
}
