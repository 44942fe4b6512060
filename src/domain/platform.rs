use std::fmt;
use std::str::FromStr;

use crate::domain::AppError;

/// Operating-system family that selects the configure command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostPlatform {
    Windows,
    Posix,
}

impl HostPlatform {
    pub const ALL: [HostPlatform; 2] = [HostPlatform::Windows, HostPlatform::Posix];

    /// Detect the platform from the target family this binary was built for.
    pub fn detect() -> Result<Self, AppError> {
        Self::from_family(std::env::consts::FAMILY)
    }

    pub fn from_family(family: &str) -> Result<Self, AppError> {
        match family {
            "windows" => Ok(HostPlatform::Windows),
            "unix" => Ok(HostPlatform::Posix),
            other => Err(AppError::UnsupportedPlatform(other.to_string())),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            HostPlatform::Windows => "windows",
            HostPlatform::Posix => "posix",
        }
    }
}

impl fmt::Display for HostPlatform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for HostPlatform {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "windows" | "nt" => Ok(HostPlatform::Windows),
            "posix" | "unix" => Ok(HostPlatform::Posix),
            _ => Err(AppError::UnsupportedPlatform(s.to_string())),
        }
    }
}
