use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::{AppError, CommandOutcome};

/// How the configure command's exit status feeds the process exit code.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExitStatusPolicy {
    /// Report success once provisioning finished, whatever the command returned.
    #[default]
    Ignore,
    /// Exit with the command's own status.
    Propagate,
}

impl ExitStatusPolicy {
    pub fn label(self) -> &'static str {
        match self {
            ExitStatusPolicy::Ignore => "ignore",
            ExitStatusPolicy::Propagate => "propagate",
        }
    }

    /// Process exit code for a finished configure step.
    pub fn exit_code(self, outcome: &CommandOutcome) -> i32 {
        match (self, outcome) {
            (ExitStatusPolicy::Ignore, _) => 0,
            (ExitStatusPolicy::Propagate, CommandOutcome::Exited(status)) => match status.code {
                Some(code) => code,
                None => 1,
            },
            (ExitStatusPolicy::Propagate, CommandOutcome::SpawnFailed(_)) => 1,
        }
    }
}

impl fmt::Display for ExitStatusPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ExitStatusPolicy {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ignore" => Ok(ExitStatusPolicy::Ignore),
            "propagate" => Ok(ExitStatusPolicy::Propagate),
            _ => Err(AppError::InvalidExitStatusPolicy(s.to_string())),
        }
    }
}
