//! Configure command lines and their outcomes.
//!
//! The platform → command mapping is a static table of argument slots; the
//! configuration fills the slots.

use std::fmt;

use crate::domain::{ConfigureConfig, HostPlatform};

/// One position in a command-line template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Slot {
    Literal(&'static str),
    Generator,
    ExtraArgs,
    Source,
}

const WINDOWS_TEMPLATE: &[Slot] =
    &[Slot::Literal("-G"), Slot::Generator, Slot::ExtraArgs, Slot::Source];

const POSIX_TEMPLATE: &[Slot] = &[Slot::ExtraArgs, Slot::Source];

const COMMAND_TABLE: &[(HostPlatform, &[Slot])] =
    &[(HostPlatform::Windows, WINDOWS_TEMPLATE), (HostPlatform::Posix, POSIX_TEMPLATE)];

fn template_for(platform: HostPlatform) -> &'static [Slot] {
    COMMAND_TABLE
        .iter()
        .find(|(candidate, _)| *candidate == platform)
        .map(|(_, slots)| *slots)
        .unwrap_or(POSIX_TEMPLATE)
}

/// External build-configuration command run inside the build directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigureCommand {
    pub program: String,
    pub args: Vec<String>,
}

impl ConfigureCommand {
    pub fn for_platform(platform: HostPlatform, config: &ConfigureConfig) -> Self {
        let mut args = Vec::new();
        for slot in template_for(platform) {
            match slot {
                Slot::Literal(value) => args.push((*value).to_string()),
                Slot::Generator => args.push(config.windows_generator.clone()),
                Slot::ExtraArgs => args.extend(config.extra_args.iter().cloned()),
                Slot::Source => args.push(config.source.clone()),
            }
        }
        Self { program: config.program.clone(), args }
    }
}

impl fmt::Display for ConfigureCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&quote(&self.program))?;
        for arg in &self.args {
            write!(f, " {}", quote(arg))?;
        }
        Ok(())
    }
}

fn quote(value: &str) -> String {
    if value.is_empty() || value.contains(char::is_whitespace) {
        format!("\"{}\"", value)
    } else {
        value.to_string()
    }
}

/// Exit status reported by the external command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandStatus {
    /// `None` when the process was terminated by a signal.
    pub code: Option<i32>,
}

impl CommandStatus {
    pub fn success(&self) -> bool {
        self.code == Some(0)
    }
}

/// What happened when the configure step ran.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandOutcome {
    Exited(CommandStatus),
    SpawnFailed(String),
}

impl CommandOutcome {
    pub fn success(&self) -> bool {
        matches!(self, CommandOutcome::Exited(status) if status.success())
    }
}
