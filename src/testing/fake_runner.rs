use std::env;
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;

use crate::domain::{AppError, CommandStatus, ConfigureCommand};
use crate::ports::ConfigureRunner;

/// One recorded configure invocation.
#[derive(Debug, Clone)]
pub struct RecordedRun {
    pub command: ConfigureCommand,
    pub cwd: PathBuf,
}

/// Fake runner recording the command and the working directory it ran in.
pub struct FakeRunner {
    pub runs: Mutex<Vec<RecordedRun>>,
    exit_code: Mutex<Option<i32>>,
    spawn_fails: Mutex<bool>,
}

impl Default for FakeRunner {
    fn default() -> Self {
        Self {
            runs: Mutex::new(Vec::new()),
            exit_code: Mutex::new(Some(0)),
            spawn_fails: Mutex::new(false),
        }
    }
}

impl FakeRunner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn exiting_with(code: i32) -> Self {
        let runner = Self::new();
        *runner.exit_code.lock().unwrap() = Some(code);
        runner
    }

    pub fn failing_to_spawn() -> Self {
        let runner = Self::new();
        *runner.spawn_fails.lock().unwrap() = true;
        runner
    }

    pub fn recorded(&self) -> Vec<RecordedRun> {
        self.runs.lock().unwrap().clone()
    }
}

impl ConfigureRunner for FakeRunner {
    fn run(&self, command: &ConfigureCommand) -> Result<CommandStatus, AppError> {
        let cwd = env::current_dir()?;
        self.runs.lock().unwrap().push(RecordedRun { command: command.clone(), cwd });

        if *self.spawn_fails.lock().unwrap() {
            return Err(AppError::CommandSpawn {
                program: command.program.clone(),
                source: io::Error::new(io::ErrorKind::NotFound, "program not found"),
            });
        }
        Ok(CommandStatus { code: *self.exit_code.lock().unwrap() })
    }
}
