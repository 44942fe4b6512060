use crate::ports::{ConfigureRunner, Console, ProjectFilesystem};

/// Application context holding dependencies for command execution.
pub struct AppContext<F: ProjectFilesystem, R: ConfigureRunner, C: Console> {
    filesystem: F,
    runner: R,
    console: C,
}

impl<F: ProjectFilesystem, R: ConfigureRunner, C: Console> AppContext<F, R, C> {
    /// Create a new application context.
    pub fn new(filesystem: F, runner: R, console: C) -> Self {
        Self { filesystem, runner, console }
    }

    /// Get a reference to the project filesystem.
    pub fn filesystem(&self) -> &F {
        &self.filesystem
    }

    /// Get a reference to the configure runner.
    pub fn runner(&self) -> &R {
        &self.runner
    }

    /// Get a reference to the console.
    pub fn console(&self) -> &C {
        &self.console
    }
}
