//! Shared testing harness for `buildprep` integration tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

#[cfg(unix)]
use super::fake_cmake::FakeCmake;

/// Isolated project tree: `<tmp>/project` is the working root and `<tmp>`
/// plays the role of the directory shared between projects.
pub(crate) struct TestContext {
    root: TempDir,
    work_dir: PathBuf,
    #[cfg(unix)]
    cmake: FakeCmake,
}

impl TestContext {
    /// Create a new isolated environment.
    pub(crate) fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let work_dir = root.path().join("project");
        fs::create_dir_all(&work_dir).expect("Failed to create test work directory");

        Self {
            root,
            work_dir,
            #[cfg(unix)]
            cmake: FakeCmake::new(),
        }
    }

    /// Directory one level above the project.
    pub(crate) fn parent_dir(&self) -> &Path {
        self.root.path()
    }

    /// Path to the project directory used for CLI invocations.
    pub(crate) fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    pub(crate) fn build_dir(&self) -> PathBuf {
        self.work_dir.join("build")
    }

    /// `<project>/hunter/_Base`
    pub(crate) fn project_base(&self) -> PathBuf {
        self.work_dir.join("hunter").join("_Base")
    }

    /// `<parent>/hunter/_Base`
    pub(crate) fn shared_base(&self) -> PathBuf {
        self.parent_dir().join("hunter").join("_Base")
    }

    #[cfg(unix)]
    pub(crate) fn cmake(&self) -> &FakeCmake {
        &self.cmake
    }

    /// Write `buildprep.toml` in the project directory.
    pub(crate) fn write_config(&self, content: &str) {
        fs::write(self.work_dir.join("buildprep.toml"), content)
            .expect("Failed to write buildprep.toml");
    }

    /// Write a file relative to the project directory, creating parents.
    pub(crate) fn write_file(&self, relative: &str, content: &str) -> PathBuf {
        let path = self.work_dir.join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        fs::write(&path, content).expect("Failed to write file");
        path
    }

    /// Build a command for invoking the compiled `buildprep` binary in the project.
    pub(crate) fn cli(&self) -> Command {
        self.cli_in(self.work_dir())
    }

    /// Build a command for invoking the compiled `buildprep` binary within a custom directory.
    pub(crate) fn cli_in<P: AsRef<Path>>(&self, dir: P) -> Command {
        let mut cmd = Command::cargo_bin("buildprep").expect("Failed to locate buildprep binary");
        cmd.current_dir(dir.as_ref()).env_remove("RUST_LOG").env_remove("FAKE_CMAKE_EXIT");
        #[cfg(unix)]
        cmd.env("PATH", self.cmake.path_env());
        cmd
    }
}
