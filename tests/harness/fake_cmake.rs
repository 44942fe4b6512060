use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// `cmake` stand-in that records its working directory and arguments.
///
/// Exits with `$FAKE_CMAKE_EXIT` (default 0).
pub struct FakeCmake {
    pub root: TempDir,
    pub bin_dir: PathBuf,
    pub log_file: PathBuf,
}

impl FakeCmake {
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp dir for fake cmake");
        let bin_dir = root.path().join("bin");
        fs::create_dir_all(&bin_dir).expect("Failed to create bin dir");
        let log_file = root.path().join("cmake.log");

        let script_path = bin_dir.join("cmake");
        let script_content = format!(
            r#"#!/bin/sh
echo "cwd=$(pwd -P)" >> "{log}"
echo "args=$*" >> "{log}"
exit "${{FAKE_CMAKE_EXIT:-0}}"
"#,
            log = log_file.to_string_lossy()
        );

        fs::write(&script_path, script_content).expect("Failed to write cmake script");

        let mut perms = fs::metadata(&script_path).expect("Failed to get metadata").permissions();
        perms.set_mode(0o755);
        fs::set_permissions(&script_path, perms).expect("Failed to set permissions");

        Self { root, bin_dir, log_file }
    }

    pub fn get_log(&self) -> String {
        fs::read_to_string(&self.log_file).unwrap_or_default()
    }

    pub fn was_invoked(&self) -> bool {
        self.log_file.exists()
    }

    /// Working directories of every recorded invocation.
    pub fn invocation_dirs(&self) -> Vec<PathBuf> {
        self.get_log()
            .lines()
            .filter_map(|line| line.strip_prefix("cwd="))
            .map(PathBuf::from)
            .collect()
    }

    /// Argument lines of every recorded invocation.
    pub fn invocation_args(&self) -> Vec<String> {
        self.get_log()
            .lines()
            .filter_map(|line| line.strip_prefix("args="))
            .map(str::to_string)
            .collect()
    }

    /// `PATH` value with the fake binary first.
    pub fn path_env(&self) -> std::ffi::OsString {
        let mut paths = vec![self.bin_dir.clone()];
        if let Some(existing) = std::env::var_os("PATH") {
            paths.extend(std::env::split_paths(&existing));
        }
        std::env::join_paths(paths).expect("Failed to join PATH")
    }

    pub fn bin_dir(&self) -> &Path {
        &self.bin_dir
    }
}
