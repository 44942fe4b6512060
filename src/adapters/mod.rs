pub mod local_filesystem;
pub mod process_runner;
pub mod stdio_console;
pub mod working_dir;

pub use local_filesystem::LocalFilesystem;
pub use process_runner::ProcessConfigureRunner;
pub use stdio_console::StdioConsole;
pub use working_dir::WorkingDirGuard;
