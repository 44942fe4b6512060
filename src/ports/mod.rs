mod configure_runner;
mod console;
mod project_filesystem;

pub use configure_runner::ConfigureRunner;
pub use console::Console;
pub use project_filesystem::ProjectFilesystem;
