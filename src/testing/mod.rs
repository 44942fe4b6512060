mod fake_runner;

pub use fake_runner::FakeRunner;
pub use recording_console::RecordingConsole;
