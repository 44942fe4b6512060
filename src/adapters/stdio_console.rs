use std::io::{self, BufRead, Write};

use crate::domain::AppError;
use crate::ports::Console;

/// Console writing progress to stdout and reading the pause answer from stdin.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdioConsole;

impl StdioConsole {
    pub fn new() -> Self {
        Self
    }
}

impl Console for StdioConsole {
    fn progress(&self, line: &str) {
        println!("{}", line);
    }

    fn warn(&self, line: &str) {
        eprintln!("⚠️  {}", line);
    }

    fn pause(&self, prompt: &str) -> Result<(), AppError> {
        let mut stdout = io::stdout();
        write!(stdout, "{}", prompt)?;
        stdout.flush()?;

        let mut answer = String::new();
        io::stdin().lock().read_line(&mut answer)?;
        Ok(())
    }
}
