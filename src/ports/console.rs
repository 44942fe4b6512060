use crate::domain::AppError;

/// Port for user-facing progress output.
pub trait Console {
    /// Print one progress line.
    fn progress(&self, line: &str);

    /// Print a warning line.
    fn warn(&self, line: &str);

    /// Show `prompt` and block until the user submits a line.
    fn pause(&self, prompt: &str) -> Result<(), AppError>;
}
