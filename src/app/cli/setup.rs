//! Setup command implementation.

use std::path::Path;

use super::report_error;
use crate::adapters::StdioConsole;
use crate::app::api;
use crate::app::commands::SetupRequest;
use crate::app::commands::setup::pause_if_requested;
use crate::domain::AppError;

/// Run setup, report its failure, then pause if the session asks for it.
///
/// The pause happens on failure too, so errors stay readable in a console
/// window that closes on exit.
pub fn run_setup(root: &Path, request: &SetupRequest) -> Result<i32, AppError> {
    let mut pause = request.overrides.pause_before_exit.unwrap_or(false);

    let result = api::resolve_at(root, request).and_then(|run| {
        pause = run.config.session.pause_before_exit;
        api::setup_resolved(&run)
    });

    let exit_code = match result {
        Ok(outcome) => outcome.exit_code,
        Err(err) => {
            report_error(&err);
            1
        }
    };

    pause_if_requested(&StdioConsole::new(), pause)?;
    Ok(exit_code)
}
