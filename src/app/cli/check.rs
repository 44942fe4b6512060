use std::path::Path;

use super::report_error;
use crate::app::api;
use crate::app::commands::SetupRequest;
use crate::domain::AppError;

pub fn run_check(root: &Path, request: &SetupRequest) -> Result<i32, AppError> {
    let report = api::check_at(root, request)?;

    if report.is_clean() {
        println!("✅ No conflicts among {} reserved path(s)", report.checked.len());
        return Ok(0);
    }
    report_error(&AppError::PathConflict { paths: report.conflicts });
    Ok(1)
}
