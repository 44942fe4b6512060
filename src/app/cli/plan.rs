use std::path::Path;

use crate::app::api;
use crate::app::commands::SetupRequest;
use crate::domain::AppError;

pub fn run_plan(root: &Path, request: &SetupRequest) -> Result<(), AppError> {
    let plan = api::plan_at(root, request)?;
    println!("{}", plan);
    Ok(())
}
