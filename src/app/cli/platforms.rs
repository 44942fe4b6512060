use std::path::Path;

use crate::app::api;
use crate::domain::AppError;

pub fn run_platforms(root: &Path, config_path: Option<&Path>) -> Result<(), AppError> {
    for (platform, command) in api::platforms_at(root, config_path)? {
        println!("{:<8} {}", platform.label(), command);
    }
    Ok(())
}
