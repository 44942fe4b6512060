//! buildprep: provision a CMake build directory and a shared dependency cache,
//! then run the platform's configure command inside the build directory.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;

#[cfg(test)]
pub(crate) mod testing;

pub use app::api::{
    CacheAction, CheckReport, ConfigOverrides, ConfigureCommand, ExitStatusPolicy, HostPlatform,
    ResolvedRun, SetupOutcome, SetupPlan, SetupRequest, check_at, plan_at, platforms_at,
    resolve_at, setup, setup_at, setup_resolved,
};
pub use domain::AppError;
