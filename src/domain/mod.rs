pub mod command;
pub mod configuration;
pub mod error;
pub mod layout;
pub mod platform;
pub mod provisioning;

pub use command::{CommandOutcome, CommandStatus, ConfigureCommand};
pub use configuration::{
    BootstrapConfig, BuildConfig, CONFIG_FILE, ConfigOverrides, ConfigureConfig,
    DependencyCacheConfig, ExitStatusPolicy, SessionConfig, parse_config_content,
};
pub use error::AppError;
pub use layout::{DependencyCacheLayout, ProjectLayout};
pub use platform::HostPlatform;
pub use provisioning::{
    BaseLink, CacheAction, CacheObservation, CachePlan, EntryKind, ProvisionStep, find_conflicts,
    plan_cache,
};
