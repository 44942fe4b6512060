pub mod bootstrap_config;
pub mod exit_status_policy;
pub mod loader;

pub use bootstrap_config::{
    BootstrapConfig, BuildConfig, ConfigureConfig, DependencyCacheConfig, SessionConfig,
};
pub use exit_status_policy::ExitStatusPolicy;
pub use loader::{CONFIG_FILE, ConfigOverrides, parse_config_content};
