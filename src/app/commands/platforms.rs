use crate::domain::{ConfigureCommand, ConfigureConfig, HostPlatform};

/// Configure command for every supported platform.
pub fn table(config: &ConfigureConfig) -> Vec<(HostPlatform, ConfigureCommand)> {
    HostPlatform::ALL
        .into_iter()
        .map(|platform| (platform, ConfigureCommand::for_platform(platform, config)))
        .collect()
}
