use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct PoolConfig {
    #[serde(default = "PoolConfig::default_max_connections")]
    pub max_connections: u32,
    #[serde(default = "PoolConfig::default_min_connections")]
    pub min_connections: u32,
    /// How long a request waits for a free connection before failing.
    #[serde(
        with = "humantime_serde",
        default = "PoolConfig::default_acquire_timeout"
    )]
    pub acquire_timeout: Duration,
}

impl PoolConfig {
    fn default_max_connections() -> u32 {
        10
    }

    fn default_min_connections() -> u32 {
        10
    }

    fn default_acquire_timeout() -> Duration {
        Duration::from_secs(30)
    }
}

impl Default for PoolConfig {
    fn default() -> Self {
        Self {
            max_connections: Self::default_max_connections(),
            min_connections: Self::default_min_connections(),
            acquire_timeout: Self::default_acquire_timeout(),
        }
    }
}
