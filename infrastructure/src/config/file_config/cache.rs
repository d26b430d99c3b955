//! Cache configuration (`[cache]` section)

use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileCacheConfig {
    /// Default entry lifetime; also how long a resolved model catalogue is kept.
    pub ttl_seconds: u64,
    /// Maximum number of entries before the oldest write is evicted.
    pub max_size: usize,
    /// Period of the background sweep that drops expired entries.
    pub sweep_interval_seconds: u64,
}

impl Default for FileCacheConfig {
    fn default() -> Self {
        Self {
            ttl_seconds: 300,
            max_size: 100,
            sweep_interval_seconds: 30,
        }
    }
}

impl FileCacheConfig {
    pub fn ttl(&self) -> Duration {
        Duration::from_secs(self.ttl_seconds)
    }

    /// Sweep period, never shorter than one second.
    pub fn sweep_interval(&self) -> Duration {
        Duration::from_secs(self.sweep_interval_seconds.max(1))
    }
}
