//! SnowflakeConfig builder for constructing configuration

use chrono::{DateTime, Utc};

use super::SnowflakeConfig;

/// Default custom epoch: 2023-03-28T10:40:00Z in milliseconds since the Unix epoch
pub const DEFAULT_CUSTOM_EPOCH: u64 = 1_680_000_000_000;

/// Builder for SnowflakeConfig
#[derive(Debug)]
pub struct SnowflakeConfigBuilder {
    pub(super) custom_epoch: u64,
}

impl SnowflakeConfigBuilder {
    /// Create a new SnowflakeConfigBuilder with default values
    pub const fn new() -> Self {
        Self {
            custom_epoch: DEFAULT_CUSTOM_EPOCH,
        }
    }

    /// Set a custom epoch in milliseconds since the Unix epoch
    pub const fn epoch(mut self, epoch: u64) -> Self {
        self.custom_epoch = epoch;
        self
    }

    /// Set the custom epoch from a UTC instant
    ///
    /// Instants before 1970 clamp to the Unix epoch.
    pub fn epoch_at(mut self, instant: DateTime<Utc>) -> Self {
        self.custom_epoch = u64::try_from(instant.timestamp_millis()).unwrap_or(0);
        self
    }

    /// Build the final SnowflakeConfig
    pub const fn build(self) -> SnowflakeConfig {
        SnowflakeConfig::from_builder(self)
    }
}

impl Default for SnowflakeConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
