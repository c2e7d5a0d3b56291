//! Core Snowflake generator implementation
//!
//! Split into modules for testability:
//! - `state` - Generation state machine (last timestamp + sequence)
//! - `time` - Offsets from the custom epoch
//! - `wait` - Spin on sequence exhaustion
//! - `generate` - ID generation under the state lock

mod generate;
mod state;
mod time;
mod wait;

use std::fmt;
use std::sync::Mutex;

use tracing::debug;

use crate::clock::{Clock, SystemClock};
use crate::config::SnowflakeConfig;
use crate::error::SnowflakeError;
use crate::extractor::SnowflakeExtractor;
use crate::node::{resolve_node_id, MacAddressProvider, NodeIdProvider};

use state::State;
use time::offset_since_epoch;

/// Snowflake ID generator
///
/// One instance owns one `(last_timestamp, sequence)` pair behind a mutex;
/// share it between threads with `Arc` rather than creating one per call.
#[derive(Debug)]
pub struct Snowflake<C: Clock = SystemClock> {
    state: Mutex<State>,
    node_prefix: u64,
    node_id: u16,
    config: SnowflakeConfig,
    clock: C,
    pub extract: SnowflakeExtractor,
}

impl Snowflake {
    /// Create with the default custom epoch
    pub fn new(node_id: impl Into<i64>) -> Result<Self, SnowflakeError> {
        Self::with_config(node_id, SnowflakeConfig::default())
    }

    /// Create with an explicit custom epoch in milliseconds since the Unix epoch
    pub fn with_epoch(node_id: impl Into<i64>, custom_epoch: u64) -> Result<Self, SnowflakeError> {
        Self::with_config(node_id, SnowflakeConfig::builder().epoch(custom_epoch).build())
    }

    /// Create with custom configuration
    pub fn with_config(
        node_id: impl Into<i64>,
        config: SnowflakeConfig,
    ) -> Result<Self, SnowflakeError> {
        Self::with_clock(node_id, config, SystemClock)
    }

    /// Create with a node ID derived from local hardware addresses and the default epoch
    ///
    /// Falls back to a random node ID when no hardware address is available.
    pub fn auto() -> Self {
        Self::from_provider(&MacAddressProvider, SnowflakeConfig::default())
    }

    /// Create with a node ID taken from `provider`, consulted exactly once
    pub fn from_provider<P: NodeIdProvider + ?Sized>(provider: &P, config: SnowflakeConfig) -> Self {
        let resolved = resolve_node_id(provider);
        debug!(
            node_id = resolved.node_id(),
            source = ?resolved.source(),
            "resolved node id"
        );
        Self::build(resolved.node_id(), config, SystemClock)
    }
}

impl<C: Clock> Snowflake<C> {
    /// Create with custom configuration and time source
    pub fn with_clock(
        node_id: impl Into<i64>,
        config: SnowflakeConfig,
        clock: C,
    ) -> Result<Self, SnowflakeError> {
        let node_id = Self::validate_node_id(node_id.into(), &config)?;
        Ok(Self::build(node_id, config, clock))
    }

    fn validate_node_id(node_id: i64, config: &SnowflakeConfig) -> Result<u16, SnowflakeError> {
        let max = config.max_node_id();
        u16::try_from(node_id)
            .ok()
            .filter(|&id| id <= max)
            .ok_or(SnowflakeError::InvalidConfiguration { node_id, max })
    }

    fn build(node_id: u16, config: SnowflakeConfig, clock: C) -> Self {
        debug!(node_id, epoch = config.epoch(), "snowflake generator created");
        Self {
            state: Mutex::new(State::default()),
            node_prefix: Self::compute_node_prefix(node_id, &config),
            node_id,
            config,
            clock,
            extract: SnowflakeExtractor::new(config),
        }
    }

    #[inline(always)]
    fn compute_node_prefix(node_id: u16, config: &SnowflakeConfig) -> u64 {
        u64::from(node_id) << config.node_shift()
    }

    #[inline(always)]
    pub fn node_id(&self) -> u16 {
        self.node_id
    }

    #[inline(always)]
    pub fn config(&self) -> &SnowflakeConfig {
        &self.config
    }

    /// Decompose an ID into absolute timestamp (ms since the Unix epoch), node ID and sequence
    #[inline]
    pub fn decompose(&self, id: u64) -> (u64, u16, u16) {
        self.extract.decompose(id)
    }

    /// Current clock reading as an offset from the custom epoch
    #[inline(always)]
    pub(crate) fn now_ms(&self) -> i64 {
        offset_since_epoch(self.clock.now_millis(), self.config.epoch())
    }

    #[inline(always)]
    pub(crate) fn assemble_id(&self, timestamp: u64, sequence: u16) -> u64 {
        debug_assert!(sequence <= self.config.max_sequence_id());
        (timestamp << self.config.timestamp_shift()) | self.node_prefix | u64::from(sequence)
    }
}

impl<C: Clock> fmt::Display for Snowflake<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Snowflake [timestamp_bits={}, node_id_bits={}, sequence_bits={}, custom_epoch={}, node_id={}]",
            self.config.timestamp_bits(),
            self.config.node_bits(),
            self.config.sequence_bits(),
            self.config.epoch(),
            self.node_id
        )
    }
}
