//! Configuration for the Snowflake generator

mod builder;

pub use builder::SnowflakeConfigBuilder;
pub use builder::DEFAULT_CUSTOM_EPOCH;

/// Bits holding the millisecond offset from the custom epoch
pub const TIMESTAMP_BITS: u8 = 41;
/// Bits holding the node identifier
pub const NODE_ID_BITS: u8 = 10;
/// Bits holding the per-millisecond sequence
pub const SEQUENCE_BITS: u8 = 12;

/// Configuration for the Snowflake generator
///
/// The bit layout is fixed at 41/10/12; only the custom epoch varies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SnowflakeConfig {
    custom_epoch: u64,
}

impl SnowflakeConfig {
    /// Calculate mask for given number of bits
    #[inline]
    pub(crate) const fn calculate_mask(bits: u8) -> u64 {
        (1u64 << bits) - 1
    }

    const fn new(custom_epoch: u64) -> Self {
        Self { custom_epoch }
    }

    /// Create config from builder
    pub(crate) const fn from_builder(b: SnowflakeConfigBuilder) -> Self {
        Self::new(b.custom_epoch)
    }

    /// Create a new configuration builder
    pub fn builder() -> SnowflakeConfigBuilder {
        SnowflakeConfigBuilder::new()
    }

    /// Custom epoch in milliseconds since the Unix epoch
    #[inline(always)]
    pub const fn epoch(&self) -> u64 {
        self.custom_epoch
    }

    #[inline(always)]
    pub const fn timestamp_bits(&self) -> u8 {
        TIMESTAMP_BITS
    }

    #[inline(always)]
    pub const fn node_bits(&self) -> u8 {
        NODE_ID_BITS
    }

    #[inline(always)]
    pub const fn sequence_bits(&self) -> u8 {
        SEQUENCE_BITS
    }

    #[inline(always)]
    pub const fn max_node_id(&self) -> u16 {
        Self::calculate_mask(NODE_ID_BITS) as u16
    }

    #[inline(always)]
    pub const fn max_sequence_id(&self) -> u16 {
        Self::calculate_mask(SEQUENCE_BITS) as u16
    }

    /// Largest timestamp offset the 41-bit field can hold
    #[inline(always)]
    pub const fn max_timestamp(&self) -> u64 {
        Self::calculate_mask(TIMESTAMP_BITS)
    }

    #[inline(always)]
    pub(crate) const fn timestamp_shift(&self) -> u8 {
        NODE_ID_BITS + SEQUENCE_BITS
    }

    #[inline(always)]
    pub(crate) const fn node_shift(&self) -> u8 {
        SEQUENCE_BITS
    }
}

impl Default for SnowflakeConfig {
    fn default() -> Self {
        Self::new(DEFAULT_CUSTOM_EPOCH)
    }
}
