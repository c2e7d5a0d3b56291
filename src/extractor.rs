use chrono::{DateTime, Utc};

use crate::config::SnowflakeConfig;

/// Snowflake component extractor
///
/// Decoding is total over `u64` and never validates that the input was
/// produced with the same configuration; a mismatched epoch just yields a
/// shifted timestamp.
#[derive(Debug, Copy, Clone)]
pub struct SnowflakeExtractor {
    config: SnowflakeConfig,
}

impl SnowflakeExtractor {
    /// Create a new extractor for the given configuration
    pub(crate) fn new(config: SnowflakeConfig) -> Self {
        Self { config }
    }

    /// Timestamp offset from the custom epoch, in milliseconds
    #[inline(always)]
    pub fn offset(&self, id: u64) -> u64 {
        id >> self.config.timestamp_shift()
    }

    /// Absolute timestamp in milliseconds since the Unix epoch
    #[inline(always)]
    pub fn timestamp(&self, id: u64) -> u64 {
        self.offset(id).wrapping_add(self.config.epoch())
    }

    #[inline(always)]
    pub fn node(&self, id: u64) -> u16 {
        ((id >> self.config.node_shift())
            & SnowflakeConfig::calculate_mask(self.config.node_bits())) as u16
    }

    #[inline(always)]
    pub fn sequence(&self, id: u64) -> u16 {
        (id & SnowflakeConfig::calculate_mask(self.config.sequence_bits())) as u16
    }

    /// Decompose an ID into absolute timestamp, node ID and sequence
    #[inline]
    pub fn decompose(&self, id: u64) -> (u64, u16, u16) {
        (self.timestamp(id), self.node(id), self.sequence(id))
    }

    /// Creation instant of an ID, `None` if it falls outside chrono's range
    pub fn datetime(&self, id: u64) -> Option<DateTime<Utc>> {
        let millis = i64::try_from(self.timestamp(id)).ok()?;
        DateTime::<Utc>::from_timestamp_millis(millis)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn compose(offset: u64, node: u16, sequence: u16) -> u64 {
        (offset << 22) | (u64::from(node) << 12) | u64::from(sequence)
    }

    #[test]
    fn test_decompose() {
        let config = SnowflakeConfig::builder().epoch(1_680_000_000_000).build();
        let extract = SnowflakeExtractor::new(config);

        let id = compose(0x1234567, 42, 123);

        assert_eq!(extract.offset(id), 0x1234567);
        assert_eq!(extract.timestamp(id), 0x1234567 + 1_680_000_000_000);
        assert_eq!(extract.node(id), 42);
        assert_eq!(extract.sequence(id), 123);
        assert_eq!(
            extract.decompose(id),
            (0x1234567 + 1_680_000_000_000, 42, 123)
        );
    }

    #[test]
    fn test_component_boundaries() {
        let extract = SnowflakeExtractor::new(SnowflakeConfig::builder().epoch(0).build());
        let max_offset = (1u64 << 41) - 1;
        let id = compose(max_offset, 1023, 4095);

        assert_eq!(extract.decompose(id), (max_offset, 1023, 4095));
        assert_eq!(id >> 63, 0, "sign bit must stay clear");
    }

    #[test]
    fn test_total_over_u64() {
        let extract = SnowflakeExtractor::new(SnowflakeConfig::builder().epoch(u64::MAX).build());
        let (timestamp, node, sequence) = extract.decompose(u64::MAX);

        assert_eq!(timestamp, (u64::MAX >> 22).wrapping_add(u64::MAX));
        assert_eq!(node, 1023);
        assert_eq!(sequence, 4095);
        assert!(extract.datetime(0).is_none());
    }

    #[test]
    fn test_datetime() {
        let extract = SnowflakeExtractor::new(SnowflakeConfig::default());
        let at = extract.datetime(compose(5, 7, 0)).unwrap();
        assert_eq!(at.timestamp_millis(), 1_680_000_000_005);
    }
}
