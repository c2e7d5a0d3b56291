//! Shared test utilities for generator tests

use std::collections::HashSet;

use crate::{ManualClock, Snowflake, SnowflakeConfig};

/// Custom epoch used by the simulated-clock tests
pub const TEST_EPOCH: u64 = 1_680_000_000_000;

/// Generator driven by a manual clock starting at `now_millis`
pub fn manual_generator(node_id: i64, now_millis: i64) -> (Snowflake<ManualClock>, ManualClock) {
    let clock = ManualClock::new(now_millis);
    let config = SnowflakeConfig::builder().epoch(TEST_EPOCH).build();
    let generator = Snowflake::with_clock(node_id, config, clock.clone()).unwrap();
    (generator, clock)
}

/// Assert that all IDs in the collection are unique
pub fn assert_unique_ids(ids: &[u64], expected_count: usize) {
    let set: HashSet<_> = ids.iter().copied().collect();
    assert_eq!(
        set.len(),
        expected_count,
        "Expected {} unique IDs, but got {} (duplicates detected)",
        expected_count,
        set.len()
    );
}

/// Assert that IDs are strictly increasing in the order given
pub fn assert_ids_monotonic(ids: &[u64]) {
    for pair in ids.windows(2) {
        assert!(
            pair[1] > pair[0],
            "ID {} is not greater than previous ID {}",
            pair[1],
            pair[0]
        );
    }
}

/// Assert collection has expected unique count and is increasing once sorted
pub fn assert_unique_and_monotonic(mut ids: Vec<u64>, expected_count: usize) {
    assert_unique_ids(&ids, expected_count);
    ids.sort_unstable();
    assert_ids_monotonic(&ids);
}
