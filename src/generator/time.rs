//! Time utilities for Snowflake generation
//!
//! Converts wall-clock readings into offsets from the custom epoch

/// Milliseconds from `epoch` to `now_millis`, negative when the reading precedes the epoch
#[inline(always)]
pub(crate) fn offset_since_epoch(now_millis: i64, epoch: u64) -> i64 {
    let epoch = i64::try_from(epoch).unwrap_or(i64::MAX);
    now_millis.saturating_sub(epoch)
}
