//! Wait strategy for sequence exhaustion
//!
//! The wait is a pure busy-poll: it runs while the state lock is held and is
//! expected to last well under a millisecond, so it never sleeps or yields.

/// Spin until `get_time` reports an offset strictly past `last`
#[inline]
pub(crate) fn spin_until_after<F>(last: u64, get_time: F) -> u64
where
    F: Fn() -> i64,
{
    loop {
        if let Ok(now) = u64::try_from(get_time()) {
            if now > last {
                return now;
            }
        }
        std::hint::spin_loop();
    }
}
