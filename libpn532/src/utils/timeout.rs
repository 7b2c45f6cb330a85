//! Timeout arithmetic on millisecond ticks.
//!
//! Ticks come from a [`Clock`](crate::transport::Clock) and may wrap, so all
//! comparisons go through wrapping subtraction.

/// Milliseconds elapsed between two clock readings.
pub fn elapsed_ms(start: u64, now: u64) -> u64 {
    now.wrapping_sub(start)
}

/// True once the tick difference exceeds `budget_ms`.
///
/// Ticks are truncated to whole milliseconds, so a difference of exactly
/// `budget_ms` may stand for up to a millisecond less of real time. Only a
/// strictly larger difference guarantees the full budget has passed.
pub fn has_expired(start: u64, now: u64, budget_ms: u16) -> bool {
    elapsed_ms(start, now) > u64::from(budget_ms)
}
