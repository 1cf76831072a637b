//! Elapsed-time measurement and best-time comparison
//!
//! Pure functions over externally supplied wall-clock timestamps; the
//! session decides when to freeze the value, the host decides where
//! `now` comes from.

/// Elapsed milliseconds since `started_at`
#[inline]
pub fn elapsed(started_at: f64, now: f64) -> f64 {
    now - started_at
}

/// Compare a finished run against the current record.
///
/// Returns the record to keep and whether it changed (i.e. whether a
/// persist is warranted). Ties keep the existing record.
pub fn compare_and_update(elapsed_ms: f64, current_ms: f64) -> (f64, bool) {
    if elapsed_ms > current_ms {
        (elapsed_ms, true)
    } else {
        (current_ms, false)
    }
}
