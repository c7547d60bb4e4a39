use crate::error::*;

use std::time::{Duration};

///
/// Converts a frame duration specified in seconds into a `Duration`
///
/// Zero is a valid duration (the frame is present but never selected by time), but negative
/// and non-finite values are rejected.
///
pub fn duration_from_seconds(seconds: f64) -> Result<Duration, SequenceError> {
    if !seconds.is_finite() || seconds < 0.0 {
        return Err(SequenceError::InvalidDuration(seconds));
    }

    Ok(Duration::from_secs_f64(seconds))
}

///
/// Converts a `Duration` to a number of seconds
///
#[inline]
pub fn seconds_from_duration(duration: Duration) -> f64 {
    duration.as_secs_f64()
}

///
/// Scales a real elapsed time by a playback rate, returning signed nanoseconds of local time
///
/// A rate of exactly 1.0 does not go through floating point, so timings built from whole
/// nanoseconds stay exact.
///
pub (crate) fn scale_elapsed(real_elapsed: Duration, rate: f64) -> i128 {
    let nanos = real_elapsed.as_nanos() as i128;

    if rate == 1.0 {
        nanos
    } else {
        ((nanos as f64) * rate).round() as i128
    }
}

///
/// Converts a non-negative number of nanoseconds back into a `Duration` (negative values become 0)
///
pub (crate) fn duration_from_nanos(nanos: i128) -> Duration {
    if nanos <= 0 {
        Duration::from_nanos(0)
    } else if nanos >= u64::MAX as i128 {
        Duration::from_nanos(u64::MAX)
    } else {
        Duration::from_nanos(nanos as u64)
    }
}

///
/// Wraps a signed local time into the range `[0, total)`
///
/// A zero total always wraps to zero.
///
pub (crate) fn wrap_local_time(nanos: i128, total: Duration) -> Duration {
    let total = total.as_nanos() as i128;

    if total <= 0 {
        Duration::from_nanos(0)
    } else {
        duration_from_nanos(nanos.rem_euclid(total))
    }
}

///
/// Clamps a signed local time into the range `[0, total]`
///
pub (crate) fn clamp_local_time(nanos: i128, total: Duration) -> Duration {
    let total = total.as_nanos() as i128;

    duration_from_nanos(nanos.max(0).min(total))
}
