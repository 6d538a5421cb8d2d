//! Queue latency computation.
//!
//! Latency is the time between a job's enqueue and the start of its
//! execution. The host reports the perform-start event's end timestamp
//! as a bare float whose unit changed across host versions: newer hosts
//! send seconds since epoch, older ones send the same value scaled by
//! 1000. Nothing in the event says which, so the unit is inferred.

use chrono::{DateTime, Utc};

/// A milliseconds reading of any instant is ~1000x its seconds reading,
/// so a factor-10 guard band against the enqueue epoch separates the
/// two conventions for any elapsed time short of centuries.
const UNIT_GUARD: f64 = 10.0;

const MILLIS_PER_SECOND: f64 = 1000.0;

/// Returns the elapsed seconds between `enqueued_at` and the raw
/// perform-start end timestamp, whichever unit the host used.
///
/// Never fails; negative deltas from host clock skew clamp to 0.0.
/// Callers skip the call entirely when the job has no enqueue stamp.
pub fn job_latency(enqueued_at: DateTime<Utc>, end_timestamp: f64) -> f64 {
    let enqueued = timestamp_seconds(enqueued_at);
    let ended = if end_timestamp > enqueued * UNIT_GUARD {
        end_timestamp / MILLIS_PER_SECOND
    } else {
        end_timestamp
    };
    (ended - enqueued).max(0.0)
}

fn timestamp_seconds(at: DateTime<Utc>) -> f64 {
    at.timestamp_micros() as f64 / 1e6
}
