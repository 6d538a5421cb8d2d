//! Metrics infrastructure for workbeat.
//!
//! This module groups the metric-emission side of the crate:
//! - `events`: metric event types and the `InternalEvent` trait
//! - `server`: Prometheus recorder install and HTTP exposition

pub mod events;
pub mod server;

pub use server::init;

/// Bucket boundaries (seconds) shared by the runtime and latency
/// histograms. Covers sub-10ms jobs up to three-hour batch runs.
pub const JOB_DURATION_SECONDS_BUCKETS: &[f64] = &[
    0.005, 0.01, 0.025, 0.05, 0.1, 0.25, 0.5, // fast
    1.0, 2.5, 5.0, 10.0, 30.0, // slow
    60.0, 120.0, 300.0, 1800.0, 3600.0, 10800.0, // very slow
];

/// Emit a metric event.
///
/// Calls the `InternalEvent::emit()` method on the given event, which
/// records the corresponding metric mutation.
///
/// # Example
///
/// ```ignore
/// use workbeat::metrics::events::{JobEnqueued, JobTags};
///
/// emit!(JobEnqueued { tags });
/// ```
#[macro_export]
macro_rules! emit {
    ($event:expr) => {
        $crate::metrics::events::InternalEvent::emit($event)
    };
}
