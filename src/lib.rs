//! workbeat: metrics for a background job execution lifecycle.
//!
//! This library listens for lifecycle events (enqueue, perform-start,
//! perform-end) delivered by a host job-processing framework and turns
//! them into tagged counters and duration histograms through the
//! `metrics` facade. An extension hook fires once per observed event
//! for arbitrary embedder side effects.
//!
//! # Example
//!
//! ```ignore
//! use workbeat::{Config, Subscriber, metrics};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), workbeat::error::MetricsError> {
//!     let config = Config::from_file("config.yaml").unwrap();
//!     metrics::init(&config.metrics)?;
//!
//!     let subscriber = Subscriber::with_after_event_hook(|event| {
//!         tracing::info!(outcome = ?event.outcome(), "job event");
//!     });
//!     subscriber.register(&mut my_framework_bus);
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod error;
pub mod event;
pub mod latency;
pub mod metrics;
pub mod subscriber;

// Re-export main types
pub use config::{Config, MetricsConfig};
pub use error::JobError;
pub use event::{
    EnqueueEvent, EventBus, JobDetails, JobEvent, Outcome, PerformEndEvent, PerformStartEvent,
};
pub use latency::job_latency;
pub use subscriber::{AfterEventHook, Subscriber};
