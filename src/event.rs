//! Job lifecycle event types and the host-facing observer interface.
//!
//! The host job framework delivers three kinds of raw events (enqueue,
//! perform-start, perform-end). Each carries a snapshot of the job's
//! identifying fields; perform events add timing and failure data. The
//! [`EventBus`] trait is the registration surface a host exposes so a
//! [`Subscriber`](crate::Subscriber) can attach its handlers.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::error::JobError;

/// Snapshot of a job's identifying fields at the moment an event fires.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobDetails {
    /// Class name of the job, e.g. "HelloJob".
    pub class_name: String,
    /// Name of the queue the job was submitted to.
    pub queue: String,
    /// Number of prior execution attempts (0 before the first attempt).
    #[serde(default)]
    pub executions: u32,
    /// When the job was enqueued. Absence is a valid state: some host
    /// adapters never stamp it, in which case latency is not measured.
    #[serde(default)]
    pub enqueued_at: Option<DateTime<Utc>>,
}

/// Fired once per enqueue attempt, including retry re-enqueues.
#[derive(Debug, Clone)]
pub struct EnqueueEvent {
    pub job: JobDetails,
}

/// Fired once per execution attempt, before the job body runs.
#[derive(Debug, Clone)]
pub struct PerformStartEvent {
    pub job: JobDetails,
    /// Raw event end timestamp as reported by the host. Depending on
    /// the host version this is either seconds since epoch or the same
    /// value scaled by 1000; see [`job_latency`](crate::job_latency).
    pub end_timestamp: f64,
}

/// Fired once per execution attempt, after the job body returned or raised.
#[derive(Debug, Clone)]
pub struct PerformEndEvent {
    pub job: JobDetails,
    /// Wall-clock duration of the attempt's body.
    pub duration: Duration,
    /// The error the job body raised, if any.
    pub error: Option<JobError>,
}

/// What a lifecycle event says happened to the job.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Enqueued,
    Started,
    Succeeded,
    Failed,
}

/// A normalized lifecycle event, handed to the extension hook once per
/// observed event. Ephemeral: built per handler invocation, never stored.
#[derive(Debug, Clone)]
pub enum JobEvent {
    Enqueued(EnqueueEvent),
    Started(PerformStartEvent),
    Finished(PerformEndEvent),
}

impl JobEvent {
    /// The job this event concerns.
    pub fn job(&self) -> &JobDetails {
        match self {
            JobEvent::Enqueued(e) => &e.job,
            JobEvent::Started(e) => &e.job,
            JobEvent::Finished(e) => &e.job,
        }
    }

    /// The outcome this event reports. Perform-end events resolve to
    /// `Succeeded` or `Failed` by the presence of an error.
    pub fn outcome(&self) -> Outcome {
        match self {
            JobEvent::Enqueued(_) => Outcome::Enqueued,
            JobEvent::Started(_) => Outcome::Started,
            JobEvent::Finished(e) if e.error.is_some() => Outcome::Failed,
            JobEvent::Finished(_) => Outcome::Succeeded,
        }
    }
}

/// Handler installed on the enqueue channel.
pub type EnqueueHandler = Box<dyn Fn(EnqueueEvent) + Send + Sync>;
/// Handler installed on the perform-start channel.
pub type PerformStartHandler = Box<dyn Fn(PerformStartEvent) + Send + Sync>;
/// Handler installed on the perform-end channel. Returns the job's
/// error, if any, so the host's own failure handling proceeds unchanged.
pub type PerformEndHandler =
    Box<dyn Fn(PerformEndEvent) -> Result<(), JobError> + Send + Sync>;

/// Registration surface the host job framework exposes: one named
/// channel per lifecycle event, each taking a typed callback. Callbacks
/// are invoked synchronously on whatever thread delivers the event.
pub trait EventBus {
    fn on_enqueue(&mut self, handler: EnqueueHandler);
    fn on_perform_start(&mut self, handler: PerformStartHandler);
    fn on_perform_end(&mut self, handler: PerformEndHandler);
}
