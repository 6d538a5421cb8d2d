//! Metric events for the job lifecycle.
//!
//! Each event struct represents one metric mutation derived from an
//! observed lifecycle event. Events implement the `InternalEvent` trait
//! which performs the corresponding counter increment or histogram
//! observation. The `metrics` registry makes every mutation safe under
//! concurrent invocation from multiple worker threads.

use metrics::{counter, histogram};
use std::time::Duration;
use tracing::trace;

use crate::event::JobDetails;

/// Trait for internal events that can be emitted as metrics.
pub trait InternalEvent {
    /// Emit this event as a metric.
    fn emit(self);
}

/// The `{queue, job_class, executions}` tag set shared by every job
/// metric, pre-rendered to label values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobTags {
    pub queue: String,
    pub job_class: String,
    pub executions: String,
}

impl JobTags {
    pub fn from_job(job: &JobDetails) -> Self {
        Self {
            queue: job.queue.clone(),
            job_class: job.class_name.clone(),
            executions: job.executions.to_string(),
        }
    }
}

/// Event emitted when a job is enqueued (including retry re-enqueues).
pub struct JobEnqueued {
    pub tags: JobTags,
}

impl InternalEvent for JobEnqueued {
    fn emit(self) {
        trace!(
            queue = %self.tags.queue,
            job_class = %self.tags.job_class,
            "Job enqueued"
        );
        counter!(
            "workbeat_jobs_enqueued_total",
            "queue" => self.tags.queue,
            "job_class" => self.tags.job_class,
            "executions" => self.tags.executions
        )
        .increment(1);
    }
}

/// Event emitted once per execution attempt, success or failure.
pub struct JobExecuted {
    pub tags: JobTags,
}

impl InternalEvent for JobExecuted {
    fn emit(self) {
        trace!(
            queue = %self.tags.queue,
            job_class = %self.tags.job_class,
            "Job executed"
        );
        counter!(
            "workbeat_jobs_executed_total",
            "queue" => self.tags.queue,
            "job_class" => self.tags.job_class,
            "executions" => self.tags.executions
        )
        .increment(1);
    }
}

/// Event emitted when an execution attempt completes without raising.
pub struct JobSucceeded {
    pub tags: JobTags,
}

impl InternalEvent for JobSucceeded {
    fn emit(self) {
        trace!(
            queue = %self.tags.queue,
            job_class = %self.tags.job_class,
            "Job succeeded"
        );
        counter!(
            "workbeat_jobs_success_total",
            "queue" => self.tags.queue,
            "job_class" => self.tags.job_class,
            "executions" => self.tags.executions
        )
        .increment(1);
    }
}

/// Event emitted when an execution attempt raises.
pub struct JobFailed {
    pub tags: JobTags,
    /// Class name of the raised error.
    pub failure_reason: String,
}

impl InternalEvent for JobFailed {
    fn emit(self) {
        trace!(
            queue = %self.tags.queue,
            job_class = %self.tags.job_class,
            failure_reason = %self.failure_reason,
            "Job failed"
        );
        counter!(
            "workbeat_jobs_failed_total",
            "queue" => self.tags.queue,
            "job_class" => self.tags.job_class,
            "executions" => self.tags.executions,
            "failure_reason" => self.failure_reason
        )
        .increment(1);
    }
}

/// Event emitted with the wall-clock duration of one execution attempt.
pub struct JobRuntime {
    pub tags: JobTags,
    pub duration: Duration,
}

impl InternalEvent for JobRuntime {
    fn emit(self) {
        trace!(
            queue = %self.tags.queue,
            job_class = %self.tags.job_class,
            duration_ms = self.duration.as_millis(),
            "Job runtime"
        );
        histogram!(
            "workbeat_job_runtime_seconds",
            "queue" => self.tags.queue,
            "job_class" => self.tags.job_class,
            "executions" => self.tags.executions
        )
        .record(self.duration.as_secs_f64());
    }
}

/// Event emitted with the queue wait of one execution attempt, in
/// seconds. Only emitted when the job carried an enqueue stamp.
pub struct JobLatency {
    pub tags: JobTags,
    pub seconds: f64,
}

impl InternalEvent for JobLatency {
    fn emit(self) {
        trace!(
            queue = %self.tags.queue,
            job_class = %self.tags.job_class,
            seconds = self.seconds,
            "Job latency"
        );
        histogram!(
            "workbeat_job_latency_seconds",
            "queue" => self.tags.queue,
            "job_class" => self.tags.job_class,
            "executions" => self.tags.executions
        )
        .record(self.seconds);
    }
}
