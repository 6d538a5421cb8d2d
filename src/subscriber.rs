//! The event subscriber: bridges the host framework's lifecycle events
//! to metric mutations.
//!
//! Three handlers, one per lifecycle channel. Each handler commits its
//! metric mutations first and invokes the extension hook exactly once
//! afterwards, so nothing the hook does can roll a metric back. The
//! perform-end handler returns the job's own error unchanged after
//! recording it (observe-then-propagate); workbeat never swallows a
//! job failure.

use std::sync::Arc;
use tracing::debug;

use crate::emit;
use crate::error::JobError;
use crate::event::{
    EnqueueEvent, EventBus, JobEvent, PerformEndEvent, PerformStartEvent,
};
use crate::latency::job_latency;
use crate::metrics::events::{
    JobEnqueued, JobExecuted, JobFailed, JobLatency, JobRuntime, JobSucceeded, JobTags,
};

/// Extension hook invoked once per observed lifecycle event, after that
/// event's metric mutations have been committed.
pub type AfterEventHook = Arc<dyn Fn(&JobEvent) + Send + Sync>;

/// Translates job lifecycle events into metric mutations.
///
/// The hook is injected at construction and immutable afterwards, which
/// keeps the subscriber freely cloneable and shareable across worker
/// threads with no synchronization of its own. All handler work is
/// synchronous; nothing here blocks or spawns.
#[derive(Clone)]
pub struct Subscriber {
    after_event: AfterEventHook,
}

impl Subscriber {
    /// Subscriber with a no-op extension hook.
    pub fn new() -> Self {
        Self {
            after_event: Arc::new(|_| {}),
        }
    }

    /// Subscriber that invokes `hook` once per observed event.
    pub fn with_after_event_hook<F>(hook: F) -> Self
    where
        F: Fn(&JobEvent) + Send + Sync + 'static,
    {
        Self {
            after_event: Arc::new(hook),
        }
    }

    /// Install this subscriber's handlers on the host's event bus.
    pub fn register(&self, bus: &mut dyn EventBus) {
        let sub = self.clone();
        bus.on_enqueue(Box::new(move |event| sub.on_enqueue(event)));
        let sub = self.clone();
        bus.on_perform_start(Box::new(move |event| sub.on_perform_start(event)));
        let sub = self.clone();
        bus.on_perform_end(Box::new(move |event| sub.on_perform_end(event)));
        debug!("Registered job lifecycle handlers");
    }

    /// Handles one enqueue attempt, including retry re-enqueues.
    pub fn on_enqueue(&self, event: EnqueueEvent) {
        emit!(JobEnqueued {
            tags: JobTags::from_job(&event.job),
        });

        (self.after_event)(&JobEvent::Enqueued(event));
    }

    /// Handles the start of one execution attempt. Records queue latency
    /// when the job carries an enqueue stamp; a missing stamp skips the
    /// observation and nothing else.
    pub fn on_perform_start(&self, event: PerformStartEvent) {
        if let Some(enqueued_at) = event.job.enqueued_at {
            emit!(JobLatency {
                tags: JobTags::from_job(&event.job),
                seconds: job_latency(enqueued_at, event.end_timestamp),
            });
        }

        (self.after_event)(&JobEvent::Started(event));
    }

    /// Handles the end of one execution attempt. Runtime and the
    /// executed counter are recorded for success and failure alike; the
    /// job's error, if any, is returned to the host after recording so
    /// its retry and dead-letter handling see it unchanged.
    pub fn on_perform_end(&self, event: PerformEndEvent) -> Result<(), JobError> {
        let tags = JobTags::from_job(&event.job);
        emit!(JobRuntime {
            tags: tags.clone(),
            duration: event.duration,
        });
        emit!(JobExecuted { tags: tags.clone() });

        match &event.error {
            Some(error) => emit!(JobFailed {
                tags,
                failure_reason: error.kind.clone(),
            }),
            None => emit!(JobSucceeded { tags }),
        }

        let event = JobEvent::Finished(event);
        (self.after_event)(&event);

        match event {
            JobEvent::Finished(PerformEndEvent {
                error: Some(error), ..
            }) => Err(error),
            _ => Ok(()),
        }
    }
}

impl Default for Subscriber {
    fn default() -> Self {
        Self::new()
    }
}
