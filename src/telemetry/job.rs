//! Job span helpers.
//!
//! One span per job, opened when a worker dequeues it.

use crate::model::{Job, State};
use tracing::Span;

/// Start a span for one job on the given worker.
pub fn start_job_span(worker: usize, job: &Job) -> Span {
    tracing::info_span!(
        "job",
        worker,
        "job.id" = %job.id,
        "job.token" = %job.token,
    )
}

/// Record a state transition event on the given span.
pub fn record_state_transition(span: &Span, from: State, to: State) {
    debug_assert!(from.can_transition_to(to), "{from} -> {to}");
    span.in_scope(|| {
        tracing::debug!(from = %from, to = %to, "state_transition");
    });
}
