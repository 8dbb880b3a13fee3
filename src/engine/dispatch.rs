//! Dispatcher: loads a fixed batch of jobs into a closed queue and drains it
//! with a bounded set of workers.

use crate::config::Catalog;
use crate::error::{Error, Result};
use crate::launcher::Launcher;
use crate::model::{DispatchReport, Job, JobOutcome, State};
use crate::telemetry::job::{record_state_transition, start_job_span};
use std::sync::Arc;
use tokio::sync::{Mutex, mpsc};
use tokio::task::JoinSet;
use tracing::{Instrument, debug, error, info, warn};

type WorkQueue = Arc<Mutex<mpsc::Receiver<Job>>>;

/// Number of processing units available to this process (1 if unknown).
pub fn available_workers() -> usize {
    std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1)
}

/// Clamp a requested worker count to `available`.
///
/// 0 means "use all available units"; anything larger than `available` is
/// capped. Never returns less than 1.
pub fn effective_workers(requested: usize, available: usize) -> usize {
    let available = available.max(1);
    if requested == 0 || requested > available {
        available
    } else {
        requested
    }
}

/// Resolves tokens against a catalog snapshot and opens them with a launcher.
#[derive(Debug, Clone)]
pub struct Dispatcher {
    catalog: Arc<Catalog>,
    launcher: Arc<Launcher>,
}

impl Dispatcher {
    pub fn new(catalog: Arc<Catalog>, launcher: Launcher) -> Self {
        Self {
            catalog,
            launcher: Arc::new(launcher),
        }
    }

    /// Resolve and open every token with at most `max_workers` in flight.
    ///
    /// Returns once every token has reached a terminal state. Unresolvable
    /// tokens and failed launches are recorded in the report and do not stop
    /// the batch. A fatal launcher error aborts the remaining workers and is
    /// returned instead of a report.
    pub async fn dispatch_all(
        &self,
        tokens: Vec<String>,
        max_workers: usize,
    ) -> Result<DispatchReport> {
        let jobs = tokens.len();
        let workers = effective_workers(max_workers, available_workers());

        // Fixed batch: load everything, then close the queue.
        let (tx, rx) = mpsc::channel(jobs.max(1));
        for token in tokens {
            tx.send(Job::new(token))
                .await
                .map_err(|_| Error::Other("work queue closed while loading".to_string()))?;
        }
        drop(tx);
        let queue: WorkQueue = Arc::new(Mutex::new(rx));

        info!(jobs, workers, launcher = self.launcher.name(), "dispatching");

        let mut set = JoinSet::new();
        for worker in 0..workers {
            let this = self.clone();
            let queue = Arc::clone(&queue);
            set.spawn(async move { this.run_worker(worker, queue).await });
        }

        let mut report = DispatchReport::default();
        while let Some(joined) = set.join_next().await {
            match joined {
                Ok(Ok(outcomes)) => report.outcomes.extend(outcomes),
                Ok(Err(e)) => {
                    error!(error = %e, "aborting dispatch");
                    set.abort_all();
                    return Err(e);
                }
                Err(e) => {
                    set.abort_all();
                    return Err(Error::Other(format!("worker panicked: {e}")));
                }
            }
        }

        info!(
            opened = report.count(State::Opened),
            skipped = report.count(State::SkippedNotFound),
            failed = report.count(State::FailedLaunch),
            "dispatch complete"
        );
        Ok(report)
    }

    /// Pull jobs until the queue is empty and closed.
    async fn run_worker(&self, worker: usize, queue: WorkQueue) -> Result<Vec<JobOutcome>> {
        let mut outcomes = Vec::new();
        loop {
            let next = queue.lock().await.recv().await;
            let Some(job) = next else { break };
            outcomes.push(self.run_job(worker, job).await?);
        }
        debug!(worker, jobs = outcomes.len(), "worker drained");
        Ok(outcomes)
    }

    /// Resolve then open a single job. Only fatal errors escape.
    async fn run_job(&self, worker: usize, job: Job) -> Result<JobOutcome> {
        let span = start_job_span(worker, &job);

        async {
            record_state_transition(&span, State::Queued, State::InProgress);

            let (state, target, reason) = match self.catalog.resolve(&job.token) {
                Err(e) => {
                    warn!(token = %job.token, reason = %e, "skipping");
                    (State::SkippedNotFound, None, Some(e.to_string()))
                }
                Ok(uri) => match self.launcher.open(uri).await {
                    Ok(()) => {
                        info!(uri, "opened");
                        (State::Opened, Some(uri.to_string()), None)
                    }
                    Err(e) if e.is_fatal() => return Err(e),
                    Err(e) => {
                        error!(uri, error = %e, "launch failed");
                        (State::FailedLaunch, Some(uri.to_string()), Some(e.to_string()))
                    }
                },
            };

            record_state_transition(&span, State::InProgress, state);

            Ok(JobOutcome {
                id: job.id,
                token: job.token.clone(),
                state,
                target,
                error: reason,
            })
        }
        .instrument(span.clone())
        .await
    }
}
