//! Core data model.
//!
//! A job is one raw token submitted by the caller. It is resolved and opened
//! by exactly one worker and ends in exactly one terminal state.

use uuid::Uuid;

// ---------------------------------------------------------------------------
// Job
// ---------------------------------------------------------------------------

/// Newtype for job IDs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct JobId(pub Uuid);

impl JobId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl std::fmt::Display for JobId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Short display: first 8 chars of UUID
        write!(f, "{}", &self.0.to_string()[..8])
    }
}

impl Default for JobId {
    fn default() -> Self {
        Self::new()
    }
}

/// A single token waiting to be resolved and opened.
#[derive(Debug, Clone)]
pub struct Job {
    pub id: JobId,
    pub token: String,
}

impl Job {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            id: JobId::new(),
            token: token.into(),
        }
    }
}

// ---------------------------------------------------------------------------
// State
// ---------------------------------------------------------------------------

/// Lifecycle state of a job. There are no retries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum State {
    /// Loaded into the work queue.
    Queued,
    /// Dequeued by a worker.
    InProgress,
    /// Launcher exited successfully. Terminal.
    Opened,
    /// Token did not resolve. Terminal.
    SkippedNotFound,
    /// Launcher failed for this target. Terminal.
    FailedLaunch,
}

impl State {
    /// Can transition from self to `to`?
    pub fn can_transition_to(self, to: State) -> bool {
        use State::*;
        matches!(
            (self, to),
            (Queued, InProgress)
                | (InProgress, Opened)
                | (InProgress, SkippedNotFound)
                | (InProgress, FailedLaunch)
        )
    }

    pub fn is_terminal(self) -> bool {
        matches!(
            self,
            State::Opened | State::SkippedNotFound | State::FailedLaunch
        )
    }
}

impl std::fmt::Display for State {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            State::Queued => "queued",
            State::InProgress => "in_progress",
            State::Opened => "opened",
            State::SkippedNotFound => "skipped_not_found",
            State::FailedLaunch => "failed_launch",
        };
        write!(f, "{s}")
    }
}

// ---------------------------------------------------------------------------
// Outcome
// ---------------------------------------------------------------------------

/// Where a job ended up.
#[derive(Debug, Clone)]
pub struct JobOutcome {
    pub id: JobId,
    /// The token as submitted.
    pub token: String,
    pub state: State,
    /// Resolved URI or path, if resolution succeeded.
    pub target: Option<String>,
    /// Reason for a skip or failure.
    pub error: Option<String>,
}

/// Outcomes of one dispatch, grouped by worker, in no particular order.
#[derive(Debug, Default)]
pub struct DispatchReport {
    pub outcomes: Vec<JobOutcome>,
}

impl DispatchReport {
    pub fn len(&self) -> usize {
        self.outcomes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }

    /// Number of jobs that ended in `state`.
    pub fn count(&self, state: State) -> usize {
        self.outcomes.iter().filter(|o| o.state == state).count()
    }

    /// Resolved targets that were opened successfully.
    pub fn opened(&self) -> Vec<&str> {
        self.outcomes
            .iter()
            .filter(|o| o.state == State::Opened)
            .filter_map(|o| o.target.as_deref())
            .collect()
    }
}
