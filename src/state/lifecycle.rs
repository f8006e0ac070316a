//! Run lifecycle tracking

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Identity of one run, from `restart()` to natural completion or cancellation
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct RunId(pub u64);

impl fmt::Display for RunId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "run#{}", self.0)
    }
}

/// Phase of the current run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RunPhase {
    Idle,
    Running,
    Completed,
    Cancelled,
}

/// Implicit `Idle -> Running -> Completed` state machine shared by the driver
/// and animator
#[derive(Debug, Clone)]
pub struct RunLifecycle {
    phase: RunPhase,
    current: Option<RunId>,
    next_id: u64,
    started_at: Option<DateTime<Utc>>,
    completed_runs: u64,
    cancelled_runs: u64,
}

impl RunLifecycle {
    pub fn new() -> Self {
        Self {
            phase: RunPhase::Idle,
            current: None,
            next_id: 1,
            started_at: None,
            completed_runs: 0,
            cancelled_runs: 0,
        }
    }

    /// Allocate the identity for the next run and enter `Running`
    pub fn begin(&mut self) -> RunId {
        let run = RunId(self.next_id);
        self.next_id += 1;
        self.current = Some(run);
        self.phase = RunPhase::Running;
        self.started_at = Some(Utc::now());
        debug!("Lifecycle entered running for {}", run);
        run
    }

    /// Record the end of `run`. Returns false when `run` is not the current run.
    pub fn finish(&mut self, run: RunId, completed_naturally: bool) -> bool {
        if self.current != Some(run) || self.phase != RunPhase::Running {
            return false;
        }

        if completed_naturally {
            self.phase = RunPhase::Completed;
            self.completed_runs += 1;
        } else {
            self.phase = RunPhase::Cancelled;
            self.cancelled_runs += 1;
        }
        debug!("Lifecycle left running for {}: {:?}", run, self.phase);
        true
    }

    pub fn phase(&self) -> RunPhase {
        self.phase
    }

    pub fn current(&self) -> Option<RunId> {
        self.current
    }

    pub fn is_running(&self) -> bool {
        self.phase == RunPhase::Running
    }

    pub fn started_at(&self) -> Option<DateTime<Utc>> {
        self.started_at
    }

    pub fn completed_runs(&self) -> u64 {
        self.completed_runs
    }

    pub fn cancelled_runs(&self) -> u64 {
        self.cancelled_runs
    }
}

impl Default for RunLifecycle {
    fn default() -> Self {
        Self::new()
    }
}
