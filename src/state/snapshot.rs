//! Serializable view of the timer for logging and inspection

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{RunId, RunPhase};

/// Point-in-time status of the controller
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimerSnapshot {
    pub phase: RunPhase,
    pub run: Option<RunId>,
    pub seconds_remaining: u64,
    pub label: String,
    pub stroke_fraction: f64,
    pub restart_enabled: bool,
    pub prompts_presented: u64,
    pub completed_runs: u64,
    pub cancelled_runs: u64,
    pub started_at: Option<DateTime<Utc>>,
}
