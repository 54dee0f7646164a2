use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

/// What a single worker observed for its one request.
#[derive(Debug, Clone)]
pub enum WorkerOutcome {
    /// The response came back with status 200; holds the time from sending
    /// the request to receiving the full body.
    Success(Duration),
    /// Anything else. The reason is kept so a future revision can expose it
    /// without touching the aggregation contract.
    Failure(FailureReason),
}

impl WorkerOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, WorkerOutcome::Success(_))
    }
}

/// Why a worker did not count as connected.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FailureReason {
    #[error("status code: {0}")]
    Status(u16),

    #[error("request timed out")]
    TimedOut,

    #[error("transport error: {0}")]
    Transport(String),
}

/// Aggregate of one ramp step at a fixed worker count.
///
/// `average_latency_ms` is the truncated mean over successful workers only,
/// and `0` when none connected. `denied` is the requested worker count minus
/// `connected`, so it is never negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepResult {
    pub average_latency_ms: u64,
    pub connected: u32,
    pub denied: u32,
}

impl StepResult {
    /// The worker count this step was asked to run with.
    pub fn requested_workers(&self) -> u32 {
        self.connected + self.denied
    }
}

/// Point-in-time copy of the result series, shaped for the dashboard.
///
/// `response_times` and `denied` are positionally aligned by step index and
/// always equal in length; `x_axis` spans the full configured ramp no matter
/// how many steps have completed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RampSnapshot {
    pub x_axis: Vec<u32>,
    pub response_times: Vec<u64>,
    pub denied: Vec<u32>,
    pub done: bool,
}

impl RampSnapshot {
    /// Number of completed steps captured in this snapshot.
    pub fn len(&self) -> usize {
        self.response_times.len()
    }

    pub fn is_empty(&self) -> bool {
        self.response_times.is_empty()
    }
}
