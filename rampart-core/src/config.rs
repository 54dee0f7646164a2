use crate::{DEFAULT_MAX_WORKERS, DEFAULT_START_WORKERS};
use std::ops::RangeInclusive;
use std::time::Duration;
use url::Url;

/// Settings for one benchmark run, parsed at the boundary and handed to the
/// engine at startup.
#[derive(Clone, Debug)]
pub struct RampConfig {
    /// Endpoint every worker issues its GET against.
    pub target: Url,
    /// Worker count of the first step.
    pub start_workers: u32,
    /// Worker count of the last step, inclusive.
    pub max_workers: u32,
    /// Optional per-request bound; an overdue request counts as a failure.
    pub request_timeout: Option<Duration>,
}

impl RampConfig {
    pub fn new(target: Url) -> Self {
        Self {
            target,
            start_workers: DEFAULT_START_WORKERS,
            max_workers: DEFAULT_MAX_WORKERS,
            request_timeout: None,
        }
    }

    /// The ascending worker counts the ramp will visit, one step each.
    /// Empty when `start_workers > max_workers`.
    pub fn worker_range(&self) -> RangeInclusive<u32> {
        self.start_workers..=self.max_workers
    }

    /// Number of steps in a full run.
    pub fn step_count(&self) -> usize {
        if self.max_workers < self.start_workers {
            0
        } else {
            (self.max_workers - self.start_workers + 1) as usize
        }
    }
}
