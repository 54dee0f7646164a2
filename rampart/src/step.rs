use rampart_core::{StepResult, WorkerOutcome};
use std::future::Future;
use std::sync::{Arc, Mutex};
use tokio::task::JoinSet;
#[allow(unused)]
use tracing::{debug, error, trace, warn};

/// Running totals for one step, shared by all of its workers.
#[derive(Debug, Default)]
struct StepTally {
    total_latency_ms: u64,
    connected: u32,
}

/// Fans out exactly `workers` concurrent probes and reduces their outcomes
/// into one [`StepResult`].
///
/// The fan-out is unbounded: no queueing, no cap beyond `workers` itself.
/// The join is a barrier, so the reduction runs only after every worker has
/// terminated, success or failure. A step where nothing connected still
/// produces a result (`0` average, everything denied); that condition is
/// logged and left to the caller to keep ramping past.
pub async fn run_step<T, F>(probe: T, workers: u32) -> StepResult
where
    T: Fn() -> F + Send + Sync + 'static + Clone,
    F: Future<Output = WorkerOutcome> + Send + 'static,
{
    let tally = Arc::new(Mutex::new(StepTally::default()));
    let mut set = JoinSet::new();

    for _ in 0..workers {
        let probe = probe.clone();
        let tally = Arc::clone(&tally);
        set.spawn(async move {
            record(&tally, probe().await);
        });
    }

    while let Some(joined) = set.join_next().await {
        if let Err(err) = joined {
            // A panicked worker recorded nothing, so it counts as denied.
            error!("Worker task failed to join: {err}");
        }
    }

    let (connected, total_latency_ms) = {
        let tally = tally.lock().expect("step tally lock poisoned");
        (tally.connected, tally.total_latency_ms)
    };

    if connected == 0 {
        warn!("No workers connected out of {workers} requested.");
    }

    let average_latency_ms = if connected == 0 {
        0
    } else {
        total_latency_ms / u64::from(connected)
    };

    StepResult {
        average_latency_ms,
        connected,
        denied: workers - connected,
    }
}

fn record(tally: &Mutex<StepTally>, outcome: WorkerOutcome) {
    match outcome {
        WorkerOutcome::Success(latency) => {
            // The critical section is the read-modify-write of the two
            // totals and nothing else.
            let mut tally = tally.lock().expect("step tally lock poisoned");
            tally.total_latency_ms += latency.as_millis() as u64;
            tally.connected += 1;
        }
        WorkerOutcome::Failure(reason) => {
            debug!("Worker request failed: {reason}");
        }
    }
}
