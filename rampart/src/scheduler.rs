use crate::step::run_step;
use crate::store::{SeriesWriter, StoreError};
use rampart_core::WorkerOutcome;
use std::future::Future;
#[allow(unused)]
use tracing::{debug, error, info, instrument, trace, warn};

/// Drives the ramp: one step per worker count, from the store's start to its
/// max, strictly in order.
///
/// The scheduler owns the store's write half, making it the only component
/// that can append. It runs independently of the dashboard and has no
/// cancellation; a run ends at the final step or at process exit.
pub struct RampScheduler<T> {
    probe: T,
    writer: SeriesWriter,
}

impl<T, F> RampScheduler<T>
where
    T: Fn() -> F + Send + Sync + 'static + Clone,
    F: Future<Output = WorkerOutcome> + Send + 'static,
{
    pub fn new(probe: T, writer: SeriesWriter) -> Self {
        Self { probe, writer }
    }

    /// Runs every ramp step in ascending order, appending each aggregate as
    /// it completes, then marks the series done. Step `i + 1` never starts
    /// before step `i` has joined all of its workers.
    ///
    /// A step where nothing connected is appended like any other and the
    /// ramp keeps going; the only early exit is a poisoned store lock.
    #[instrument(name = "ramp", skip_all)]
    pub async fn run(self) -> Result<(), StoreError> {
        for workers in self.writer.worker_range() {
            let result = run_step(self.probe.clone(), workers).await;
            debug!(
                "Step at {workers} workers: average {}ms, {} connected, {} denied.",
                result.average_latency_ms, result.connected, result.denied
            );
            self.writer.append(result)?;
        }

        self.writer.finish()?;
        info!("Done making requests.");
        Ok(())
    }

    /// Spawns the ramp as an independent background task, started
    /// immediately and never awaited by the serving side.
    pub fn spawn(self) -> tokio::task::JoinHandle<()> {
        tokio::spawn(async move {
            if let Err(err) = self.run().await {
                error!("Ramp halted early: {err}");
            }
        })
    }
}
