use rampart_core::{RampSnapshot, StepResult};
use std::ops::RangeInclusive;
use std::sync::{Arc, Mutex, PoisonError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Result series lock is poisoned.")]
    Poisoned,
}

impl<T> From<PoisonError<T>> for StoreError {
    fn from(_err: PoisonError<T>) -> Self {
        Self::Poisoned
    }
}

/// The one piece of state shared between the scheduler and the dashboard:
/// an append-only series of step results plus a completion flag, behind a
/// single lock.
///
/// Created once at startup and split into a write half and a read half.
/// The write half cannot be cloned, so only the scheduler ever appends.
#[derive(Debug)]
pub struct ResultStore {
    start: u32,
    max: u32,
    // Derived from [start, max] once; constant for the whole run.
    x_axis: Vec<u32>,
    series: Mutex<Series>,
}

#[derive(Debug)]
struct Series {
    entries: Vec<StepResult>,
    done: bool,
}

impl ResultStore {
    pub fn new(start: u32, max: u32) -> (SeriesWriter, SeriesReader) {
        let x_axis: Vec<u32> = (start..=max).collect();
        let entries = Vec::with_capacity(x_axis.len());

        let store = Arc::new(ResultStore {
            start,
            max,
            x_axis,
            series: Mutex::new(Series {
                entries,
                done: false,
            }),
        });

        (
            SeriesWriter {
                store: Arc::clone(&store),
            },
            SeriesReader { store },
        )
    }

    fn append(&self, result: StepResult) -> Result<(), StoreError> {
        let mut series = self.series.lock()?;
        debug_assert!(series.entries.len() < self.x_axis.len());
        series.entries.push(result);
        Ok(())
    }

    fn finish(&self) -> Result<(), StoreError> {
        let mut series = self.series.lock()?;
        series.done = true;
        Ok(())
    }

    fn snapshot(&self) -> Result<RampSnapshot, StoreError> {
        // Hold the lock only long enough to copy the entries and the flag;
        // the projection into per-chart arrays happens outside it.
        let (entries, done) = {
            let series = self.series.lock()?;
            (series.entries.clone(), series.done)
        };

        Ok(RampSnapshot {
            x_axis: self.x_axis.clone(),
            response_times: entries.iter().map(|r| r.average_latency_ms).collect(),
            denied: entries.iter().map(|r| r.denied).collect(),
            done,
        })
    }
}

/// Write half of the store. Held exclusively by the scheduler; appends are
/// one per completed step, in ramp order.
#[derive(Debug)]
pub struct SeriesWriter {
    store: Arc<ResultStore>,
}

impl SeriesWriter {
    /// The worker counts this store was sized for, in ramp order.
    pub fn worker_range(&self) -> RangeInclusive<u32> {
        self.store.start..=self.store.max
    }

    pub fn append(&self, result: StepResult) -> Result<(), StoreError> {
        self.store.append(result)
    }

    /// Marks the series complete. Called once, after the final step.
    pub fn finish(&self) -> Result<(), StoreError> {
        self.store.finish()
    }
}

/// Read half of the store. Cheap to clone; every dashboard request takes its
/// own consistent snapshot.
#[derive(Debug, Clone)]
pub struct SeriesReader {
    store: Arc<ResultStore>,
}

impl SeriesReader {
    pub fn snapshot(&self) -> Result<RampSnapshot, StoreError> {
        self.store.snapshot()
    }
}
