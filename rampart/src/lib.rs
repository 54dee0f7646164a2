//! Engine for ramped endpoint benchmarking.
//!
//! A run walks an ascending range of worker counts. Each step fires that
//! many concurrent requests at the target, waits for all of them, and folds
//! the outcomes into one aggregate; the growing series is published through
//! a lock-guarded store that the dashboard reads from.

pub mod requester;
pub mod scheduler;
pub mod step;
pub mod store;

pub use requester::Requester;
pub use scheduler::RampScheduler;
pub use step::run_step;
pub use store::{ResultStore, SeriesReader, SeriesWriter, StoreError};
