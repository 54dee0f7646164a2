use rampart_core::{FailureReason, RampConfig, WorkerOutcome};
use reqwest::StatusCode;
use std::time::{Duration, Instant};
use url::Url;

/// One simulated client issuing a single timed GET.
///
/// Every call builds a fresh [`reqwest::Client`], so concurrent workers each
/// open their own connections instead of sharing a pool; a connection the
/// target refuses shows up as a denied worker rather than a pooled retry.
#[derive(Debug, Clone)]
pub struct Requester {
    target: Url,
    timeout: Option<Duration>,
}

impl Requester {
    pub fn new(target: Url) -> Self {
        Self {
            target,
            timeout: None,
        }
    }

    pub fn from_config(config: &RampConfig) -> Self {
        Self {
            target: config.target.clone(),
            timeout: config.request_timeout,
        }
    }

    /// Bound each request to `timeout`; an overdue request is classified as
    /// [`FailureReason::TimedOut`]. Without it the transport defaults apply
    /// and a hung connection can stall its whole step.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Issue one GET and time it from send to the last body byte.
    ///
    /// Only a status of exactly 200 counts as a success; any transport
    /// error, timeout, or other status is folded into a [`FailureReason`].
    /// No retries.
    pub async fn request(&self) -> WorkerOutcome {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        let client = match builder.build() {
            Ok(client) => client,
            Err(err) => return self.failure(classify(err)),
        };

        let start = Instant::now();
        let response = match client.get(self.target.clone()).send().await {
            Ok(response) => response,
            Err(err) => return self.failure(classify(err)),
        };

        let status = response.status();
        if status != StatusCode::OK {
            return self.failure(FailureReason::Status(status.as_u16()));
        }

        // Drain the body so the measurement covers the full response.
        if let Err(err) = response.bytes().await {
            return self.failure(classify(err));
        }
        let elapsed = start.elapsed();

        metrics::counter!("rampart.requests.success").increment(1);
        metrics::histogram!("rampart.request.latency").record(elapsed.as_secs_f64());

        WorkerOutcome::Success(elapsed)
    }

    fn failure(&self, reason: FailureReason) -> WorkerOutcome {
        metrics::counter!("rampart.requests.error").increment(1);
        WorkerOutcome::Failure(reason)
    }
}

fn classify(err: reqwest::Error) -> FailureReason {
    if err.is_timeout() {
        FailureReason::TimedOut
    } else {
        FailureReason::Transport(err.to_string())
    }
}
