use clap::Parser;
use rampart_core::{RampConfig, DEFAULT_MAX_WORKERS, DEFAULT_PORT, DEFAULT_START_WORKERS};
use std::time::Duration;
use url::Url;

/// Ramp up concurrent requests against an HTTP endpoint and chart how it holds up.
#[derive(Parser, Debug)]
#[command(name = "rampart", version, about)]
pub struct Cli {
    /// Endpoint to benchmark, e.g. `http://localhost:3000/health`.
    #[arg(short, long)]
    pub endpoint: Url,

    /// Port the dashboard server listens on.
    #[arg(short, long, default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Worker count for the first ramp step.
    #[arg(short, long, default_value_t = DEFAULT_START_WORKERS)]
    pub start_workers: u32,

    /// Worker count for the last ramp step.
    #[arg(short, long, default_value_t = DEFAULT_MAX_WORKERS)]
    pub max_workers: u32,

    /// Per-request timeout (e.g. `500ms`, `2s`). Requests wait indefinitely when unset.
    #[arg(long, value_parser = humantime::parse_duration)]
    pub request_timeout: Option<Duration>,

    /// Do not open the dashboard in a browser on startup.
    #[arg(long)]
    pub no_browser: bool,
}

impl Cli {
    pub fn ramp_config(&self) -> RampConfig {
        RampConfig {
            target: self.endpoint.clone(),
            start_workers: self.start_workers,
            max_workers: self.max_workers,
            request_timeout: self.request_timeout,
        }
    }
}
