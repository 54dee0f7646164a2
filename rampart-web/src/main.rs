use anyhow::Context;
use clap::Parser;
use rampart::{RampScheduler, Requester, ResultStore};
use rampart_web::cli::Cli;
use rampart_web::{browser, server};
use std::net::SocketAddr;
use tokio::net::TcpListener;
#[allow(unused)]
use tracing::{debug, error, info, trace, warn};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "rampart=info,rampart_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();
    if cli.start_workers > cli.max_workers {
        warn!(
            "Start worker count ({}) exceeds max worker count ({}); no requests will be made.",
            cli.start_workers, cli.max_workers
        );
    }

    let config = cli.ramp_config();
    let (writer, reader) = ResultStore::new(config.start_workers, config.max_workers);

    let requester = Requester::from_config(&config);
    RampScheduler::new(
        move || {
            let requester = requester.clone();
            async move { requester.request().await }
        },
        writer,
    )
    .spawn();

    let addr = SocketAddr::from(([0, 0, 0, 0], cli.port));
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind the dashboard server to port {}", cli.port))?;

    let url = format!("http://localhost:{}", cli.port);
    info!("Dashboard running on {url}");

    if cli.no_browser {
        debug!("Skipping browser launch.");
    } else {
        info!("Opening browser...");
        if let Err(err) = browser::open(&url) {
            warn!("Could not open a browser: {err}");
        }
    }

    server::serve(listener, reader).await?;
    Ok(())
}
