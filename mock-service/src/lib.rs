//! Endpoints with controllable behavior for exercising the benchmark:
//! fixed latency, fixed status codes, and a hard cap on concurrent requests.

use axum::{debug_handler, extract::Path, http::StatusCode, routing::get, Router};
use std::net::SocketAddr;
use std::sync::atomic::{AtomicU32, AtomicU64, Ordering};
use std::time::Duration;
use tokio::net::TcpListener;
use tracing::debug;

pub async fn run(addr: SocketAddr) {
    let listener = TcpListener::bind(&addr).await.unwrap();
    serve(listener).await;
}

pub async fn serve(listener: TcpListener) {
    axum::serve(listener, router()).await.unwrap();
}

pub fn router() -> Router {
    Router::new()
        .route("/delay/ms/:delay_ms", get(delay))
        .route("/status/:code", get(status))
        .route("/capacity/:slots/delay/ms/:delay_ms", get(capacity))
}

/// Responds 200 after sleeping for the given number of milliseconds.
#[debug_handler]
pub async fn delay(Path(delay_ms): Path<u64>) {
    REQUESTS.fetch_add(1, Ordering::Relaxed);
    tokio::time::sleep(Duration::from_millis(delay_ms)).await;
}

/// Responds immediately with the given status code.
#[debug_handler]
pub async fn status(Path(code): Path<u16>) -> StatusCode {
    REQUESTS.fetch_add(1, Ordering::Relaxed);
    StatusCode::from_u16(code).unwrap_or(StatusCode::BAD_REQUEST)
}

/// Serves at most `slots` requests at a time, each sleeping `delay_ms`.
/// Anything beyond that is turned away with a 503 right away.
#[debug_handler]
pub async fn capacity(Path((slots, delay_ms)): Path<(u32, u64)>) -> Result<(), StatusCode> {
    REQUESTS.fetch_add(1, Ordering::Relaxed);

    let guard = match SlotGuard::acquire(slots) {
        Some(guard) => guard,
        None => {
            debug!("MOCK SERVICE ___ OVER CAPACITY");
            return Err(StatusCode::SERVICE_UNAVAILABLE);
        }
    };

    tokio::time::sleep(Duration::from_millis(delay_ms)).await;
    drop(guard);
    Ok(())
}

static IN_FLIGHT: AtomicU32 = AtomicU32::new(0);

/// Releases its slot on drop, so a disconnecting client can't leak one.
struct SlotGuard;

impl SlotGuard {
    fn acquire(slots: u32) -> Option<Self> {
        if IN_FLIGHT.fetch_add(1, Ordering::Relaxed) < slots {
            Some(SlotGuard)
        } else {
            IN_FLIGHT.fetch_sub(1, Ordering::Relaxed);
            None
        }
    }
}

impl Drop for SlotGuard {
    fn drop(&mut self) {
        IN_FLIGHT.fetch_sub(1, Ordering::Relaxed);
    }
}

/** Request Rate Printer **/

static REQUESTS: AtomicU64 = AtomicU64::new(0);

pub async fn requests_per_second_task() {
    loop {
        tokio::time::sleep(Duration::from_millis(1000)).await;
        let requests = REQUESTS.fetch_min(0, Ordering::Relaxed);
        println!("{requests} RPS");
    }
}
