use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::get,
    Json, Router,
};
use rampart::{SeriesReader, StoreError};
use rampart_core::RampSnapshot;
use std::sync::Arc;
use thiserror::Error;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;
#[allow(unused)]
use tracing::{debug, error, info, trace, warn};

static DASHBOARD_HTML: &str = include_str!("../assets/dashboard.html");

#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Dashboard server IO error: {0}")]
    Io(#[from] std::io::Error),
}

struct ServerState {
    series: SeriesReader,
}

/// Serves the dashboard on an already-bound listener. Runs until the process
/// exits; the ramp finishing does not shut the dashboard down.
pub async fn serve(listener: TcpListener, series: SeriesReader) -> Result<(), ServerError> {
    debug!("Starting dashboard server...");
    axum::serve(listener, router(series)).await?;
    Ok(())
}

/// The dashboard router: the chart page on `/` and the current ramp snapshot
/// as JSON on `/data`.
pub fn router(series: SeriesReader) -> Router {
    let state = Arc::new(ServerState { series });

    Router::new()
        .route("/", get(dashboard_handler))
        .route("/data", get(data_handler))
        .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()))
        .with_state(state)
}

async fn dashboard_handler() -> Html<&'static str> {
    Html(DASHBOARD_HTML)
}

async fn data_handler(
    State(state): State<Arc<ServerState>>,
) -> Result<Json<RampSnapshot>, HandlerError> {
    let snapshot = state.series.snapshot()?;
    trace!(
        "Serving snapshot with {} of {} steps.",
        snapshot.response_times.len(),
        snapshot.x_axis.len()
    );
    Ok(Json(snapshot))
}

#[derive(Error, Debug)]
enum HandlerError {
    #[error("Result store unavailable: {0}")]
    Store(#[from] StoreError),
}

impl IntoResponse for HandlerError {
    fn into_response(self) -> Response {
        error!("{self}");
        (StatusCode::INTERNAL_SERVER_ERROR, self.to_string()).into_response()
    }
}
