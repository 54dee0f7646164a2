#[allow(unused)]
use utils::*;

use rampart::{RampScheduler, Requester, ResultStore, SeriesReader};
use rampart_web::server;
use std::net::SocketAddr;
use std::time::Duration;
use tokio::net::TcpListener;

async fn spawn_dashboard(reader: SeriesReader) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move { server::serve(listener, reader).await });
    addr
}

#[tokio::test]
#[ntest::timeout(10_000)]
async fn data_route_serves_the_finished_ramp() {
    let mock = spawn_mock().await;
    let requester = Requester::new(mock_url(mock, "/delay/ms/5"));
    let (writer, reader) = ResultStore::new(1, 2);

    RampScheduler::new(
        move || {
            let requester = requester.clone();
            async move { requester.request().await }
        },
        writer,
    )
    .run()
    .await
    .unwrap();

    let addr = spawn_dashboard(reader).await;
    let body: serde_json::Value = reqwest::get(format!("http://{addr}/data"))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(body["xAxis"], serde_json::json!([1, 2]));
    assert_eq!(body["denied"], serde_json::json!([0, 0]));
    assert_eq!(body["done"], serde_json::json!(true));
    assert_eq!(body["responseTimes"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn dashboard_route_serves_the_chart_page() {
    init();

    let (_writer, reader) = ResultStore::new(1, 10);
    let addr = spawn_dashboard(reader).await;

    let response = reqwest::get(format!("http://{addr}/")).await.unwrap();
    assert_eq!(response.status(), reqwest::StatusCode::OK);

    let page = response.text().await.unwrap();
    assert!(page.contains("<canvas"));
    assert!(page.contains("chart.js"));
}

#[tokio::test]
#[ntest::timeout(15_000)]
async fn data_route_tracks_a_live_ramp() {
    let mock = spawn_mock().await;
    let requester = Requester::new(mock_url(mock, "/delay/ms/50"));
    let (writer, reader) = ResultStore::new(1, 3);

    RampScheduler::new(
        move || {
            let requester = requester.clone();
            async move { requester.request().await }
        },
        writer,
    )
    .spawn();

    let addr = spawn_dashboard(reader).await;
    let url = format!("http://{addr}/data");

    loop {
        let body: serde_json::Value = reqwest::get(&url).await.unwrap().json().await.unwrap();

        let response_times = body["responseTimes"].as_array().unwrap();
        let denied = body["denied"].as_array().unwrap();
        assert_eq!(response_times.len(), denied.len());
        assert!(response_times.len() <= 3);
        assert_eq!(body["xAxis"], serde_json::json!([1, 2, 3]));

        if body["done"] == serde_json::json!(true) {
            assert_eq!(response_times.len(), 3);
            break;
        }

        tokio::time::sleep(Duration::from_millis(20)).await;
    }
}
