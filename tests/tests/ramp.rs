#[allow(unused)]
use utils::*;

use rampart::{RampScheduler, Requester, ResultStore};

#[tracing_test::traced_test]
#[tokio::test]
#[ntest::timeout(10_000)]
async fn ramp_against_a_healthy_endpoint() {
    let addr = spawn_mock().await;
    let requester = Requester::new(mock_url(addr, "/delay/ms/10"));
    let (writer, reader) = ResultStore::new(1, 3);

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

    let snapshot = reader.snapshot().unwrap();
    assert_eq!(snapshot.x_axis, vec![1, 2, 3]);
    assert_eq!(snapshot.denied, vec![0, 0, 0]);
    assert!(snapshot.done);
    assert_eq!(snapshot.response_times.len(), 3);
    for average in &snapshot.response_times {
        assert!(
            (10..500).contains(average),
            "average of {average}ms is out of range"
        );
    }

    assert!(logs_contain("Done making requests."));
}

#[tracing_test::traced_test]
#[tokio::test]
#[ntest::timeout(10_000)]
async fn ramp_against_a_failing_endpoint() {
    let addr = spawn_mock().await;
    let requester = Requester::new(mock_url(addr, "/status/500"));
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

    let snapshot = reader.snapshot().unwrap();
    assert_eq!(snapshot.response_times, vec![0, 0]);
    assert_eq!(snapshot.denied, vec![1, 2]);
    assert!(snapshot.done);
}

#[tracing_test::traced_test]
#[tokio::test]
#[ntest::timeout(10_000)]
async fn ramp_past_endpoint_capacity() {
    let addr = spawn_mock().await;
    let requester = Requester::new(mock_url(addr, "/capacity/2/delay/ms/100"));
    let (writer, reader) = ResultStore::new(1, 4);

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

    let snapshot = reader.snapshot().unwrap();
    assert!(snapshot.done);

    // Within capacity every worker connects. Beyond it, between one worker
    // (if stragglers pick up freed slots) and workers-minus-slots are denied.
    assert_eq!(snapshot.denied[0], 0);
    assert_eq!(snapshot.denied[1], 0);
    assert!(snapshot.denied[3] >= 1);
    assert!(snapshot.denied[3] <= 2);
}
