use std::net::SocketAddr;

#[tokio::main]
async fn main() {
    tokio::task::spawn(async { mock_service::requests_per_second_task().await });

    let addr = SocketAddr::from(([0, 0, 0, 0], 3000));
    println!("Mock service listening on {addr}");
    mock_service::run(addr).await;
}
