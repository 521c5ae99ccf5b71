//! Shared utilities for integration tests.

use std::net::SocketAddr;
use std::time::Duration;
use tokio::net::TcpListener;

use greeting_service::config::ServiceConfig;
use greeting_service::http::HttpServer;
use greeting_service::lifecycle::Shutdown;

/// A server running on an ephemeral local port.
///
/// Keep it alive for the duration of the test: dropping the `Shutdown`
/// stops the server.
pub struct TestService {
    pub addr: SocketAddr,
    pub shutdown: Shutdown,
}

impl TestService {
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }
}

/// Start the service with default config adjusted by `configure`.
pub async fn start_service<F>(configure: F) -> TestService
where
    F: FnOnce(&mut ServiceConfig),
{
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let mut config = ServiceConfig::default();
    config.listener.bind_address = addr.to_string();
    configure(&mut config);

    let shutdown = Shutdown::new();
    let stop = shutdown.subscribe();
    let server = HttpServer::new(config);

    tokio::spawn(async move {
        let _ = server.run(listener, stop).await;
    });

    tokio::time::sleep(Duration::from_millis(50)).await;
    TestService { addr, shutdown }
}

pub fn client() -> reqwest::Client {
    reqwest::Client::builder()
        .pool_max_idle_per_host(0)
        .no_proxy()
        .build()
        .unwrap()
}
