//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create Axum Router with the greeting handler
//! - Wire up middleware (request ID, tracing, metrics, timeout)
//! - Bind server to listener and shut down gracefully

use axum::{http::StatusCode, middleware, response::IntoResponse, routing::get, Router};
use std::time::Duration;
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower::ServiceBuilder;
use tower_http::{
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::config::{GreetingConfig, ServiceConfig};
use crate::http::greeting::greeting;
use crate::http::request::MakeRequestUuidV4;
use crate::lifecycle::shutdown_signal;
use crate::observability::metrics::track_requests;

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub greeting: GreetingConfig,
}

/// HTTP server for the greeting service.
pub struct HttpServer {
    router: Router,
    config: ServiceConfig,
}

impl HttpServer {
    pub fn new(config: ServiceConfig) -> Self {
        let state = AppState {
            greeting: config.greeting.clone(),
        };
        let router = Self::build_router(&config, state);
        Self { router, config }
    }

    /// Build the Axum router with all middleware layers.
    #[allow(deprecated)]
    fn build_router(config: &ServiceConfig, state: AppState) -> Router {
        Router::new()
            .route("/greeting/{first_name}/{last_name}", get(greeting))
            .fallback(not_found)
            .with_state(state)
            .layer(
                ServiceBuilder::new()
                    .layer(SetRequestIdLayer::x_request_id(MakeRequestUuidV4))
                    .layer(TraceLayer::new_for_http())
                    .layer(middleware::from_fn(track_requests))
                    .layer(PropagateRequestIdLayer::x_request_id())
                    .layer(TimeoutLayer::new(Duration::from_secs(config.timeouts.request_secs))),
            )
    }

    /// Serve until Ctrl+C or until `stop` fires.
    pub async fn run(self, listener: TcpListener, stop: broadcast::Receiver<()>) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            checkpoints = self.config.greeting.checkpoints,
            operator_debug = self.config.greeting.operator_debug,
            "HTTP server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown_signal(stop))
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}

async fn not_found() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, "No matching route found")
}
