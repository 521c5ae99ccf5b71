//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware stack)
//!     → request.rs (assign / propagate X-Request-ID)
//!     → greeting.rs (path extraction, pipeline on the blocking pool)
//!     → response.rs (greeting text or JSON failure body)
//!     → Send to client
//!
//! client.rs builds percent-encoded greeting URLs for callers (greeting-cli)
//! ```

pub mod client;
pub mod greeting;
pub mod request;
pub mod response;
pub mod server;

pub use client::{greeting_url, ClientError, GreetingClient};
pub use request::{MakeRequestUuidV4, X_REQUEST_ID};
pub use server::{AppState, HttpServer};
