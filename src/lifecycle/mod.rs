//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Shutdown (shutdown.rs):
//!     trigger() → broadcast to every subscribed server
//!
//! Signals (signals.rs):
//!     Ctrl+C or broadcast → graceful shutdown future resolves
//!     → axum stops accepting, drains in-flight requests
//! ```

pub mod shutdown;
pub mod signals;

pub use shutdown::Shutdown;
pub use signals::shutdown_signal;
