//! Greeting service library.
//!
//! A single HTTP endpoint that greets a pair of names through a staged
//! pipeline, plus a diagnostic harness showing how one failure is surfaced
//! under different debugging strategies.

pub mod config;
pub mod diagnostics;
pub mod harness;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod pipeline;

pub use config::schema::ServiceConfig;
pub use diagnostics::{Diagnosed, DiagnosticStrategy};
pub use http::HttpServer;
pub use lifecycle::Shutdown;
pub use pipeline::{greet, GreetingPipeline, NamePair, PipelineError};
