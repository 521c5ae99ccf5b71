//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML)
//!     → loader.rs (read & deserialize)
//!     → validation.rs (semantic checks)
//!     → ServiceConfig (validated, immutable)
//!     → cloned into the server and logging setup
//! ```
//!
//! # Design Decisions
//! - All fields have defaults; running without a file is valid
//! - Validation separates syntactic (serde) from semantic checks
//! - The rejected name is not configurable

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, ConfigError};
pub use schema::{
    GreetingConfig, ListenerConfig, LogFormat, ObservabilityConfig, ServiceConfig, TimeoutConfig,
};
