//! Greeting pipeline subsystem.
//!
//! # Data Flow
//! ```text
//! NamePair (first, last)
//!     → filter     drop the rejected name         ─ checkpoint "After filtering"
//!     → transform  exactly one survivor or Arity  ─ checkpoint "After transformation"
//!     → join       concatenate survivors          ─ checkpoint "After joining"
//!     → map        "Hello, " + joined
//!     → GreetingResult
//! ```
//!
//! # Design Decisions
//! - Each stage is a plain function so it can be tested on its own
//! - The chain runs synchronously; callers decide which thread runs it
//! - Checkpoints are observability only and can be switched off without
//!   changing any result

pub mod greeting;
pub mod types;

pub use greeting::{greet, GreetingPipeline};
pub use types::{GreetingResult, NamePair, PipelineError, REJECTED_NAME};
