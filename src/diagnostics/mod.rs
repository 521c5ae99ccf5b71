//! Failure diagnostics subsystem.
//!
//! # Data Flow
//! ```text
//! Flow::just(value)                 (assembly site captured if debug mode on)
//!     → .and_then(op, f)            (stage may fail with E)
//!     → .checkpoint(label)          (failure records the label it passed)
//!     → .log(tag)                   (signals emitted as tracing events)
//!     → .block()                    → Result<T, Diagnosed<E>>
//! ```
//!
//! # Design Decisions
//! - Diagnostics are metadata only: the error kind and the success value are
//!   identical whichever strategy is active
//! - Operator debug mode is thread-local and held through an RAII guard, so it
//!   is always reset, and concurrent callers on other threads never see it
//! - Evaluation is eager and synchronous; checkpoints are recorded when a
//!   failure crosses them

pub mod debug_mode;
pub mod flow;
pub mod report;
pub mod strategy;

pub use debug_mode::{OperatorDebug, OperatorDebugGuard};
pub use flow::Flow;
pub use report::{AssemblySite, Diagnosed, Diagnostics};
pub use strategy::DiagnosticStrategy;
