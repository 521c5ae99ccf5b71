//! Branch-selection harness.
//!
//! # Data Flow
//! ```text
//! SecondSource (wall clock or fixed)
//!     → branch.rs (S%2 → A, else S%3 → B, else C)
//!     → IntegerSequence
//!     → runner.rs (element_at(5) under a DiagnosticStrategy)
//!     → HarnessReport (value or Diagnosed<HarnessError>)
//! ```
//!
//! # Design Decisions
//! - The second is injected so every branch can be forced in tests
//! - Branch A always succeeds with 6; B and C always fail out of range
//! - Strategies only attach metadata, they never change the outcome
//! - Not reachable from the HTTP surface

pub mod branch;
pub mod clock;
pub mod runner;
pub mod types;

pub use branch::Branch;
pub use clock::{FixedSecond, SecondSource, SystemClock};
pub use runner::{run, run_now, run_on_worker, HarnessReport, LOOKUP_INDEX};
pub use types::{HarnessError, IntegerSequence};
