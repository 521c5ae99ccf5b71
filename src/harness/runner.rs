//! Look up an element of the selected sequence under a diagnostic strategy.

use std::fmt::Write as _;
use std::io;
use std::thread;

use crate::diagnostics::{Diagnosed, DiagnosticStrategy, Flow, OperatorDebug};

use super::branch::Branch;
use super::clock::SecondSource;
use super::types::{HarnessError, HarnessResult, IntegerSequence};

/// Position read from the selected sequence.
pub const LOOKUP_INDEX: usize = 5;

/// Outcome of one harness invocation.
#[derive(Debug, Clone)]
pub struct HarnessReport {
    pub second: u32,
    pub branch: Branch,
    pub strategy: DiagnosticStrategy,
    pub outcome: Result<i64, Diagnosed<HarnessError>>,
}

impl HarnessReport {
    pub fn passed(&self) -> bool {
        self.outcome.is_ok()
    }

    /// Pass/fail line followed by any diagnostic text.
    pub fn render(&self) -> String {
        let mut out = String::new();
        let _ = write!(
            out,
            "second {} → branch {} [{}]: ",
            self.second, self.branch, self.strategy
        );
        match &self.outcome {
            Ok(value) => {
                let _ = write!(out, "PASS element_at({}) = {}", LOOKUP_INDEX, value);
            }
            Err(err) => {
                let _ = write!(out, "FAIL\n{}", err.render());
            }
        }
        out
    }
}

/// Run the harness for a given second.
pub fn run(second: u32, strategy: DiagnosticStrategy) -> HarnessReport {
    let branch = Branch::select(second);
    let span = tracing::info_span!("harness", second, branch = %branch, strategy = %strategy);
    let _enter = span.enter();

    let outcome = match strategy {
        DiagnosticStrategy::Traced => {
            let _debug = OperatorDebug::enable();
            look_up(branch, strategy)
        }
        DiagnosticStrategy::Silent
        | DiagnosticStrategy::Logged
        | DiagnosticStrategy::Checkpointed => look_up(branch, strategy),
    };

    match &outcome {
        Ok(value) => tracing::debug!(value, "lookup succeeded"),
        Err(err) => tracing::debug!(error = %err, "lookup failed"),
    }

    HarnessReport {
        second,
        branch,
        strategy,
        outcome,
    }
}

/// Run the harness for the second reported by `clock`.
pub fn run_now(clock: &dyn SecondSource, strategy: DiagnosticStrategy) -> HarnessReport {
    run(clock.current_second(), strategy)
}

/// Run the harness on a dedicated worker thread and wait for it.
///
/// Debug mode for the traced strategy is acquired on the worker itself.
pub fn run_on_worker(second: u32, strategy: DiagnosticStrategy) -> io::Result<HarnessReport> {
    let handle = thread::Builder::new()
        .name("harness-worker".to_string())
        .spawn(move || run(second, strategy))?;

    match handle.join() {
        Ok(report) => Ok(report),
        Err(panic) => std::panic::resume_unwind(panic),
    }
}

fn look_up(branch: Branch, strategy: DiagnosticStrategy) -> Result<i64, Diagnosed<HarnessError>> {
    // One arm per branch so each source assembles at its own call site.
    let flow = match branch {
        Branch::A => Flow::just(branch.sequence()).and_then("element_at", element_at_lookup),
        Branch::B => Flow::just(branch.sequence()).and_then("element_at", element_at_lookup),
        Branch::C => Flow::just(branch.sequence()).and_then("element_at", element_at_lookup),
    };

    let flow = match strategy {
        DiagnosticStrategy::Logged => flow.log(branch.log_tag()),
        DiagnosticStrategy::Checkpointed => flow.checkpoint(branch.checkpoint_label()),
        DiagnosticStrategy::Silent | DiagnosticStrategy::Traced => flow,
    };

    flow.block()
}

fn element_at_lookup(sequence: IntegerSequence) -> HarnessResult<i64> {
    sequence.element_at(LOOKUP_INDEX)
}
