//! Debugging strategies for surfacing a failure.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// How a failure's origin is surfaced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DiagnosticStrategy {
    /// No extra context.
    #[default]
    Silent,
    /// Signals are logged under a tag.
    Logged,
    /// Operator debug mode captures assembly call sites.
    Traced,
    /// Failure points carry human-readable labels.
    Checkpointed,
}

impl DiagnosticStrategy {
    pub const ALL: [DiagnosticStrategy; 4] = [
        DiagnosticStrategy::Silent,
        DiagnosticStrategy::Logged,
        DiagnosticStrategy::Traced,
        DiagnosticStrategy::Checkpointed,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DiagnosticStrategy::Silent => "silent",
            DiagnosticStrategy::Logged => "logged",
            DiagnosticStrategy::Traced => "traced",
            DiagnosticStrategy::Checkpointed => "checkpointed",
        }
    }
}

impl fmt::Display for DiagnosticStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error)]
#[error("unknown diagnostic strategy '{0}' (expected silent, logged, traced or checkpointed)")]
pub struct UnknownStrategy(pub String);

impl FromStr for DiagnosticStrategy {
    type Err = UnknownStrategy;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "silent" => Ok(DiagnosticStrategy::Silent),
            "logged" | "log" => Ok(DiagnosticStrategy::Logged),
            "traced" | "hook" => Ok(DiagnosticStrategy::Traced),
            "checkpointed" | "checkpoint" => Ok(DiagnosticStrategy::Checkpointed),
            _ => Err(UnknownStrategy(s.to_string())),
        }
    }
}
