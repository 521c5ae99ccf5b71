//! Failure metadata and the error wrapper that carries it.

use serde::Serialize;
use std::fmt;
use std::panic::Location;

/// Source location where an operator was assembled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AssemblySite {
    pub operator: &'static str,
    pub file: &'static str,
    pub line: u32,
    pub column: u32,
}

impl AssemblySite {
    pub(crate) fn new(operator: &'static str, location: &'static Location<'static>) -> Self {
        Self {
            operator,
            file: location.file(),
            line: location.line(),
            column: location.column(),
        }
    }
}

impl fmt::Display for AssemblySite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ⇢ at {}:{}:{}", self.operator, self.file, self.line, self.column)
    }
}

/// Metadata attached to a failure on its way to the caller.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Diagnostics {
    /// Tag of the `log` operator that observed the failure.
    pub log_tag: Option<String>,
    /// Checkpoint labels the failure passed through, origin first.
    pub checkpoints: Vec<String>,
    /// Operators the failure traversed, origin first. Debug mode only.
    pub assembly: Vec<AssemblySite>,
}

impl Diagnostics {
    pub fn is_empty(&self) -> bool {
        self.log_tag.is_none() && self.checkpoints.is_empty() && self.assembly.is_empty()
    }
}

/// An error together with the diagnostics gathered while it propagated.
///
/// Display shows only the underlying error; use [`Diagnosed::render`] for the
/// full trace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnosed<E> {
    kind: E,
    diagnostics: Diagnostics,
}

impl<E> Diagnosed<E> {
    pub fn new(kind: E, diagnostics: Diagnostics) -> Self {
        Self { kind, diagnostics }
    }

    /// The underlying error, unchanged by any strategy.
    pub fn kind(&self) -> &E {
        &self.kind
    }

    pub fn diagnostics(&self) -> &Diagnostics {
        &self.diagnostics
    }
}

impl<E: fmt::Display> Diagnosed<E> {
    /// Multi-line description of the failure and everything known about where
    /// it came from.
    pub fn render(&self) -> String {
        let mut out = format!("error: {}", self.kind);

        if let Some(tag) = &self.diagnostics.log_tag {
            out.push_str(&format!("\n  logged under [{}]", tag));
        }

        if let Some(origin) = self.diagnostics.assembly.first() {
            out.push_str(&format!("\n  assembly trace from producer [{}]:", origin.operator));
            out.push_str(&format!("\n    {}:{}:{}", origin.file, origin.line, origin.column));
        }

        let observed = self.diagnostics.assembly.len() + self.diagnostics.checkpoints.len();
        if observed > 0 {
            out.push_str("\n  error has been observed at the following site(s):");
            for site in &self.diagnostics.assembly {
                out.push_str(&format!("\n    |_ {}", site));
            }
            for label in &self.diagnostics.checkpoints {
                out.push_str(&format!("\n    |_ checkpoint ⇢ {}", label));
            }
        }

        out
    }
}

impl<E: fmt::Display> fmt::Display for Diagnosed<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.kind, f)
    }
}

impl<E> std::error::Error for Diagnosed<E>
where
    E: std::error::Error + 'static,
{
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.kind)
    }
}
