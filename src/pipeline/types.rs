//! Pipeline data types and error definitions.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Name the filter stage refuses to greet. Exact, case-sensitive match.
pub const REJECTED_NAME: &str = "John";

/// Ordered pair of names taken from the request path.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct NamePair {
    pub first: String,
    pub last: String,
}

impl NamePair {
    pub fn new(first: impl Into<String>, last: impl Into<String>) -> Self {
        Self {
            first: first.into(),
            last: last.into(),
        }
    }

    /// `[first, last]`, in that order.
    pub fn into_vec(self) -> Vec<String> {
        vec![self.first, self.last]
    }
}

/// Formatted greeting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct GreetingResult(String);

impl GreetingResult {
    pub(crate) fn new(text: String) -> Self {
        Self(text)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for GreetingResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Errors raised by the greeting pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PipelineError {
    /// Filtering left zero names, or more than one.
    #[error("expected exactly one surviving name, found {survivors}")]
    Arity { survivors: usize },
}

/// Result type for pipeline stages.
pub type PipelineResult<T> = Result<T, PipelineError>;
