//! Harness data types and error definitions.

use serde::Serialize;
use thiserror::Error;

/// Errors raised by the harness.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HarnessError {
    /// The requested index is past the end of the selected sequence.
    #[error("index {index} out of range for sequence of length {len}")]
    IndexOutOfRange { index: usize, len: usize },
}

/// Result type for harness operations.
pub type HarnessResult<T> = Result<T, HarnessError>;

/// Ordered integers the harness indexes into.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IntegerSequence(Vec<i64>);

impl IntegerSequence {
    /// `count` consecutive integers starting at `start`.
    pub fn range(start: i64, count: usize) -> Self {
        Self((start..).take(count).collect())
    }

    pub fn just(values: &[i64]) -> Self {
        Self(values.to_vec())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[i64] {
        &self.0
    }

    /// Element at a 0-based position.
    pub fn element_at(&self, index: usize) -> HarnessResult<i64> {
        self.0
            .get(index)
            .copied()
            .ok_or(HarnessError::IndexOutOfRange { index, len: self.0.len() })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range() {
        assert_eq!(IntegerSequence::range(1, 10).as_slice(), &[1, 2, 3, 4, 5, 6, 7, 8, 9, 10]);
        assert_eq!(IntegerSequence::range(0, 4).as_slice(), &[0, 1, 2, 3]);
    }

    #[test]
    fn test_element_at_bounds() {
        let seq = IntegerSequence::just(&[1, 2, 3, 4]);
        assert_eq!(seq.element_at(3), Ok(4));
        assert_eq!(
            seq.element_at(5),
            Err(HarnessError::IndexOutOfRange { index: 5, len: 4 })
        );
    }

    #[test]
    fn test_error_display() {
        let err = HarnessError::IndexOutOfRange { index: 5, len: 4 };
        assert_eq!(err.to_string(), "index 5 out of range for sequence of length 4");
    }
}
