//! Time-dependent branch selection.
//!
//! Precedence is fixed: the even test runs first, so any second divisible by
//! six selects branch A.

use serde::Serialize;
use std::fmt;

use super::types::IntegerSequence;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Branch {
    /// `range(1, 10)`
    A,
    /// `range(0, 4)`
    B,
    /// `just(1, 2, 3, 4)`
    C,
}

impl Branch {
    pub fn select(second: u32) -> Self {
        if second % 2 == 0 {
            Branch::A
        } else if second % 3 == 0 {
            Branch::B
        } else {
            Branch::C
        }
    }

    pub fn sequence(self) -> IntegerSequence {
        match self {
            Branch::A => IntegerSequence::range(1, 10),
            Branch::B => IntegerSequence::range(0, 4),
            Branch::C => IntegerSequence::just(&[1, 2, 3, 4]),
        }
    }

    /// Tag used by the logged strategy.
    pub fn log_tag(self) -> &'static str {
        match self {
            Branch::A => "source A",
            Branch::B => "source B",
            Branch::C => "source C",
        }
    }

    /// Label used by the checkpointed strategy.
    pub fn checkpoint_label(self) -> &'static str {
        match self {
            Branch::A => "source range(1,10)",
            Branch::B => "source range(0,4)",
            Branch::C => "source just(1,2,3,4)",
        }
    }
}

impl fmt::Display for Branch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Branch::A => "A",
            Branch::B => "B",
            Branch::C => "C",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_precedence() {
        assert_eq!(Branch::select(0), Branch::A);
        assert_eq!(Branch::select(4), Branch::A);
        assert_eq!(Branch::select(6), Branch::A);
        assert_eq!(Branch::select(36), Branch::A);
        assert_eq!(Branch::select(3), Branch::B);
        assert_eq!(Branch::select(9), Branch::B);
        assert_eq!(Branch::select(57), Branch::B);
        assert_eq!(Branch::select(1), Branch::C);
        assert_eq!(Branch::select(5), Branch::C);
        assert_eq!(Branch::select(59), Branch::C);
    }

    #[test]
    fn test_sequence_lengths() {
        assert_eq!(Branch::A.sequence().len(), 10);
        assert_eq!(Branch::B.sequence().as_slice(), &[0, 1, 2, 3]);
        assert_eq!(Branch::C.sequence().as_slice(), &[1, 2, 3, 4]);
    }
}
