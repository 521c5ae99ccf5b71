//! Sources of the "current second" used for branch selection.

use chrono::{Local, Timelike};

/// Supplies the second-of-minute the harness branches on.
pub trait SecondSource: Send + Sync {
    /// A value in `0..60`.
    fn current_second(&self) -> u32;
}

/// Local wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl SecondSource for SystemClock {
    fn current_second(&self) -> u32 {
        Local::now().second()
    }
}

/// Always reports the same second.
#[derive(Debug, Clone, Copy)]
pub struct FixedSecond(pub u32);

impl SecondSource for FixedSecond {
    fn current_second(&self) -> u32 {
        self.0
    }
}
