//! Operator debug mode.
//!
//! While enabled on a thread, every [`Flow`](super::Flow) operator assembled
//! on that thread records its call site. Capturing sites for every operator is
//! the overhead this mode trades for a readable failure trace.
//!
//! The flag is thread-local. A `Flow` assembled on a worker thread only sees
//! debug mode if the guard was acquired on that worker.

use std::cell::Cell;
use std::marker::PhantomData;

thread_local! {
    static OPERATOR_DEBUG: Cell<usize> = const { Cell::new(0) };
}

/// Entry point for operator debug mode.
pub struct OperatorDebug;

impl OperatorDebug {
    /// Enable debug mode on the current thread until the guard is dropped.
    ///
    /// Guards nest: the flag stays on until the outermost guard is released.
    pub fn enable() -> OperatorDebugGuard {
        OPERATOR_DEBUG.with(|depth| depth.set(depth.get() + 1));
        tracing::debug!("operator debug mode enabled");
        OperatorDebugGuard { _not_send: PhantomData }
    }

    /// Whether debug mode is active on the current thread.
    pub fn is_enabled() -> bool {
        OPERATOR_DEBUG.with(|depth| depth.get() > 0)
    }
}

/// Keeps operator debug mode on for the current thread.
///
/// Not `Send`: releasing it on another thread would reset the wrong flag.
#[must_use = "debug mode is disabled as soon as the guard is dropped"]
pub struct OperatorDebugGuard {
    _not_send: PhantomData<*const ()>,
}

impl Drop for OperatorDebugGuard {
    fn drop(&mut self) {
        OPERATOR_DEBUG.with(|depth| depth.set(depth.get().saturating_sub(1)));
        if !OperatorDebug::is_enabled() {
            tracing::debug!("operator debug mode reset");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_guard_scopes_flag() {
        assert!(!OperatorDebug::is_enabled());
        {
            let _guard = OperatorDebug::enable();
            assert!(OperatorDebug::is_enabled());
        }
        assert!(!OperatorDebug::is_enabled());
    }

    #[test]
    fn test_nested_guards() {
        let outer = OperatorDebug::enable();
        let inner = OperatorDebug::enable();
        drop(inner);
        assert!(OperatorDebug::is_enabled());
        drop(outer);
        assert!(!OperatorDebug::is_enabled());
    }

    #[test]
    fn test_reset_after_panic() {
        let result = std::panic::catch_unwind(|| {
            let _guard = OperatorDebug::enable();
            panic!("boom");
        });
        assert!(result.is_err());
        assert!(!OperatorDebug::is_enabled());
    }

    #[test]
    fn test_flag_is_thread_local() {
        let _guard = OperatorDebug::enable();
        let seen = std::thread::spawn(OperatorDebug::is_enabled).join().unwrap();
        assert!(!seen);
    }
}
