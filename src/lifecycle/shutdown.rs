//! Shutdown coordination.

use tokio::sync::broadcast;

/// Broadcasts a stop request to every running server.
///
/// Tests use it to stop a server they spawned; the binary relies on Ctrl+C.
#[derive(Debug, Clone)]
pub struct Shutdown {
    tx: broadcast::Sender<()>,
}

impl Shutdown {
    pub fn new() -> Self {
        let (tx, _) = broadcast::channel(1);
        Self { tx }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<()> {
        self.tx.subscribe()
    }

    /// Ask every subscriber to stop. Returns how many were listening.
    pub fn trigger(&self) -> usize {
        self.tx.send(()).unwrap_or(0)
    }
}

impl Default for Shutdown {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_trigger_reaches_subscribers() {
        let shutdown = Shutdown::new();
        assert_eq!(shutdown.trigger(), 0);

        let mut rx = shutdown.subscribe();
        assert_eq!(shutdown.trigger(), 1);
        assert!(rx.recv().await.is_ok());
    }
}
