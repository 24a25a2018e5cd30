// Signal handling module
//
// Supported signals:
// - SIGTERM: Graceful shutdown
// - SIGINT:  Graceful shutdown (Ctrl+C)
// Other platforms only get Ctrl+C.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::sync::Notify;

use crate::logger;

/// Shutdown coordination shared by the accept loop and its connections
pub struct SignalHandler {
    /// Wakes the accept loop (single consumer, permit is kept if nobody waits yet)
    pub shutdown: Arc<Notify>,
    /// Tells open connections to finish their current request and close
    pub drain: Arc<Notify>,
    /// Whether shutdown has been requested
    pub shutdown_requested: Arc<AtomicBool>,
}

impl SignalHandler {
    pub fn new() -> Self {
        Self {
            shutdown: Arc::new(Notify::new()),
            drain: Arc::new(Notify::new()),
            shutdown_requested: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Ask the server to stop accepting and drain
    pub fn request_shutdown(&self, reason: &str) {
        if self.shutdown_requested.swap(true, Ordering::SeqCst) {
            return;
        }
        logger::log_shutdown_requested(reason);
        self.shutdown.notify_one();
    }

    pub fn is_shutdown_requested(&self) -> bool {
        self.shutdown_requested.load(Ordering::SeqCst)
    }
}

impl Default for SignalHandler {
    fn default() -> Self {
        Self::new()
    }
}

/// Start signal handlers (Unix)
///
/// Spawns a background task that turns SIGTERM/SIGINT into a shutdown request.
/// If the handlers cannot be registered the server falls back to Ctrl+C only.
#[cfg(unix)]
pub fn start_signal_handler(handler: Arc<SignalHandler>) {
    use tokio::signal::unix::{signal, SignalKind};

    tokio::spawn(async move {
        let (mut sigterm, mut sigint) =
            match (signal(SignalKind::terminate()), signal(SignalKind::interrupt())) {
                (Ok(term), Ok(int)) => (term, int),
                (Err(e), _) | (_, Err(e)) => {
                    logger::log_warning(&format!(
                        "Failed to register signal handlers ({e}), falling back to Ctrl+C"
                    ));
                    if tokio::signal::ctrl_c().await.is_ok() {
                        handler.request_shutdown("Ctrl+C");
                    }
                    return;
                }
            };

        logger::log_debug(&format!(
            "[SIGNAL] Handlers registered for SIGTERM and SIGINT (pid {})",
            std::process::id()
        ));

        tokio::select! {
            _ = sigterm.recv() => handler.request_shutdown("SIGTERM"),
            _ = sigint.recv() => handler.request_shutdown("SIGINT"),
        }
    });
}

/// Non-Unix fallback - only handles Ctrl+C
#[cfg(not(unix))]
pub fn start_signal_handler(handler: Arc<SignalHandler>) {
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            handler.request_shutdown("Ctrl+C");
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[tokio::test]
    async fn test_request_before_wait_is_not_lost() {
        let handler = SignalHandler::new();
        handler.request_shutdown("test");
        assert!(handler.is_shutdown_requested());

        tokio::time::timeout(Duration::from_secs(1), handler.shutdown.notified())
            .await
            .expect("shutdown permit should be stored");
    }

    #[test]
    fn test_repeated_requests_are_ignored() {
        let handler = SignalHandler::default();
        handler.request_shutdown("first");
        handler.request_shutdown("second");
        assert!(handler.is_shutdown_requested());
    }
}
