// Server loop module
// Accepts connections until shutdown, then drains open connections

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;

use super::connection::accept_connection;
use super::signal::SignalHandler;
use crate::config::AppState;
use crate::logger;

const DRAIN_POLL_INTERVAL: Duration = Duration::from_millis(25);

/// Run the accept loop on `listener` until `signals` requests shutdown.
///
/// Must run inside a `tokio::task::LocalSet`: connections are spawned with
/// `spawn_local`. Returns once every connection has closed or
/// `performance.shutdown_timeout` has elapsed.
pub async fn serve(
    listener: TcpListener,
    state: Arc<AppState>,
    signals: Arc<SignalHandler>,
) -> Result<(), Box<dyn std::error::Error>> {
    let active_connections = Arc::new(AtomicUsize::new(0));

    loop {
        tokio::select! {
            accept_result = listener.accept() => {
                match accept_result {
                    Ok((stream, peer_addr)) => {
                        accept_connection(
                            stream,
                            peer_addr,
                            &state,
                            &active_connections,
                            &signals.drain,
                        );
                    }
                    Err(e) => {
                        logger::log_error(&format!("Failed to accept connection: {e}"));
                    }
                }
            }

            () = signals.shutdown.notified() => break,
        }
    }

    drop(listener);
    signals.drain.notify_waiters();

    let timeout = Duration::from_secs(state.config.performance.shutdown_timeout);
    let remaining = wait_for_drain(&active_connections, &signals, timeout).await;
    logger::log_shutdown_complete(remaining);

    Ok(())
}

/// Wait until no connections remain or `timeout` elapses; returns the count still open
async fn wait_for_drain(
    active_connections: &AtomicUsize,
    signals: &SignalHandler,
    timeout: Duration,
) -> usize {
    let deadline = tokio::time::Instant::now() + timeout;

    loop {
        let open = active_connections.load(Ordering::SeqCst);
        if open == 0 || tokio::time::Instant::now() >= deadline {
            return open;
        }
        // Connections accepted just before shutdown may not have been waiting yet
        signals.drain.notify_waiters();
        tokio::time::sleep(DRAIN_POLL_INTERVAL).await;
    }
}
