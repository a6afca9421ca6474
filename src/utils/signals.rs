//! Signal handling for graceful shutdown

use signal_hook_tokio::Signals;
use futures::stream::StreamExt;
use tracing::{info, warn};

use super::dispatch::EventSender;
use crate::state::Event;

/// Wait for shutdown signals (SIGTERM, SIGINT)
pub async fn shutdown_signal() -> Result<(), String> {
    let mut signals = Signals::new([
        signal_hook::consts::SIGTERM,
        signal_hook::consts::SIGINT,
    ])
    .map_err(|e| format!("Failed to create signal handler: {}", e))?;

    if let Some(signal) = signals.next().await {
        info!("Received signal: {}", signal);
    }
    Ok(())
}

/// Background task that turns a shutdown signal into a queued `Shutdown` event
pub async fn shutdown_task(sender: EventSender) {
    if let Err(e) = shutdown_signal().await {
        warn!("{}", e);
        return;
    }
    if let Err(e) = sender.send(Event::Shutdown) {
        warn!("Failed to queue shutdown: {}", e);
    }
}
