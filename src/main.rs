//! Coin Timer - A coin-operated session countdown timer
//! 
//! This is the main entry point for the coin-timer application.

use anyhow::Context as _;
use eframe::egui;
use tracing::info;

use coin_timer::{
    config::Config,
    state::TimerController,
    ui::{CoinTimerApp, WINDOW_SIZE, WINDOW_TITLE},
    utils::{event_queue, EventSender},
};

fn main() -> anyhow::Result<()> {
    let config = Config::parse();

    // Initialize tracing with appropriate log level
    tracing_subscriber::fmt()
        .with_env_filter(config.log_filter())
        .init();

    info!("Starting coin-timer v1.0.0");
    info!("Configuration: duration={}s", config.duration);

    // Background tasks (ticker, deferred notices, signals) run here
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(1)
        .thread_name("coin-timer-tasks")
        .enable_all()
        .build()
        .context("failed to build background runtime")?;

    let (events_tx, events_rx) = event_queue();
    let sender = EventSender::new(events_tx);
    let controller = TimerController::new(config.duration);
    let handle = runtime.handle().clone();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(WINDOW_TITLE)
            .with_inner_size(WINDOW_SIZE)
            .with_resizable(false),
        ..Default::default()
    };

    eframe::run_native(
        WINDOW_TITLE,
        options,
        Box::new(move |cc| {
            Ok(Box::new(CoinTimerApp::new(
                cc, controller, events_rx, sender, handle,
            )))
        }),
    )
    .map_err(|e| anyhow::anyhow!("display surface unavailable: {}", e))?;

    runtime.shutdown_background();
    info!("Timer shutdown complete");
    Ok(())
}
