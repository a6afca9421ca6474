//! Coin Timer - A coin-operated session countdown timer
//! 
//! This library provides the session state machine, the background tasks that
//! tick it and the desktop shell that locks the screen when time runs out.

pub mod config;
pub mod state;
pub mod tasks;
pub mod ui;
pub mod utils;

// Re-export commonly used types
pub use config::Config;
pub use state::{Effect, Event, TimerController};
pub use ui::CoinTimerApp;
pub use utils::signals::shutdown_signal;
