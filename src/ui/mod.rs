//! UI layer: the eframe shell that paints the timer, menus, notices and overlay.

pub mod app;

pub use app::{CoinTimerApp, WINDOW_SIZE, WINDOW_TITLE};
