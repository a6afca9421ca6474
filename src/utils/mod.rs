//! Utility functions module
//! 
//! This module contains the event queue plumbing and signal handling.

pub mod dispatch;
pub mod signals;

// Re-export main functions
pub use dispatch::{event_queue, EventSender};
pub use signals::{shutdown_signal, shutdown_task};
