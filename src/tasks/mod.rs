//! Background tasks module
//! 
//! This module contains the tasks that feed the GUI event queue from the
//! tokio runtime.

pub mod ticker;
pub mod notices;

// Re-export main functions
pub use ticker::ticker_task;
pub use notices::schedule_notice;
