//! State management module
//! 
//! This module contains the timer record, the reducer that drives it and the
//! pure projection the UI paints from.

pub mod timer_state;
pub mod events;
pub mod tiers;
pub mod view;
pub mod controller;

// Re-export main types
pub use timer_state::{Phase, TimerState};
pub use events::{Effect, Event, Notice};
pub use tiers::{ExtensionTier, EXTENSION_TIERS};
pub use view::{format_clock, ViewModel};
pub use controller::{OpenNotice, TimerController};
