//! Timer state structure and management

/// Remaining time at which the five minute notice fires.
pub const FIVE_MINUTE_MARK: u64 = 5 * 60;
/// Remaining time at which the one minute notice fires.
pub const ONE_MINUTE_MARK: u64 = 60;

/// Session lifecycle, derived from the [`TimerState`] flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Running,
    Expired,
}

/// Timer state for one usage session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimerState {
    pub remaining_seconds: u64,
    pub initial_seconds: u64,
    pub running: bool,
    pub warned_5min: bool,
    pub warned_1min: bool,
    /// Session hit zero and waits for an extension. Shown as the overlay.
    pub expired: bool,
}

impl TimerState {
    /// Create an idle timer loaded with the initial duration
    pub fn new(initial_seconds: u64) -> Self {
        Self {
            remaining_seconds: initial_seconds,
            initial_seconds,
            running: false,
            warned_5min: false,
            warned_1min: false,
            expired: false,
        }
    }

    pub fn phase(&self) -> Phase {
        if self.expired {
            Phase::Expired
        } else if self.running {
            Phase::Running
        } else {
            Phase::Idle
        }
    }

    /// Controls are inert exactly while the overlay is up.
    pub fn controls_enabled(&self) -> bool {
        !self.expired
    }

    pub fn overlay_visible(&self) -> bool {
        self.expired
    }

    /// Drop the latches whose threshold the remaining time is back above.
    pub fn rearm_latches(&mut self) {
        if self.remaining_seconds > FIVE_MINUTE_MARK {
            self.warned_5min = false;
        }
        if self.remaining_seconds > ONE_MINUTE_MARK {
            self.warned_1min = false;
        }
    }

    pub fn clear_latches(&mut self) {
        self.warned_5min = false;
        self.warned_1min = false;
    }
}
