//! Pure projection of the timer state onto what the surfaces show

use super::TimerState;

/// Everything the UI needs to paint one frame
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewModel {
    pub clock: String,
    pub start_stop_label: &'static str,
    pub controls_enabled: bool,
    pub overlay_visible: bool,
}

impl ViewModel {
    pub fn from_state(state: &TimerState) -> Self {
        Self {
            clock: format_clock(state.remaining_seconds),
            start_stop_label: if state.running { "Stop" } else { "Start" },
            controls_enabled: state.controls_enabled(),
            overlay_visible: state.overlay_visible(),
        }
    }
}

/// Format remaining seconds as `MM:SS`, switching to `H:MM:SS` from 100 minutes up
pub fn format_clock(total_seconds: u64) -> String {
    let minutes = total_seconds / 60;
    let seconds = total_seconds % 60;

    if minutes >= 100 {
        let hours = minutes / 60;
        format!("{}:{:02}:{:02}", hours, minutes % 60, seconds)
    } else {
        format!("{:02}:{:02}", minutes, seconds)
    }
}
