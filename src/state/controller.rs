//! Session controller: reduces queued events into state changes and UI effects

use chrono::{DateTime, Utc};
use tracing::{debug, info, warn};

use super::{
    events::{Effect, Event, Notice},
    tiers::tier_for_seconds,
    timer_state::{Phase, TimerState, FIVE_MINUTE_MARK, ONE_MINUTE_MARK},
    view::ViewModel,
};

/// A notice popup currently on screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpenNotice {
    pub id: u64,
    pub notice: Notice,
}

/// Owns the timer record and every piece of UI state that depends on it
#[derive(Debug)]
pub struct TimerController {
    state: TimerState,
    extend_menu_open: bool,
    notices: Vec<OpenNotice>,
    next_notice_id: u64,
    /// Last action tracking
    last_action: Option<String>,
    last_action_time: Option<DateTime<Utc>>,
}

impl TimerController {
    /// Create an idle controller holding the initial session duration
    pub fn new(initial_seconds: u64) -> Self {
        Self {
            state: TimerState::new(initial_seconds),
            extend_menu_open: false,
            notices: Vec::new(),
            next_notice_id: 1,
            last_action: None,
            last_action_time: None,
        }
    }

    pub fn state(&self) -> &TimerState {
        &self.state
    }

    pub fn phase(&self) -> Phase {
        self.state.phase()
    }

    pub fn view(&self) -> ViewModel {
        ViewModel::from_state(&self.state)
    }

    pub fn extend_menu_open(&self) -> bool {
        self.extend_menu_open
    }

    pub fn notices(&self) -> &[OpenNotice] {
        &self.notices
    }

    /// Get last action information
    pub fn last_action(&self) -> (Option<&str>, Option<DateTime<Utc>>) {
        (self.last_action.as_deref(), self.last_action_time)
    }

    /// Apply one event and return the effects the UI has to carry out
    pub fn handle(&mut self, event: Event) -> Vec<Effect> {
        let name = event.name();
        let user_action = match &event {
            Event::SelectTier(seconds) => Some(format!("extend +{}s", seconds)),
            Event::Start | Event::Stop | Event::Reset | Event::OpenExtendMenu => {
                Some(name.to_string())
            }
            _ => None,
        };

        let effects = match event {
            Event::Tick => self.tick(),
            Event::Start => self.start(),
            Event::Stop => self.stop(),
            Event::Reset => self.reset(),
            Event::OpenExtendMenu => self.open_extend_menu(),
            Event::CloseExtendMenu => self.cancel_extend_menu(),
            Event::SelectTier(seconds) => self.select_tier(seconds),
            Event::NoticeDue(notice) => self.notice_due(notice),
            Event::DismissNotification(id) => self.dismiss_notice(id),
            Event::Shutdown => {
                info!("Shutdown requested, closing timer window");
                vec![Effect::CloseWindow]
            }
        };

        if let Some(action) = user_action {
            if !effects.is_empty() {
                self.last_action = Some(action);
                self.last_action_time = Some(Utc::now());
            }
        }

        debug_assert!(!(self.state.running && self.state.expired));
        debug!(
            event = name,
            remaining = self.state.remaining_seconds,
            phase = ?self.state.phase(),
            ?effects,
            "reduced event"
        );
        effects
    }

    fn start(&mut self) -> Vec<Effect> {
        if self.state.running || self.state.expired {
            return Vec::new();
        }
        info!("Starting countdown at {}s", self.state.remaining_seconds);
        self.state.running = true;
        self.state.clear_latches();
        vec![Effect::Render]
    }

    fn stop(&mut self) -> Vec<Effect> {
        if !self.state.running {
            return Vec::new();
        }
        info!("Stopping countdown at {}s", self.state.remaining_seconds);
        self.state.running = false;
        vec![Effect::Render]
    }

    fn tick(&mut self) -> Vec<Effect> {
        let mut effects = Vec::new();
        if !self.state.running {
            return effects;
        }

        if self.state.remaining_seconds > 0 {
            self.state.remaining_seconds -= 1;
            effects.push(Effect::Render);

            if !self.state.warned_5min && self.state.remaining_seconds <= FIVE_MINUTE_MARK {
                self.state.warned_5min = true;
                info!("Five minutes left, scheduling notice");
                effects.push(Effect::ScheduleNotice(Notice::FiveMinutesLeft));
            }
            if !self.state.warned_1min && self.state.remaining_seconds <= ONE_MINUTE_MARK {
                self.state.warned_1min = true;
                info!("One minute left, scheduling notice");
                effects.push(Effect::ScheduleNotice(Notice::OneMinuteLeft));
            }
        }

        if self.state.remaining_seconds == 0 {
            if self.extend_menu_open {
                // Out of time but a tier is being picked: hold the lock.
                return effects;
            }
            self.expire(&mut effects);
        }
        effects
    }

    fn expire(&mut self, effects: &mut Vec<Effect>) {
        info!("Session time is over, locking the screen");
        self.state.running = false;
        self.state.expired = true;
        if !effects.contains(&Effect::Render) {
            effects.push(Effect::Render);
        }
        effects.push(Effect::ShowOverlay);
    }

    /// Leave the overlay and keep counting, as if the coin was already in.
    fn resume_from_expired(&mut self, effects: &mut Vec<Effect>) {
        if !self.state.expired {
            return;
        }
        info!("Leaving expired overlay, countdown resumes");
        self.state.expired = false;
        self.state.running = true;
        effects.push(Effect::HideOverlay);
        effects.push(Effect::Render);
    }

    fn open_extend_menu(&mut self) -> Vec<Effect> {
        let mut effects = Vec::new();
        self.resume_from_expired(&mut effects);
        if !self.extend_menu_open {
            self.extend_menu_open = true;
            effects.push(Effect::OpenExtendMenu);
        }
        effects
    }

    fn close_extend_menu(&mut self) -> Vec<Effect> {
        if !self.extend_menu_open {
            return Vec::new();
        }
        self.extend_menu_open = false;
        vec![Effect::CloseExtendMenu]
    }

    /// Menu closed without a tier. A session held at zero locks again.
    fn cancel_extend_menu(&mut self) -> Vec<Effect> {
        let mut effects = self.close_extend_menu();
        if !effects.is_empty() && self.state.running && self.state.remaining_seconds == 0 {
            self.expire(&mut effects);
        }
        effects
    }

    fn select_tier(&mut self, seconds: u64) -> Vec<Effect> {
        let Some(tier) = tier_for_seconds(seconds) else {
            warn!("Ignoring extension of {}s, not an offered tier", seconds);
            return Vec::new();
        };

        let mut effects = Vec::new();
        self.resume_from_expired(&mut effects);
        self.extend(tier.seconds, &mut effects);
        info!("{} coins inserted", tier.coins);
        effects.extend(self.close_extend_menu());
        effects
    }

    fn extend(&mut self, seconds: u64, effects: &mut Vec<Effect>) {
        self.state.remaining_seconds = self.state.remaining_seconds.saturating_add(seconds);
        self.state.rearm_latches();
        info!(
            "Extended session by {}s, {}s remaining",
            seconds, self.state.remaining_seconds
        );
        if !effects.contains(&Effect::Render) {
            effects.push(Effect::Render);
        }
    }

    fn reset(&mut self) -> Vec<Effect> {
        let mut effects = Vec::new();
        if self.state.expired {
            effects.push(Effect::HideOverlay);
        }
        info!("Pa Sukli: resetting session to {}s", self.state.initial_seconds);
        self.state = TimerState::new(self.state.initial_seconds);
        effects.push(Effect::Render);
        effects
    }

    fn notice_due(&mut self, notice: Notice) -> Vec<Effect> {
        let id = self.next_notice_id;
        self.next_notice_id += 1;
        self.notices.push(OpenNotice { id, notice });
        vec![Effect::ShowNotice(id), Effect::Render]
    }

    fn dismiss_notice(&mut self, id: u64) -> Vec<Effect> {
        let before = self.notices.len();
        self.notices.retain(|open| open.id != id);
        if self.notices.len() == before {
            return Vec::new();
        }
        vec![Effect::Render]
    }
}
