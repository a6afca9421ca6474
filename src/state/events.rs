//! Reducer vocabulary: events fed into the controller and effects it asks the UI to perform

/// Heads-up popups raised while the session runs low.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    FiveMinutesLeft,
    OneMinuteLeft,
}

impl Notice {
    pub fn message(&self) -> &'static str {
        match self {
            Notice::FiveMinutesLeft => "You have 5 mins left",
            Notice::OneMinuteLeft => "You have 1 min left",
        }
    }
}

/// Everything that can happen to the timer, in the order it is queued
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// One wall-clock second elapsed.
    Tick,
    Start,
    Stop,
    /// "Pa Sukli": abort the session and restore the initial duration.
    Reset,
    OpenExtendMenu,
    CloseExtendMenu,
    /// A tier was picked from the extend menu.
    SelectTier(u64),
    /// A scheduled notice reached its delivery time.
    NoticeDue(Notice),
    DismissNotification(u64),
    Shutdown,
}

impl Event {
    /// Short name used in logs and the last-action line
    pub fn name(&self) -> &'static str {
        match self {
            Event::Tick => "tick",
            Event::Start => "start",
            Event::Stop => "stop",
            Event::Reset => "pa-sukli",
            Event::OpenExtendMenu => "open-extend-menu",
            Event::CloseExtendMenu => "close-extend-menu",
            Event::SelectTier(_) => "extend",
            Event::NoticeDue(_) => "notice-due",
            Event::DismissNotification(_) => "dismiss-notice",
            Event::Shutdown => "shutdown",
        }
    }
}

/// Side effects the UI layer interprets after each reduction
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    Render,
    ShowOverlay,
    HideOverlay,
    /// Deliver the notice after a short delay, off the tick path.
    ScheduleNotice(Notice),
    ShowNotice(u64),
    OpenExtendMenu,
    CloseExtendMenu,
    CloseWindow,
}
