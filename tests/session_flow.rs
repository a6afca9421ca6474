use coin_timer::state::{Effect, Event, Notice, Phase, TimerController, EXTENSION_TIERS};

fn tick(controller: &mut TimerController, times: usize) -> Vec<Effect> {
    let mut effects = Vec::new();
    for _ in 0..times {
        effects.extend(controller.handle(Event::Tick));
    }
    effects
}

fn count_scheduled(effects: &[Effect], notice: Notice) -> usize {
    effects
        .iter()
        .filter(|effect| **effect == Effect::ScheduleNotice(notice))
        .count()
}

#[test]
fn sixty_five_second_session_expires_and_resumes_on_first_tier() {
    let mut controller = TimerController::new(65);
    controller.handle(Event::Start);

    let mut effects = tick(&mut controller, 5);
    assert_eq!(controller.view().clock, "01:00");
    assert_eq!(count_scheduled(&effects, Notice::OneMinuteLeft), 1);
    assert!(controller.state().warned_1min);

    effects.extend(tick(&mut controller, 60));
    assert_eq!(controller.phase(), Phase::Expired);
    assert!(controller.view().overlay_visible);
    assert!(!controller.view().controls_enabled);
    assert_eq!(count_scheduled(&effects, Notice::OneMinuteLeft), 1);
    assert_eq!(count_scheduled(&effects, Notice::FiveMinutesLeft), 1);
    assert_eq!(
        effects.iter().filter(|e| **e == Effect::ShowOverlay).count(),
        1
    );

    let menu = controller.handle(Event::OpenExtendMenu);
    assert!(menu.contains(&Effect::HideOverlay));
    assert_eq!(controller.phase(), Phase::Running);

    let first_tier = EXTENSION_TIERS[0];
    assert_eq!(first_tier.seconds, 1500);
    controller.handle(Event::SelectTier(first_tier.seconds));

    assert_eq!(controller.phase(), Phase::Running);
    assert_eq!(controller.state().remaining_seconds, 1500);
    assert_eq!(controller.view().clock, "25:00");
    assert_eq!(controller.view().start_stop_label, "Stop");
    assert!(controller.view().controls_enabled);
    assert!(!controller.extend_menu_open());
}

#[test]
fn reset_on_fresh_session_stays_idle_at_initial_duration() {
    let mut controller = TimerController::new(1500);
    controller.handle(Event::Reset);

    assert_eq!(controller.phase(), Phase::Idle);
    assert_eq!(controller.state().remaining_seconds, 1500);
    assert_eq!(controller.view().clock, "25:00");
}

#[test]
fn stopped_session_ignores_ticks_and_resumes_where_it_left() {
    let mut controller = TimerController::new(1500);
    controller.handle(Event::Start);
    tick(&mut controller, 10);
    controller.handle(Event::Stop);

    assert!(tick(&mut controller, 30).is_empty());
    assert_eq!(controller.view().clock, "24:50");

    controller.handle(Event::Start);
    tick(&mut controller, 1);
    assert_eq!(controller.view().clock, "24:49");
}

#[test]
fn notices_queue_behind_ticks_without_pausing_them() {
    let mut controller = TimerController::new(302);
    controller.handle(Event::Start);

    let mut due = Vec::new();
    for _ in 0..4 {
        for effect in controller.handle(Event::Tick) {
            if let Effect::ScheduleNotice(notice) = effect {
                due.push(notice);
            }
        }
    }
    assert_eq!(due, vec![Notice::FiveMinutesLeft]);

    controller.handle(Event::NoticeDue(Notice::FiveMinutesLeft));
    tick(&mut controller, 2);
    assert_eq!(controller.state().remaining_seconds, 296);
    assert_eq!(controller.notices().len(), 1);

    let id = controller.notices()[0].id;
    controller.handle(Event::DismissNotification(id));
    assert!(controller.notices().is_empty());
}

#[test]
fn largest_tier_switches_clock_to_hours() {
    let mut controller = TimerController::new(0);
    controller.handle(Event::OpenExtendMenu);
    controller.handle(Event::SelectTier(EXTENSION_TIERS[3].seconds));
    assert_eq!(controller.view().clock, "1:40:00");
}
