//! eframe application shell

use chrono::Local;
use crossbeam_channel::Receiver;
use eframe::egui;
use tokio::{runtime::Handle, task::JoinHandle};
use tracing::{debug, info, warn};

use crate::{
    state::{Effect, Event, Notice, OpenNotice, TimerController, ViewModel, EXTENSION_TIERS},
    tasks::{schedule_notice, ticker_task},
    utils::{shutdown_task, EventSender},
};

pub const WINDOW_TITLE: &str = "Countdown Timer";
pub const WINDOW_SIZE: [f32; 2] = [480.0, 525.0];

const CLOCK_FONT_SIZE: f32 = 48.0;
const BUTTON_FONT_SIZE: f32 = 14.0;
const BUTTON_SIZE: [f32; 2] = [120.0, 44.0];
const BUTTON_GAP: f32 = 40.0;

const OVERLAY_HEADLINE: &str = "YOUR TIME IS OVER!";
const OVERLAY_SUBLINE: &str = "PLEASE INSERT COIN TO CONTINUE";

fn control_button(label: &str) -> egui::Button<'static> {
    egui::Button::new(egui::RichText::new(label.to_string()).size(BUTTON_FONT_SIZE))
        .min_size(egui::vec2(BUTTON_SIZE[0], BUTTON_SIZE[1]))
}

/// Paints the overlay text and returns true when Extend was pressed.
fn overlay_contents(ui: &mut egui::Ui) -> bool {
    let mut extend = false;
    ui.vertical_centered(|ui| {
        ui.add_space((ui.available_height() * 0.35).max(0.0));
        ui.label(
            egui::RichText::new(OVERLAY_HEADLINE)
                .size(CLOCK_FONT_SIZE)
                .strong()
                .color(egui::Color32::RED),
        );
        ui.label(
            egui::RichText::new(OVERLAY_SUBLINE)
                .size(CLOCK_FONT_SIZE)
                .strong()
                .color(egui::Color32::RED),
        );
        ui.add_space(40.0);
        extend = ui.add(control_button("Extend Time")).clicked();
    });
    extend
}

/// What the shell does for one reducer effect
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ShellAction {
    Repaint,
    DeferNotice(Notice),
    CloseRoot,
    /// Painted from state on the next frame; only logged.
    Trace,
}

fn shell_action(effect: &Effect) -> ShellAction {
    match effect {
        Effect::Render => ShellAction::Repaint,
        Effect::ScheduleNotice(notice) => ShellAction::DeferNotice(*notice),
        Effect::CloseWindow => ShellAction::CloseRoot,
        Effect::ShowOverlay
        | Effect::HideOverlay
        | Effect::ShowNotice(_)
        | Effect::OpenExtendMenu
        | Effect::CloseExtendMenu => ShellAction::Trace,
    }
}

/// Start the background work an effect needs, if any
fn spawn_for_effect(
    runtime: &Handle,
    sender: &EventSender,
    effect: &Effect,
) -> Option<JoinHandle<()>> {
    match shell_action(effect) {
        ShellAction::DeferNotice(notice) => Some(schedule_notice(runtime, sender.clone(), notice)),
        _ => None,
    }
}

/// eframe shell: drains the event queue, runs effects, paints every surface
pub struct CoinTimerApp {
    controller: TimerController,
    events_rx: Receiver<Event>,
    sender: EventSender,
    runtime: Handle,
    closing: bool,
}

impl CoinTimerApp {
    /// Build the app and start the ticker and signal tasks on `runtime`
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        controller: TimerController,
        events_rx: Receiver<Event>,
        sender: EventSender,
        runtime: Handle,
    ) -> Self {
        let sender = sender.with_repaint(cc.egui_ctx.clone());

        runtime.spawn(ticker_task(sender.clone()));
        runtime.spawn(shutdown_task(sender.clone()));

        info!(
            "Timer window ready, session length {}",
            controller.view().clock
        );

        Self {
            controller,
            events_rx,
            sender,
            runtime,
            closing: false,
        }
    }

    fn dispatch(&self, event: Event) {
        if let Err(e) = self.sender.send(event) {
            warn!("{}", e);
        }
    }

    fn process_events(&mut self, ctx: &egui::Context) {
        while let Ok(event) = self.events_rx.try_recv() {
            for effect in self.controller.handle(event) {
                self.apply_effect(ctx, effect);
            }
        }
    }

    fn apply_effect(&mut self, ctx: &egui::Context, effect: Effect) {
        match shell_action(&effect) {
            ShellAction::Repaint => ctx.request_repaint(),
            ShellAction::DeferNotice(_) => {
                spawn_for_effect(&self.runtime, &self.sender, &effect);
            }
            ShellAction::CloseRoot => {
                self.closing = true;
                ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            }
            ShellAction::Trace => match effect {
                Effect::ShowOverlay => info!("Showing expired overlay"),
                Effect::HideOverlay => info!("Hiding expired overlay"),
                other => debug!(effect = ?other, "ui effect"),
            },
        }
    }

    fn show_main_window(&self, ctx: &egui::Context, view: &ViewModel, pending: &mut Vec<Event>) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(100.0);
                ui.label(egui::RichText::new(&view.clock).size(CLOCK_FONT_SIZE));
                ui.add_space(60.0);
            });

            ui.horizontal(|ui| {
                let row_width = BUTTON_SIZE[0] * 2.0 + BUTTON_GAP;
                ui.add_space(((ui.available_width() - row_width) / 2.0).max(0.0));
                if ui.add(control_button("Extend Time")).clicked() {
                    pending.push(Event::OpenExtendMenu);
                }
                ui.add_space(BUTTON_GAP);
                if ui
                    .add_enabled(view.controls_enabled, control_button("Pa Sukli"))
                    .clicked()
                {
                    pending.push(Event::Reset);
                }
            });

            ui.vertical_centered(|ui| {
                ui.add_space(20.0);
                if ui
                    .add_enabled(view.controls_enabled, control_button(view.start_stop_label))
                    .clicked()
                {
                    pending.push(if self.controller.state().running {
                        Event::Stop
                    } else {
                        Event::Start
                    });
                }
            });

            if let (Some(action), Some(at)) = self.controller.last_action() {
                ui.with_layout(egui::Layout::bottom_up(egui::Align::Center), |ui| {
                    ui.small(format!(
                        "Last action: {} at {}",
                        action,
                        at.with_timezone(&Local).format("%H:%M:%S")
                    ));
                });
            }
        });
    }

    fn show_extend_menu(&self, ctx: &egui::Context, pending: &mut Vec<Event>) {
        if !self.controller.extend_menu_open() {
            return;
        }

        let mut open = true;
        egui::Window::new("Extend Time")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .open(&mut open)
            .show(ctx, |ui| {
                ui.vertical_centered(|ui| {
                    ui.label(egui::RichText::new("Select Extension:").size(BUTTON_FONT_SIZE));
                    ui.add_space(10.0);
                    for tier in EXTENSION_TIERS {
                        let button = egui::Button::new(egui::RichText::new(tier.label).size(12.0))
                            .min_size(egui::vec2(220.0, 30.0));
                        if ui.add(button).clicked() {
                            pending.push(Event::SelectTier(tier.seconds));
                        }
                        ui.add_space(5.0);
                    }
                });
            });

        if !open {
            pending.push(Event::CloseExtendMenu);
        }
    }

    fn show_notices(&self, ctx: &egui::Context, pending: &mut Vec<Event>) {
        for (index, OpenNotice { id, notice }) in self.controller.notices().iter().enumerate() {
            let offset = 100.0 + 20.0 * index as f32;
            egui::Window::new("Time Alert")
                .id(egui::Id::new(("time_alert", *id)))
                .collapsible(false)
                .resizable(false)
                .default_pos(egui::pos2(offset, offset))
                .show(ctx, |ui| {
                    ui.vertical_centered(|ui| {
                        ui.add_space(10.0);
                        ui.label(egui::RichText::new(notice.message()).size(BUTTON_FONT_SIZE));
                        ui.add_space(10.0);
                        if ui.button("OK").clicked() {
                            pending.push(Event::DismissNotification(*id));
                        }
                    });
                });
        }
    }

    fn show_overlay(&self, ctx: &egui::Context, pending: &mut Vec<Event>) {
        let builder = egui::ViewportBuilder::default()
            .with_title("Time Is Over")
            .with_fullscreen(true)
            .with_decorations(false)
            .with_window_level(egui::WindowLevel::AlwaysOnTop);

        let extend = ctx.show_viewport_immediate(
            egui::ViewportId::from_hash_of("expired_overlay"),
            builder,
            |ctx, class| {
                if matches!(class, egui::ViewportClass::Embedded) {
                    // No multi-viewport support: fall back to a window over the root.
                    let mut extend = false;
                    egui::Window::new("expired_overlay")
                        .title_bar(false)
                        .collapsible(false)
                        .resizable(false)
                        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
                        .frame(egui::Frame::new().fill(egui::Color32::BLACK))
                        .show(ctx, |ui| extend = overlay_contents(ui));
                    return extend;
                }

                if ctx.input(|i| i.viewport().close_requested()) {
                    ctx.send_viewport_cmd(egui::ViewportCommand::CancelClose);
                }

                egui::CentralPanel::default()
                    .frame(egui::Frame::new().fill(egui::Color32::BLACK))
                    .show(ctx, overlay_contents)
                    .inner
            },
        );

        if extend {
            pending.push(Event::OpenExtendMenu);
        }
    }
}

impl eframe::App for CoinTimerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.process_events(ctx);

        let view = self.controller.view();
        let mut pending = Vec::new();

        if view.overlay_visible
            && !self.closing
            && ctx.input(|i| i.viewport().close_requested())
        {
            ctx.send_viewport_cmd(egui::ViewportCommand::CancelClose);
        }

        self.show_main_window(ctx, &view, &mut pending);
        self.show_extend_menu(ctx, &mut pending);
        self.show_notices(ctx, &mut pending);
        if view.overlay_visible {
            self.show_overlay(ctx, &mut pending);
        }

        for event in pending {
            self.dispatch(event);
        }
    }
}
