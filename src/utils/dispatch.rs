//! Event queue feeding the GUI dispatch loop

use crossbeam_channel::{bounded, Receiver, Sender, TrySendError};
use tracing::debug;

use crate::state::Event;

/// Capacity of the UI event queue.
pub const EVENT_QUEUE_CAPACITY: usize = 256;

/// Create the queue shared by the UI, the ticker and deferred notices
pub fn event_queue() -> (Sender<Event>, Receiver<Event>) {
    bounded(EVENT_QUEUE_CAPACITY)
}

/// Cloneable handle that queues an event and wakes the GUI to drain it
#[derive(Clone)]
pub struct EventSender {
    tx: Sender<Event>,
    repaint: Option<egui::Context>,
}

impl EventSender {
    pub fn new(tx: Sender<Event>) -> Self {
        Self { tx, repaint: None }
    }

    /// Attach the egui context so every send requests a repaint
    pub fn with_repaint(mut self, ctx: egui::Context) -> Self {
        self.repaint = Some(ctx);
        self
    }

    pub fn send(&self, event: Event) -> Result<(), String> {
        let name = event.name();
        match self.tx.try_send(event) {
            Ok(()) => debug!(event = name, "queued event"),
            Err(TrySendError::Full(_)) => {
                return Err(format!("UI event queue is full, dropped {}", name));
            }
            Err(TrySendError::Disconnected(_)) => {
                return Err(format!("UI event queue disconnected, dropped {}", name));
            }
        }

        if let Some(ctx) = &self.repaint {
            ctx.request_repaint();
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn events_arrive_in_submission_order() {
        let (tx, rx) = event_queue();
        let sender = EventSender::new(tx);
        sender.send(Event::Start).unwrap();
        sender.send(Event::Tick).unwrap();
        sender.send(Event::Reset).unwrap();

        let drained: Vec<Event> = rx.try_iter().collect();
        assert_eq!(drained, vec![Event::Start, Event::Tick, Event::Reset]);
    }

    #[test]
    fn reports_disconnected_queue() {
        let (tx, rx) = event_queue();
        drop(rx);
        let err = EventSender::new(tx).send(Event::Tick).unwrap_err();
        assert!(err.contains("disconnected"));
    }

    #[test]
    fn reports_full_queue() {
        let (tx, _rx) = bounded(1);
        let sender = EventSender::new(tx);
        sender.send(Event::Tick).unwrap();
        let err = sender.send(Event::Tick).unwrap_err();
        assert!(err.contains("full"));
    }
}
