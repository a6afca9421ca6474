//! Once-a-second tick source for the countdown

use std::time::Duration;
use tokio::time::{interval_at, Instant, MissedTickBehavior};
use tracing::{info, warn};

use crate::{state::Event, utils::EventSender};

/// Period between two `Tick` events.
pub const TICK_PERIOD: Duration = Duration::from_secs(1);

/// Background task that queues one `Tick` per period for the life of the process.
///
/// The tick source never pauses with the session: the reducer ignores ticks
/// while idle or expired. Late wake-ups skip missed periods instead of bursting,
/// so at most one tick is ever owed to the queue.
pub async fn ticker_task(sender: EventSender) {
    info!("Starting countdown ticker");

    let mut interval = interval_at(Instant::now() + TICK_PERIOD, TICK_PERIOD);
    interval.set_missed_tick_behavior(MissedTickBehavior::Skip);

    loop {
        interval.tick().await;
        if let Err(e) = sender.send(Event::Tick) {
            warn!("Failed to queue tick: {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::event_queue;

    #[tokio::test(start_paused = true)]
    async fn sends_one_tick_per_second() {
        let (tx, rx) = event_queue();
        let handle = tokio::spawn(ticker_task(EventSender::new(tx)));

        tokio::time::sleep(Duration::from_millis(500)).await;
        assert_eq!(rx.try_iter().count(), 0);

        tokio::time::sleep(Duration::from_secs(3)).await;
        let ticks: Vec<Event> = rx.try_iter().collect();
        assert_eq!(ticks, vec![Event::Tick, Event::Tick, Event::Tick]);

        handle.abort();
    }

    #[tokio::test(start_paused = true)]
    async fn keeps_ticking_after_queue_errors() {
        let (tx, rx) = crossbeam_channel::bounded(1);
        let handle = tokio::spawn(ticker_task(EventSender::new(tx)));

        tokio::time::sleep(Duration::from_millis(2500)).await;
        assert_eq!(rx.try_iter().count(), 1);

        tokio::time::sleep(Duration::from_secs(1)).await;
        assert_eq!(rx.try_iter().count(), 1);

        handle.abort();
    }
}
