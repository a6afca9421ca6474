//! Deferred delivery of low-time notices

use std::time::Duration;
use tokio::{runtime::Handle, task::JoinHandle, time::sleep};
use tracing::{debug, warn};

use crate::{
    state::{Event, Notice},
    utils::EventSender,
};

/// Delay between the tick that raises a notice and the popup appearing.
pub const NOTICE_DELAY: Duration = Duration::from_millis(100);

/// Queue `NoticeDue` after [`NOTICE_DELAY`] without holding up the caller
pub fn schedule_notice(runtime: &Handle, sender: EventSender, notice: Notice) -> JoinHandle<()> {
    debug!(?notice, "scheduling notice");
    runtime.spawn(async move {
        sleep(NOTICE_DELAY).await;
        if let Err(e) = sender.send(Event::NoticeDue(notice)) {
            warn!("Failed to deliver notice: {}", e);
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::event_queue;

    #[tokio::test(start_paused = true)]
    async fn delivers_after_short_delay() {
        let (tx, rx) = event_queue();
        let task = schedule_notice(
            &Handle::current(),
            EventSender::new(tx.clone()),
            Notice::OneMinuteLeft,
        );

        tx.try_send(Event::Tick).unwrap();
        assert_eq!(rx.try_recv().unwrap(), Event::Tick);
        assert!(rx.try_recv().is_err());

        task.await.unwrap();
        assert_eq!(
            rx.try_recv().unwrap(),
            Event::NoticeDue(Notice::OneMinuteLeft)
        );
    }
}
