use std::time::Duration;

use tokio::sync::mpsc::UnboundedSender;
use tracing::debug;

use crate::event::AppEvent;
use crate::reminder::Notice;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Toast {
    pub notice: Notice,
    pub id: u64,
}

/// Single-slot notice display. A newer notice replaces the current one, and
/// each notice hides itself after `duration` via a detached timer task.
pub struct Toaster {
    current: Option<Toast>,
    next_id: u64,
    duration: Duration,
    tx: UnboundedSender<AppEvent>,
}

impl Toaster {
    pub fn new(tx: UnboundedSender<AppEvent>, duration: Duration) -> Self {
        Self {
            current: None,
            next_id: 0,
            duration,
            tx,
        }
    }

    pub fn current(&self) -> Option<&Toast> {
        self.current.as_ref()
    }

    /// Must be called from within a tokio runtime.
    pub fn show(&mut self, notice: Notice) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.current = Some(Toast { notice, id });
        debug!(id, message = notice.message(), "notice shown");

        let tx = self.tx.clone();
        let duration = self.duration;
        tokio::spawn(async move {
            tokio::time::sleep(duration).await;
            // The loop may already be gone on quit.
            let _ = tx.send(AppEvent::NoticeExpired(id));
        });
        id
    }

    /// Hides the notice if `id` is still the one on screen.
    pub fn expire(&mut self, id: u64) {
        if self.current.is_some_and(|t| t.id == id) {
            debug!(id, "notice expired");
            self.current = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use tokio::sync::mpsc;

    use super::*;

    const DURATION: Duration = Duration::from_millis(4000);

    #[tokio::test(start_paused = true)]
    async fn notice_expires_after_duration() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut toaster = Toaster::new(tx, DURATION);

        let id = toaster.show(Notice::ReminderSet);
        assert_eq!(toaster.current().map(|t| t.notice), Some(Notice::ReminderSet));

        let event = rx.recv().await;
        assert_eq!(event, Some(AppEvent::NoticeExpired(id)));
        toaster.expire(id);
        assert!(toaster.current().is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn nothing_arrives_before_duration() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut toaster = Toaster::new(tx, DURATION);
        toaster.show(Notice::ReminderCleared);

        let early = tokio::time::timeout(DURATION / 2, rx.recv()).await;
        assert!(early.is_err());
        assert!(toaster.current().is_some());
    }

    #[tokio::test(start_paused = true)]
    async fn stale_timer_keeps_newer_notice() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut toaster = Toaster::new(tx, DURATION);

        let first = toaster.show(Notice::ReminderSet);
        tokio::time::sleep(DURATION / 2).await;
        let second = toaster.show(Notice::ReminderCleared);

        assert_eq!(rx.recv().await, Some(AppEvent::NoticeExpired(first)));
        toaster.expire(first);
        assert_eq!(
            toaster.current().map(|t| t.notice),
            Some(Notice::ReminderCleared)
        );

        assert_eq!(rx.recv().await, Some(AppEvent::NoticeExpired(second)));
        toaster.expire(second);
        assert!(toaster.current().is_none());
    }
}
