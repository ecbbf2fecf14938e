// SPDX-License-Identifier: MPL-2.0
//! Auto-dismiss timers.
//!
//! The manager asks a [`Scheduler`] for one [`Timer`] per notification with a
//! non-zero lifetime and cancels it as soon as the notification leaves the
//! queue, so a dismissed toast never leaves a pending callback behind.

use super::notification::ToastId;
use iced::Task;
use std::future::Future;
use std::pin::Pin;
use std::time::Duration;
use tokio::sync::{mpsc, oneshot};

/// Cancellation handle for a pending auto-dismiss.
pub trait Timer {
    /// Prevents the expiry from being delivered.
    fn cancel(self);
}

/// Source of auto-dismiss timers.
pub trait Scheduler {
    type Timer: Timer;

    /// Arms a timer that reports `id` once `after` has elapsed.
    fn schedule(&mut self, id: ToastId, after: Duration) -> Self::Timer;
}

impl Timer for () {
    fn cancel(self) {}
}

/// Scheduler that never fires.
///
/// Expiry is left to explicit [`super::Manager::expire`] calls, which keeps
/// headless uses deterministic.
#[derive(Debug, Default, Clone, Copy)]
pub struct Unscheduled;

impl Scheduler for Unscheduled {
    type Timer = ();

    fn schedule(&mut self, _id: ToastId, _after: Duration) -> Self::Timer {}
}

/// Expiry of one armed timer: the id once the lifetime has elapsed, `None`
/// when the timer was cancelled first.
type Expiry = Pin<Box<dyn Future<Output = Option<ToastId>> + Send>>;

/// Timer handed out by [`TaskScheduler`].
///
/// Cancelling, or dropping it, resolves the pending expiry to `None`.
#[derive(Debug)]
pub struct TaskTimer {
    cancel: oneshot::Sender<()>,
}

impl Timer for TaskTimer {
    fn cancel(self) {
        // The expiry may already have resolved; nothing left to stop then.
        let _ = self.cancel.send(());
    }
}

/// Scheduler backed by Iced tasks.
///
/// Each timer is a tokio sleep raced against its cancel signal. Armed
/// timers are buffered until the update loop collects them with
/// [`TaskScheduler::take`].
#[derive(Default)]
pub struct TaskScheduler {
    pending: Vec<Expiry>,
}

impl TaskScheduler {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns whether timers were armed since the last [`Self::take`].
    #[must_use]
    pub fn has_pending(&self) -> bool {
        !self.pending.is_empty()
    }

    /// Drains armed timers into one task yielding expired ids.
    ///
    /// Cancelled timers finish without producing anything.
    pub fn take(&mut self) -> Task<ToastId> {
        if self.pending.is_empty() {
            return Task::none();
        }
        Task::batch(self.take_expiries().into_iter().map(Task::future)).and_then(Task::done)
    }

    fn take_expiries(&mut self) -> Vec<Expiry> {
        std::mem::take(&mut self.pending)
    }
}

impl std::fmt::Debug for TaskScheduler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TaskScheduler")
            .field("pending", &self.pending.len())
            .finish()
    }
}

impl Scheduler for TaskScheduler {
    type Timer = TaskTimer;

    fn schedule(&mut self, id: ToastId, after: Duration) -> Self::Timer {
        let (cancel, cancelled) = oneshot::channel();
        self.pending.push(Box::pin(async move {
            tokio::select! {
                () = tokio::time::sleep(after) => Some(id),
                _ = cancelled => None,
            }
        }));
        TaskTimer { cancel }
    }
}

impl Timer for tokio::task::AbortHandle {
    fn cancel(self) {
        self.abort();
    }
}

/// Scheduler spawning plain tokio tasks.
///
/// Expired ids arrive on the receiver returned by [`TokioScheduler::new`];
/// the owner feeds them back into [`super::Manager::expire`]. Must be used
/// from within a tokio runtime.
#[derive(Debug, Clone)]
pub struct TokioScheduler {
    expired: mpsc::UnboundedSender<ToastId>,
}

impl TokioScheduler {
    #[must_use]
    pub fn new() -> (Self, mpsc::UnboundedReceiver<ToastId>) {
        let (expired, rx) = mpsc::unbounded_channel();
        (Self { expired }, rx)
    }
}

impl Scheduler for TokioScheduler {
    type Timer = tokio::task::AbortHandle;

    fn schedule(&mut self, id: ToastId, after: Duration) -> Self::Timer {
        // Deadline is fixed at enqueue time, not at the task's first poll.
        let deadline = tokio::time::Instant::now().checked_add(after);
        let expired = self.expired.clone();
        tokio::spawn(async move {
            match deadline {
                Some(deadline) => tokio::time::sleep_until(deadline).await,
                // Past the last representable instant: never expires.
                None => std::future::pending::<()>().await,
            }
            // Receiver gone means nobody tracks this queue anymore.
            let _ = expired.send(id);
        })
        .abort_handle()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::notifications::{Manager, Options};

    #[test]
    fn task_scheduler_buffers_until_taken() {
        let mut scheduler = TaskScheduler::new();
        assert!(!scheduler.has_pending());

        let _timer = scheduler.schedule(ToastId::new(), Duration::from_secs(1));
        assert!(scheduler.has_pending());

        let _task = scheduler.take();
        assert!(!scheduler.has_pending());
    }

    #[tokio::test(start_paused = true)]
    async fn task_timer_reports_id_after_lifetime() {
        let mut scheduler = TaskScheduler::new();
        let id = ToastId::new();
        let start = tokio::time::Instant::now();

        let _timer = scheduler.schedule(id, Duration::from_millis(300));

        for expiry in scheduler.take_expiries() {
            assert_eq!(expiry.await, Some(id));
        }
        assert!(start.elapsed() >= Duration::from_millis(300));
    }

    #[tokio::test(start_paused = true)]
    async fn cancelled_task_timer_never_expires() {
        let mut scheduler = TaskScheduler::new();

        let timer = scheduler.schedule(ToastId::new(), Duration::from_millis(300));
        timer.cancel();

        let start = tokio::time::Instant::now();
        let expiries = scheduler.take_expiries();
        assert_eq!(expiries.len(), 1);
        for expiry in expiries {
            assert_eq!(expiry.await, None);
        }
        // Resolved by the cancel signal, not by the sleep.
        assert!(start.elapsed() < Duration::from_millis(300));
    }

    #[tokio::test(start_paused = true)]
    async fn dismissed_toast_cancels_its_task_timer() {
        let mut manager = Manager::new(TaskScheduler::new());
        let kept = manager.info("kept", Options::default());
        let dismissed = manager.info("dismissed", Options::default());
        manager.dismiss(dismissed);

        let mut delivered = Vec::new();
        for expiry in manager.scheduler_mut().take_expiries() {
            delivered.extend(expiry.await);
        }
        assert_eq!(delivered, [kept]);
    }

    #[tokio::test(start_paused = true)]
    async fn tokio_scheduler_fires_at_deadline() {
        let (mut scheduler, mut rx) = TokioScheduler::new();
        let id = ToastId::new();
        let start = tokio::time::Instant::now();

        let _timer = scheduler.schedule(id, Duration::from_millis(250));

        assert_eq!(rx.recv().await, Some(id));
        assert!(start.elapsed() >= Duration::from_millis(250));
    }

    #[tokio::test(start_paused = true)]
    async fn cancelled_tokio_timer_never_fires() {
        let (mut scheduler, mut rx) = TokioScheduler::new();

        let timer = scheduler.schedule(ToastId::new(), Duration::from_millis(100));
        timer.cancel();

        let waited = tokio::time::timeout(Duration::from_secs(60), rx.recv()).await;
        assert!(waited.is_err(), "cancelled timer delivered an expiry");
    }

    #[tokio::test(start_paused = true)]
    async fn unbounded_lifetime_is_armed_without_panicking() {
        let (scheduler, mut rx) = TokioScheduler::new();
        let mut manager = Manager::new(scheduler);

        manager.info("forever", Options::default().duration(Duration::MAX));
        assert_eq!(manager.len(), 1);

        let year = Duration::from_secs(365 * 24 * 60 * 60);
        let waited = tokio::time::timeout(year, rx.recv()).await;
        assert!(waited.is_err(), "unbounded toast expired");
    }
}
