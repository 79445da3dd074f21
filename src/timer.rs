//! Cancellable single-shot and repeating timers.
//!
//! A timer is a tokio task that posts a [`SessionEvent`] when it fires.
//! Dropping the [`TimerHandle`] aborts the task, so replacing a stored
//! handle with a freshly armed one is the whole "cancel previous, arm new"
//! discipline.

use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant, MissedTickBehavior};

use crate::ui::events::{EventSender, SessionEvent};

/// Owning handle to a scheduled timer task.
#[derive(Debug)]
pub struct TimerHandle {
    task: JoinHandle<()>,
}

impl TimerHandle {
    /// Post `event` once after `delay`.
    ///
    /// Must be called from within a tokio runtime.
    pub fn once(delay: Duration, events: EventSender, event: SessionEvent) -> Self {
        let task = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            // Receiver gone means the session was torn down.
            let _ = events.send(event);
        });
        Self { task }
    }

    /// Post `make()` every `period`, first firing one full period from now.
    ///
    /// Late ticks are delayed rather than bunched up.
    pub fn repeating<F>(period: Duration, events: EventSender, make: F) -> Self
    where
        F: Fn() -> SessionEvent + Send + 'static,
    {
        let task = tokio::spawn(async move {
            let mut ticker = interval_at(Instant::now() + period, period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                ticker.tick().await;
                if events.send(make()).is_err() {
                    break;
                }
            }
        });
        Self { task }
    }

    /// Abort the timer. Equivalent to dropping the handle.
    pub fn cancel(self) {
        drop(self);
    }

    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }
}

impl Drop for TimerHandle {
    fn drop(&mut self) {
        self.task.abort();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::events;

    #[tokio::test(start_paused = true)]
    async fn once_fires_after_delay() {
        let (tx, mut rx) = events::channel();
        let start = Instant::now();
        let _timer = TimerHandle::once(
            Duration::from_secs(3),
            tx,
            SessionEvent::LikeExpired { generation: 7 },
        );

        let event = rx.recv().await.unwrap();
        assert!(matches!(event, SessionEvent::LikeExpired { generation: 7 }));
        assert_eq!(start.elapsed(), Duration::from_secs(3));
    }

    #[tokio::test(start_paused = true)]
    async fn cancelled_timer_never_fires() {
        let (tx, mut rx) = events::channel();
        let timer = TimerHandle::once(
            Duration::from_secs(1),
            tx.clone(),
            SessionEvent::LikeExpired { generation: 1 },
        );
        timer.cancel();

        let _later = TimerHandle::once(
            Duration::from_secs(2),
            tx,
            SessionEvent::LikeExpired { generation: 2 },
        );

        let event = rx.recv().await.unwrap();
        assert!(matches!(event, SessionEvent::LikeExpired { generation: 2 }));
    }

    #[tokio::test(start_paused = true)]
    async fn repeating_fires_every_period() {
        let (tx, mut rx) = events::channel();
        let start = Instant::now();
        let _ticker = TimerHandle::repeating(Duration::from_secs(5), tx, || {
            SessionEvent::GalleryTick { generation: 0 }
        });

        for n in 1..=3u64 {
            rx.recv().await.unwrap();
            assert_eq!(start.elapsed(), Duration::from_secs(5 * n));
        }
    }
}
