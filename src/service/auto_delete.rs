//! Delayed deletion of short-lived bot messages.
//!
//! Every reply the panel sends is removed again after a fixed delay. Each pending
//! deletion runs as its own tokio task racing a timer against a cancellation signal, and
//! is tracked by the ID of the message it will delete. Cancelling a key, or scheduling
//! the same key again, stops the older task before it deletes anything.

use std::{
    collections::HashMap,
    future::Future,
    sync::{
        atomic::{AtomicU64, Ordering},
        Arc,
    },
    time::Duration,
};

use serenity::all::MessageId;
use tokio::sync::{oneshot, Mutex};

/// Handle to a scheduled deletion.
struct PendingDeletion {
    /// Distinguishes this schedule from a later one for the same message.
    ticket: u64,
    cancel: oneshot::Sender<()>,
}

/// Scheduler for delayed message deletions.
///
/// Cheap to clone; clones share the same pending table.
#[derive(Clone, Default)]
pub struct AutoDeleteScheduler {
    pending: Arc<Mutex<HashMap<MessageId, PendingDeletion>>>,
    next_ticket: Arc<AtomicU64>,
}

impl AutoDeleteScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Runs `deletion` after `delay` unless cancelled first.
    ///
    /// The deletion future is responsible for its own error handling; a message that is
    /// already gone must not be treated as a failure by the caller.
    ///
    /// # Arguments
    /// - `message_id` - Message the deletion targets, used as the cancellation key
    /// - `delay` - Time to wait before deleting
    /// - `deletion` - Future performing the delete call
    pub async fn schedule<F>(&self, message_id: MessageId, delay: Duration, deletion: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let (cancel_tx, cancel_rx) = oneshot::channel();
        let ticket = self.next_ticket.fetch_add(1, Ordering::Relaxed);

        let replaced = self.pending.lock().await.insert(
            message_id,
            PendingDeletion {
                ticket,
                cancel: cancel_tx,
            },
        );
        if let Some(previous) = replaced {
            let _ = previous.cancel.send(());
        }

        let pending = Arc::clone(&self.pending);
        tokio::spawn(async move {
            tokio::select! {
                _ = tokio::time::sleep(delay) => {
                    // Only the task still owning the entry may delete; a cancel or
                    // reschedule that took the lock first has already claimed it.
                    let owned = {
                        let mut pending = pending.lock().await;
                        let owned = pending
                            .get(&message_id)
                            .is_some_and(|entry| entry.ticket == ticket);
                        if owned {
                            pending.remove(&message_id);
                        }
                        owned
                    };
                    if owned {
                        deletion.await;
                    }
                }
                _ = cancel_rx => {}
            }
        });
    }

    /// Cancels the pending deletion of a message.
    ///
    /// # Returns
    /// - `true` - A deletion was pending and will not run
    /// - `false` - Nothing was pending for this message
    // The bot only schedules; cancelling is for callers that remove a message early.
    #[cfg_attr(not(test), allow(dead_code))]
    pub async fn cancel(&self, message_id: MessageId) -> bool {
        match self.pending.lock().await.remove(&message_id) {
            Some(entry) => {
                let _ = entry.cancel.send(());
                true
            }
            None => false,
        }
    }

    /// Number of deletions that have neither fired nor been cancelled.
    pub async fn pending(&self) -> usize {
        self.pending.lock().await.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::AtomicUsize;

    const DELAY: Duration = Duration::from_secs(5);

    fn counting_deletion(counter: &Arc<AtomicUsize>) -> impl Future<Output = ()> + Send + 'static {
        let counter = Arc::clone(counter);
        async move {
            counter.fetch_add(1, Ordering::SeqCst);
        }
    }

    #[tokio::test(start_paused = true)]
    async fn deletes_after_delay() {
        let scheduler = AutoDeleteScheduler::new();
        let deleted = Arc::new(AtomicUsize::new(0));

        scheduler
            .schedule(MessageId::new(1), DELAY, counting_deletion(&deleted))
            .await;
        assert_eq!(scheduler.pending().await, 1);

        tokio::time::sleep(Duration::from_secs(4)).await;
        assert_eq!(deleted.load(Ordering::SeqCst), 0);

        tokio::time::sleep(Duration::from_secs(2)).await;
        assert_eq!(deleted.load(Ordering::SeqCst), 1);
        assert_eq!(scheduler.pending().await, 0);
    }

    #[tokio::test(start_paused = true)]
    async fn cancelled_deletion_never_runs() {
        let scheduler = AutoDeleteScheduler::new();
        let deleted = Arc::new(AtomicUsize::new(0));

        scheduler
            .schedule(MessageId::new(1), DELAY, counting_deletion(&deleted))
            .await;
        assert!(scheduler.cancel(MessageId::new(1)).await);

        tokio::time::sleep(DELAY * 2).await;
        assert_eq!(deleted.load(Ordering::SeqCst), 0);
        assert_eq!(scheduler.pending().await, 0);
    }

    #[tokio::test(start_paused = true)]
    async fn cancel_of_unknown_message_reports_false() {
        let scheduler = AutoDeleteScheduler::new();
        assert!(!scheduler.cancel(MessageId::new(42)).await);
    }

    #[tokio::test(start_paused = true)]
    async fn rescheduling_replaces_previous_deletion() {
        let scheduler = AutoDeleteScheduler::new();
        let first = Arc::new(AtomicUsize::new(0));
        let second = Arc::new(AtomicUsize::new(0));

        scheduler
            .schedule(MessageId::new(1), DELAY, counting_deletion(&first))
            .await;
        scheduler
            .schedule(MessageId::new(1), DELAY * 2, counting_deletion(&second))
            .await;
        assert_eq!(scheduler.pending().await, 1);

        tokio::time::sleep(DELAY * 3).await;
        assert_eq!(first.load(Ordering::SeqCst), 0);
        assert_eq!(second.load(Ordering::SeqCst), 1);
        assert_eq!(scheduler.pending().await, 0);
    }

    #[tokio::test(start_paused = true)]
    async fn independent_messages_are_tracked_separately() {
        let scheduler = AutoDeleteScheduler::new();
        let deleted = Arc::new(AtomicUsize::new(0));

        scheduler
            .schedule(MessageId::new(1), DELAY, counting_deletion(&deleted))
            .await;
        scheduler
            .schedule(MessageId::new(2), DELAY, counting_deletion(&deleted))
            .await;
        assert!(scheduler.cancel(MessageId::new(1)).await);

        tokio::time::sleep(DELAY * 2).await;
        assert_eq!(deleted.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn cancel_racing_the_timer_wins() {
        let scheduler = AutoDeleteScheduler::new();
        let deleted = Arc::new(AtomicUsize::new(0));

        scheduler
            .schedule(MessageId::new(1), DELAY, counting_deletion(&deleted))
            .await;

        // Hold the table while the timer fires so the task queues behind the lock,
        // then cancel the way `cancel` does.
        let mut table = scheduler.pending.lock().await;
        tokio::time::sleep(DELAY * 2).await;
        let entry = table.remove(&MessageId::new(1)).unwrap();
        let _ = entry.cancel.send(());
        drop(table);

        tokio::time::sleep(DELAY).await;
        assert_eq!(deleted.load(Ordering::SeqCst), 0);
        assert_eq!(scheduler.pending().await, 0);
    }

    #[tokio::test(start_paused = true)]
    async fn reschedule_racing_the_timer_runs_only_the_newer_deletion() {
        let scheduler = AutoDeleteScheduler::new();
        let first = Arc::new(AtomicUsize::new(0));

        scheduler
            .schedule(MessageId::new(1), DELAY, counting_deletion(&first))
            .await;

        // Replace the entry while the first timer has fired but is waiting on the lock.
        let (replacement, _replacement_rx) = oneshot::channel();
        let mut table = scheduler.pending.lock().await;
        tokio::time::sleep(DELAY * 2).await;
        if let Some(previous) = table.insert(
            MessageId::new(1),
            PendingDeletion {
                ticket: u64::MAX,
                cancel: replacement,
            },
        ) {
            let _ = previous.cancel.send(());
        }
        drop(table);

        tokio::time::sleep(DELAY).await;
        assert_eq!(first.load(Ordering::SeqCst), 0);
        assert_eq!(scheduler.pending().await, 1);
    }
}
