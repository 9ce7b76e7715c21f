//! Deferred re-evaluation of rapidly changing inputs.
//!
//! Each trigger schedules its action after a fixed quiescence delay and
//! cancels whatever was pending, so only the last edit in a burst fires.

use std::future::Future;
use std::time::Duration;

use tokio::task::JoinHandle;

/// Quiescence delay applied to free-text and filter edits.
pub const DEBOUNCE_DELAY: Duration = Duration::from_millis(500);

/// Replace-on-new-input deferred trigger.
#[derive(Debug)]
pub struct Debouncer {
    delay: Duration,
    pending: Option<JoinHandle<()>>,
}

impl Debouncer {
    pub fn new(delay: Duration) -> Self {
        Debouncer {
            delay,
            pending: None,
        }
    }

    /// Schedule `action` after the quiescence delay, aborting any
    /// previously scheduled action first. Must be called from within a
    /// tokio runtime.
    pub fn trigger<F>(&mut self, action: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        self.cancel();
        let delay = self.delay;
        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            action.await;
        }));
    }

    /// Abort the pending action, if any.
    pub fn cancel(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }
}

impl Drop for Debouncer {
    fn drop(&mut self) {
        self.cancel();
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    use super::*;

    #[tokio::test(start_paused = true)]
    async fn only_the_last_trigger_fires() {
        let fired = Arc::new(AtomicUsize::new(0));
        let (tx, mut rx) = tokio::sync::mpsc::unbounded_channel();
        let mut debouncer = Debouncer::new(Duration::from_millis(500));

        for id in 1..=3u32 {
            let fired = fired.clone();
            let tx = tx.clone();
            debouncer.trigger(async move {
                fired.fetch_add(1, Ordering::SeqCst);
                let _ = tx.send(id);
            });
        }

        let winner = rx.recv().await.unwrap();
        assert_eq!(winner, 3);

        tokio::time::sleep(Duration::from_millis(1500)).await;
        assert_eq!(fired.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn cancel_prevents_the_action() {
        let fired = Arc::new(AtomicUsize::new(0));
        let mut debouncer = Debouncer::new(Duration::from_millis(500));

        {
            let fired = fired.clone();
            debouncer.trigger(async move {
                fired.fetch_add(1, Ordering::SeqCst);
            });
        }
        debouncer.cancel();

        tokio::time::sleep(Duration::from_millis(1500)).await;
        assert_eq!(fired.load(Ordering::SeqCst), 0);
    }
}
