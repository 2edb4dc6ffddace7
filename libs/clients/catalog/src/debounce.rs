use std::future::Future;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::task::JoinHandle;

/// Delay between the last keystroke and the search request.
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(300);

/// Runs only the most recently scheduled action, once `window` has passed
/// without another one being scheduled.
///
/// Once an action's timer fires it is detached: later `schedule` or `cancel`
/// calls no longer affect it.
#[derive(Clone)]
pub struct Debouncer {
    inner: Arc<Inner>,
}

struct Inner {
    window: Duration,
    pending: Mutex<Pending>,
}

#[derive(Default)]
struct Pending {
    seq: u64,
    timer: Option<JoinHandle<()>>,
}

impl Debouncer {
    pub fn new(window: Duration) -> Self {
        Self {
            inner: Arc::new(Inner {
                window,
                pending: Mutex::new(Pending::default()),
            }),
        }
    }

    pub fn window(&self) -> Duration {
        self.inner.window
    }

    /// Replaces any pending action with `action`, restarting the window.
    pub fn schedule<F>(&self, action: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let Ok(mut pending) = self.inner.pending.lock() else {
            return;
        };

        pending.seq += 1;
        let seq = pending.seq;
        if let Some(timer) = pending.timer.take() {
            timer.abort();
        }

        let inner = Arc::clone(&self.inner);
        pending.timer = Some(tokio::spawn(async move {
            tokio::time::sleep(inner.window).await;

            {
                let Ok(mut pending) = inner.pending.lock() else {
                    return;
                };
                if pending.seq != seq {
                    return;
                }
                pending.timer = None;
            }

            action.await;
        }));
    }

    /// Drops the pending action, if any.
    pub fn cancel(&self) {
        if let Ok(mut pending) = self.inner.pending.lock() {
            pending.seq += 1;
            if let Some(timer) = pending.timer.take() {
                timer.abort();
            }
        }
    }

    pub fn is_pending(&self) -> bool {
        self.inner
            .pending
            .lock()
            .map(|pending| pending.timer.is_some())
            .unwrap_or(false)
    }
}

impl Default for Debouncer {
    fn default() -> Self {
        Self::new(DEFAULT_DEBOUNCE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn counter_action(counter: &Arc<AtomicUsize>, value: usize) -> impl Future<Output = ()> + Send + 'static {
        let counter = counter.clone();
        async move {
            counter.store(value, Ordering::SeqCst);
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_only_last_action_runs() {
        let debouncer = Debouncer::default();
        let last = Arc::new(AtomicUsize::new(0));

        debouncer.schedule(counter_action(&last, 1));
        tokio::time::sleep(Duration::from_millis(100)).await;
        debouncer.schedule(counter_action(&last, 2));
        assert!(debouncer.is_pending());

        // 350ms after the first schedule, but only 250ms after the second.
        tokio::time::sleep(Duration::from_millis(250)).await;
        assert_eq!(last.load(Ordering::SeqCst), 0);

        tokio::time::sleep(Duration::from_millis(100)).await;
        assert_eq!(last.load(Ordering::SeqCst), 2);
        assert!(!debouncer.is_pending());
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_drops_pending_action() {
        let debouncer = Debouncer::new(Duration::from_millis(50));
        let last = Arc::new(AtomicUsize::new(0));

        debouncer.schedule(counter_action(&last, 1));
        debouncer.cancel();
        assert!(!debouncer.is_pending());

        tokio::time::sleep(Duration::from_millis(200)).await;
        assert_eq!(last.load(Ordering::SeqCst), 0);
    }
}
