//! Trailing-edge debounce over tokio timers.
//!
//! Search-as-you-type callers wrap their query dispatch in a [`Debouncer`] so
//! a burst of keystrokes fires a single search. Each call aborts the pending
//! timer and schedules a new one; only the most recent call within the delay
//! window executes. There is no leading-edge invocation.

use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::task::JoinHandle;

/// Default debounce delay in milliseconds.
pub const DEFAULT_DEBOUNCE_MS: u64 = 300;

/// A trailing-edge debouncer with a single pending timer.
///
/// Clones share the same pending timer, so a cloned handle can cancel or
/// supersede calls made through the original.
///
/// # Example
/// ```no_run
/// use hanapbahay_search::Debouncer;
/// use std::time::Duration;
///
/// # async fn example() {
/// let debouncer = Debouncer::new(Duration::from_millis(300));
/// debouncer.call(|| println!("search!"));
/// debouncer.call(|| println!("search!")); // supersedes the first
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Debouncer {
    delay: Duration,
    pending: Arc<Mutex<Option<JoinHandle<()>>>>,
}

impl Default for Debouncer {
    fn default() -> Self {
        Self::new(Duration::from_millis(DEFAULT_DEBOUNCE_MS))
    }
}

impl Debouncer {
    /// Creates a debouncer with the given delay.
    ///
    /// Must be used from within a tokio runtime; [`call`](Self::call) spawns
    /// the timer task onto the current runtime.
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: Arc::new(Mutex::new(None)),
        }
    }

    /// Schedules `f` to run after the delay, superseding any pending call.
    ///
    /// The mutex around the timer handle means two threads calling at once
    /// cannot leave two timers in flight; the later lock holder wins.
    pub fn call<F>(&self, f: F)
    where
        F: FnOnce() + Send + 'static,
    {
        let delay = self.delay;
        // Recover from a poisoned lock; the slot is still usable after a
        // panicked callback.
        let mut pending = self.pending.lock().unwrap_or_else(|e| e.into_inner());
        if let Some(handle) = pending.take() {
            handle.abort();
        }
        *pending = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            f();
        }));
    }

    /// Cancels any pending call without scheduling a new one.
    pub fn cancel(&self) {
        let mut pending = self.pending.lock().unwrap_or_else(|e| e.into_inner());
        if let Some(handle) = pending.take() {
            handle.abort();
        }
    }

    /// True while a call is scheduled but has not fired yet.
    pub fn is_pending(&self) -> bool {
        let pending = self.pending.lock().unwrap_or_else(|e| e.into_inner());
        pending.as_ref().is_some_and(|h| !h.is_finished())
    }
}
