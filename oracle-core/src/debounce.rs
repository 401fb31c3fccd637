//! Cancel-and-reschedule timer for a single callback.

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;

/// Delays a callback until `quiet` has elapsed with no further calls.
///
/// Each [`call`](Self::call) cancels the pending invocation and schedules a new
/// one carrying the latest argument, so only the last argument of a burst is
/// ever delivered. Dropping the debouncer cancels whatever is still pending.
///
/// Scheduling spawns onto the current Tokio runtime; `call` must run inside one.
pub struct Debouncer<T> {
    quiet: Duration,
    callback: Arc<dyn Fn(T) + Send + Sync>,
    pending: Option<JoinHandle<()>>,
}

impl<T: Send + 'static> Debouncer<T> {
    /// Create a debouncer that invokes `callback` after `quiet` of inactivity.
    pub fn new<F>(quiet: Duration, callback: F) -> Self
    where
        F: Fn(T) + Send + Sync + 'static,
    {
        Self {
            quiet,
            callback: Arc::new(callback),
            pending: None,
        }
    }

    /// Schedule `value`, replacing any pending invocation.
    pub fn call(&mut self, value: T) {
        self.cancel();
        let callback = Arc::clone(&self.callback);
        let quiet = self.quiet;
        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(quiet).await;
            callback(value);
        }));
    }
}

impl<T> Debouncer<T> {
    /// Cancel the pending invocation. Returns `true` if one was still waiting.
    pub fn cancel(&mut self) -> bool {
        let Some(pending) = self.pending.take() else {
            return false;
        };
        let waiting = !pending.is_finished();
        pending.abort();
        waiting
    }

    /// Whether an invocation is scheduled and has not fired yet.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending.as_ref().is_some_and(|h| !h.is_finished())
    }

    /// The quiescence window.
    #[must_use]
    pub const fn quiet(&self) -> Duration {
        self.quiet
    }
}

impl<T> Drop for Debouncer<T> {
    fn drop(&mut self) {
        self.cancel();
    }
}

impl<T> fmt::Debug for Debouncer<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Debouncer")
            .field("quiet", &self.quiet)
            .field("pending", &self.is_pending())
            .finish()
    }
}
