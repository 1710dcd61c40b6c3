//! Cancellable deferred-task scheduling for the post-success reset.

use std::sync::Mutex;
use std::time::Duration;

use tokio_util::sync::CancellationToken;

/// Handle to at most one pending deferred task.
///
/// Scheduling replaces (and cancels) any previously pending task, and
/// dropping the handle cancels it too, so a discarded form never fires a
/// stale reset.
#[derive(Debug, Default)]
pub struct ResetTask {
    token: Mutex<Option<CancellationToken>>,
}

impl ResetTask {
    /// Create a handle with nothing scheduled.
    pub fn new() -> Self {
        Self::default()
    }

    /// Cancel any pending run and schedule `f` to run after `delay`.
    ///
    /// Must be called from within a tokio runtime.
    pub fn schedule<F>(&self, delay: Duration, f: F)
    where
        F: FnOnce() + Send + 'static,
    {
        let token = CancellationToken::new();
        if let Ok(mut guard) = self.token.lock()
            && let Some(previous) = guard.replace(token.clone())
        {
            previous.cancel();
        }

        tokio::spawn(async move {
            tokio::select! {
                _ = token.cancelled() => {}
                _ = tokio::time::sleep(delay) => {
                    f();
                    // Mark the task as no longer pending.
                    token.cancel();
                }
            }
        });
    }

    /// Cancel the pending run, if any.
    pub fn cancel(&self) {
        if let Ok(mut guard) = self.token.lock()
            && let Some(token) = guard.take()
        {
            token.cancel();
        }
    }

    /// Whether a scheduled run is still pending.
    pub fn is_pending(&self) -> bool {
        self.token
            .lock()
            .map(|guard| guard.as_ref().is_some_and(|t| !t.is_cancelled()))
            .unwrap_or(false)
    }
}

impl Drop for ResetTask {
    fn drop(&mut self) {
        self.cancel();
    }
}
