//! Trailing-edge debounce timer.
//!
//! # Design
//! - One pending task at a time; scheduling aborts the previous one, so only
//!   the action from the most recent request runs.
//! - A zero quiet period runs the action inline, like an undebounced input.
//! - Dropping the debouncer aborts whatever is still pending.

use std::time::Duration;

use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tracing::trace;

use crate::error::{FormError, FormResult};

/// Delays an action until no newer request arrived for a quiet period.
#[derive(Debug)]
pub struct Debouncer {
    quiet_period: Duration,
    runtime: Handle,
    pending: Option<JoinHandle<()>>,
}

impl Debouncer {
    /// Create a debouncer bound to the current tokio runtime.
    ///
    /// # Errors
    ///
    /// Returns [`FormError::RuntimeUnavailable`] when called outside a runtime.
    pub fn new(quiet_period: Duration) -> FormResult<Self> {
        let runtime =
            Handle::try_current().map_err(|source| FormError::RuntimeUnavailable { source })?;
        Ok(Self::with_handle(quiet_period, runtime))
    }

    /// Create a debouncer that spawns its timers on `runtime`.
    #[must_use]
    pub const fn with_handle(quiet_period: Duration, runtime: Handle) -> Self {
        Self {
            quiet_period,
            runtime,
            pending: None,
        }
    }

    /// Quiet period applied to each request.
    #[must_use]
    pub const fn quiet_period(&self) -> Duration {
        self.quiet_period
    }

    /// Run `action` once the quiet period elapses, replacing any pending
    /// action.
    pub fn schedule<F>(&mut self, action: F)
    where
        F: FnOnce() + Send + 'static,
    {
        if self.quiet_period.is_zero() {
            self.cancel();
            action();
            return;
        }

        let quiet_period = self.quiet_period;
        let task = self.runtime.spawn(async move {
            tokio::time::sleep(quiet_period).await;
            action();
        });
        if let Some(previous) = self.pending.replace(task) {
            if !previous.is_finished() {
                trace!(?quiet_period, "rescheduling debounced action");
            }
            previous.abort();
        }
    }

    /// Returns `true` while a scheduled action has not run yet.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending
            .as_ref()
            .is_some_and(|task| !task.is_finished())
    }

    /// Drop the pending action, if any. Returns `true` when one was still
    /// waiting.
    pub fn cancel(&mut self) -> bool {
        self.pending.take().is_some_and(|task| {
            let waiting = !task.is_finished();
            task.abort();
            waiting
        })
    }
}

impl Drop for Debouncer {
    fn drop(&mut self) {
        self.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use tokio::sync::mpsc;

    const QUIET: Duration = Duration::from_millis(1_000);

    #[tokio::test(start_paused = true)]
    async fn only_last_request_fires() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut debouncer = Debouncer::new(QUIET).expect("runtime");

        for value in [10, 20, 30] {
            let tx = tx.clone();
            debouncer.schedule(move || {
                let _ = tx.send(value);
            });
            tokio::time::sleep(Duration::from_millis(300)).await;
        }

        tokio::time::sleep(QUIET).await;
        assert_eq!(rx.try_recv().ok(), Some(30));
        assert!(rx.try_recv().is_err());
        assert!(!debouncer.is_pending());
    }

    #[tokio::test(start_paused = true)]
    async fn quiet_period_restarts_on_each_request() {
        let fired = Arc::new(AtomicUsize::new(0));
        let mut debouncer = Debouncer::new(QUIET).expect("runtime");

        let counter = fired.clone();
        debouncer.schedule(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        });
        tokio::time::sleep(Duration::from_millis(900)).await;

        let counter = fired.clone();
        debouncer.schedule(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        });
        tokio::time::sleep(Duration::from_millis(900)).await;
        assert_eq!(fired.load(Ordering::SeqCst), 0);
        assert!(debouncer.is_pending());

        tokio::time::sleep(Duration::from_millis(200)).await;
        assert_eq!(fired.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn zero_quiet_period_runs_inline() {
        let fired = Arc::new(AtomicUsize::new(0));
        let mut debouncer = Debouncer::new(Duration::ZERO).expect("runtime");
        let counter = fired.clone();
        debouncer.schedule(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        });
        assert_eq!(fired.load(Ordering::SeqCst), 1);
        assert!(!debouncer.is_pending());
    }

    #[tokio::test(start_paused = true)]
    async fn cancel_and_drop_abort_pending_action() {
        let fired = Arc::new(AtomicUsize::new(0));

        let mut debouncer = Debouncer::new(QUIET).expect("runtime");
        let counter = fired.clone();
        debouncer.schedule(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        });
        assert!(debouncer.cancel());
        assert!(!debouncer.cancel());

        let counter = fired.clone();
        debouncer.schedule(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        });
        drop(debouncer);

        tokio::time::sleep(QUIET * 2).await;
        assert_eq!(fired.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn new_requires_runtime() {
        assert!(matches!(
            Debouncer::new(QUIET),
            Err(FormError::RuntimeUnavailable { .. })
        ));
    }
}
