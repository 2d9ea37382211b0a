//! Cancellable one-shot timer on the tokio runtime
//!
//! Scheduling replaces any pending callback, so repeated calls inside the delay yield a
//! single trailing-edge firing.

use parking_lot::Mutex;
use std::time::Duration;
use tokio::task::JoinHandle;

/// One-shot timer; cancelled on drop
#[derive(Debug, Default)]
pub struct CancellableTimer {
    pending: Mutex<Option<JoinHandle<()>>>,
}

impl CancellableTimer {
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Run `callback` after `delay`, cancelling any pending callback
    ///
    /// Must be called within a Tokio runtime.
    pub fn schedule<F>(&self, delay: Duration, callback: F)
    where
        F: FnOnce() + Send + 'static,
    {
        let mut pending = self.pending.lock();
        if let Some(previous) = pending.take() {
            previous.abort();
        }
        *pending = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            callback();
        }));
    }

    /// Cancel the pending callback, returning whether one was pending
    pub fn cancel(&self) -> bool {
        match self.pending.lock().take() {
            Some(handle) => {
                let was_pending = !handle.is_finished();
                handle.abort();
                was_pending
            }
            None => false,
        }
    }

    /// Whether a callback is waiting to fire
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending
            .lock()
            .as_ref()
            .is_some_and(|handle| !handle.is_finished())
    }
}

impl Drop for CancellableTimer {
    fn drop(&mut self) {
        if let Some(handle) = self.pending.get_mut().take() {
            handle.abort();
        }
    }
}
