//! Trailing-edge debouncing for bursty inputs.
//!
//! A [`Debouncer`] coalesces a rapid sequence of calls into a single execution
//! of the wrapped action after a quiet period. Each call restarts the timer
//! with the new argument; only the last call in a burst ever runs. Dropping
//! the debouncer cancels any pending execution, so no timer fires after the
//! owning component is torn down.

use std::future::Future;
use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;

pub struct Debouncer<T> {
    tx: mpsc::UnboundedSender<T>,
    worker: JoinHandle<()>,
}

impl<T: Send + 'static> Debouncer<T> {
    /// Wrap `action` so that it runs with the most recent argument once
    /// `delay` has elapsed without another call.
    pub fn new<F, Fut>(delay: Duration, mut action: F) -> Self
    where
        F: FnMut(T) -> Fut + Send + 'static,
        Fut: Future<Output = ()> + Send,
    {
        let (tx, mut rx) = mpsc::unbounded_channel::<T>();
        let worker = tokio::spawn(async move {
            while let Some(mut latest) = rx.recv().await {
                loop {
                    tokio::select! {
                        next = rx.recv() => match next {
                            // A newer call within the window: keep its
                            // argument and restart the quiet period.
                            Some(value) => latest = value,
                            // Owner dropped: the pending call never fires.
                            None => return,
                        },
                        _ = tokio::time::sleep(delay) => break,
                    }
                }
                action(latest).await;
            }
        });
        Self { tx, worker }
    }

    /// Schedule `value` for the trailing execution, superseding any value
    /// already waiting.
    pub fn call(&self, value: T) {
        // Send only fails once the worker has exited, i.e. during teardown.
        let _ = self.tx.send(value);
    }
}

impl<T> Drop for Debouncer<T> {
    fn drop(&mut self) {
        self.worker.abort();
    }
}
