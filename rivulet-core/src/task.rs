// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Background task spawning with cancellation on drop.

use crate::CancellationToken;
use core::future::Future;

/// Handle to a spawned background task.
///
/// The task receives a [`CancellationToken`] that is cancelled when the handle is
/// dropped or [`cancel`](RivuletTask::cancel) is called. The task is expected to watch
/// the token and return promptly once it fires.
///
/// ```rust
/// use rivulet_core::RivuletTask;
///
/// # #[tokio::main]
/// # async fn main() {
/// let task = RivuletTask::spawn(|cancel| async move {
///     cancel.cancelled().await;
/// });
///
/// assert!(!task.is_cancelled());
/// drop(task); // wakes the task, which then returns
/// # }
/// ```
#[derive(Debug)]
pub struct RivuletTask {
    cancel: CancellationToken,
}

impl RivuletTask {
    /// Spawn `f(token)` on the configured runtime.
    #[cfg(feature = "runtime-tokio")]
    pub fn spawn<F, Fut>(f: F) -> Self
    where
        F: FnOnce(CancellationToken) -> Fut + Send + 'static,
        Fut: Future<Output = ()> + Send + 'static,
    {
        let cancel = CancellationToken::new();
        tokio::spawn(f(cancel.clone()));
        Self { cancel }
    }

    /// Signal the task to stop without waiting for it.
    pub fn cancel(&self) {
        self.cancel.cancel();
    }

    /// Returns `true` once cancellation has been requested.
    pub fn is_cancelled(&self) -> bool {
        self.cancel.is_cancelled()
    }
}

impl Drop for RivuletTask {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}
