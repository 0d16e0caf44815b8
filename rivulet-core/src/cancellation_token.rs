// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Cooperative cancellation for background pumps.

use core::future::Future;
use core::pin::Pin;
use core::sync::atomic::{AtomicBool, Ordering};
use core::task::{ready, Context, Poll};
use event_listener::{Event, EventListener};
use std::sync::Arc;

/// Cloneable cancellation flag that can also be awaited.
///
/// ```
/// use rivulet_core::CancellationToken;
///
/// let token = CancellationToken::new();
/// let observer = token.clone();
/// assert!(!observer.is_cancelled());
///
/// token.cancel();
/// assert!(observer.is_cancelled());
/// ```
#[derive(Clone, Debug, Default)]
pub struct CancellationToken {
    signal: Arc<Signal>,
}

#[derive(Debug)]
struct Signal {
    set: AtomicBool,
    event: Event,
}

impl Default for Signal {
    fn default() -> Self {
        Self {
            set: AtomicBool::new(false),
            event: Event::new(),
        }
    }
}

impl Signal {
    fn is_set(&self) -> bool {
        self.set.load(Ordering::Acquire)
    }
}

impl CancellationToken {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cancels the token and wakes every waiter. Idempotent.
    pub fn cancel(&self) {
        if !self.signal.set.swap(true, Ordering::AcqRel) {
            self.signal.event.notify(usize::MAX);
        }
    }

    pub fn is_cancelled(&self) -> bool {
        self.signal.is_set()
    }

    /// Resolves once the token is cancelled; immediately if it already is.
    pub fn cancelled(&self) -> Cancelled {
        Cancelled {
            signal: self.signal.clone(),
            listener: None,
        }
    }
}

/// Future returned by [`CancellationToken::cancelled`].
#[derive(Debug)]
#[must_use = "futures do nothing unless polled"]
pub struct Cancelled {
    signal: Arc<Signal>,
    listener: Option<EventListener>,
}

impl Future for Cancelled {
    type Output = ();

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<()> {
        let this = self.get_mut();
        loop {
            if this.signal.is_set() {
                return Poll::Ready(());
            }
            match this.listener.as_mut() {
                // Register first, then re-check the flag on the next iteration.
                None => this.listener = Some(this.signal.event.listen()),
                Some(listener) => {
                    ready!(Pin::new(listener).poll(cx));
                    this.listener = None;
                }
            }
        }
    }
}
