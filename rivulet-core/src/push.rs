// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Push protocol and its adaptation to pull semantics.
//!
//! A push producer emits values, an error or completion on its own schedule. It is
//! consumed by handing it an [`Observer`] and keeping the returned [`Subscription`]
//! alive for as long as the values are wanted.
//!
//! ```
//! use rivulet_core::{Observer, PushFn, PushSource, Subscription};
//! use std::sync::{Arc, Mutex};
//!
//! let seen = Arc::new(Mutex::new(Vec::new()));
//! let sink = seen.clone();
//!
//! let producer = PushFn::new(|mut observer: Observer<i32>| {
//!     observer.next(1);
//!     observer.next(2);
//!     observer.complete();
//!     Subscription::empty()
//! });
//!
//! let _subscription = Box::new(producer).subscribe(Observer::new(
//!     move |v| sink.lock().unwrap().push(v),
//!     |_err| {},
//!     || {},
//! ));
//!
//! assert_eq!(*seen.lock().unwrap(), vec![1, 2]);
//! ```

use crate::logging::trace;
use crate::seq::AsyncSeq;
use crate::{RivuletError, StreamItem};
use async_channel::{Receiver, Sender};
use core::fmt;
use core::pin::Pin;
use core::task::{Context, Poll};
use futures::stream::{self, Stream, StreamExt};
use pin_project::pin_project;

/// The three callbacks a push producer drives.
///
/// [`error`](Observer::error) and [`complete`](Observer::complete) consume the observer,
/// so a producer can signal termination at most once.
pub struct Observer<T> {
    on_value: Box<dyn FnMut(T) + Send>,
    on_error: Box<dyn FnOnce(RivuletError) + Send>,
    on_complete: Box<dyn FnOnce() + Send>,
}

impl<T> Observer<T> {
    /// Creates an observer from its value, error and completion callbacks.
    pub fn new<V, E, C>(on_value: V, on_error: E, on_complete: C) -> Self
    where
        V: FnMut(T) + Send + 'static,
        E: FnOnce(RivuletError) + Send + 'static,
        C: FnOnce() + Send + 'static,
    {
        Self {
            on_value: Box::new(on_value),
            on_error: Box::new(on_error),
            on_complete: Box::new(on_complete),
        }
    }

    /// Delivers one value.
    pub fn next(&mut self, value: T) {
        (self.on_value)(value);
    }

    /// Terminates the observation with an error.
    pub fn error(self, error: RivuletError) {
        (self.on_error)(error);
    }

    /// Terminates the observation successfully.
    pub fn complete(self) {
        (self.on_complete)();
    }
}

impl<T: Send + 'static> Observer<T> {
    /// An observer that forwards every signal into `tx`.
    ///
    /// Completion and errors close the channel so the receiving side ends.
    pub fn forward_to(tx: Sender<StreamItem<T>>) -> Self {
        let on_value = tx.clone();
        let on_error = tx.clone();
        Self::new(
            move |value| {
                let _ = on_value.try_send(StreamItem::Value(value));
            },
            move |error| {
                let _ = on_error.try_send(StreamItem::Error(error));
                on_error.close();
            },
            move || {
                tx.close();
            },
        )
    }
}

impl<T> fmt::Debug for Observer<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Observer").finish_non_exhaustive()
    }
}

/// Handle to an active push subscription.
///
/// Dropping the handle, or calling [`unsubscribe`](Subscription::unsubscribe), runs the
/// producer's release action exactly once.
#[must_use = "dropping a Subscription unsubscribes immediately"]
pub struct Subscription {
    release: Option<Box<dyn FnOnce() + Send>>,
}

impl Subscription {
    /// A subscription that runs `release` when it ends.
    pub fn new<F>(release: F) -> Self
    where
        F: FnOnce() + Send + 'static,
    {
        Self {
            release: Some(Box::new(release)),
        }
    }

    /// A subscription with nothing to release.
    pub fn empty() -> Self {
        Self { release: None }
    }

    /// Ends the subscription now.
    pub fn unsubscribe(mut self) {
        self.release();
    }

    fn release(&mut self) {
        if let Some(release) = self.release.take() {
            trace!("releasing push subscription");
            release();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.release();
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("active", &self.release.is_some())
            .finish()
    }
}

/// A producer that emits on its own schedule.
pub trait PushSource<T>: Send {
    /// Starts delivering to `observer` until the returned subscription is dropped.
    fn subscribe(self: Box<Self>, observer: Observer<T>) -> Subscription;
}

/// Turns a subscribe closure into a [`PushSource`].
pub struct PushFn<F> {
    subscribe: F,
}

impl<F> PushFn<F> {
    /// Wraps `subscribe`, which is called once, on first consumption.
    pub const fn new(subscribe: F) -> Self {
        Self { subscribe }
    }
}

impl<T, F> PushSource<T> for PushFn<F>
where
    F: FnOnce(Observer<T>) -> Subscription + Send,
{
    fn subscribe(self: Box<Self>, observer: Observer<T>) -> Subscription {
        (self.subscribe)(observer)
    }
}

#[pin_project]
struct Subscribed<T> {
    #[pin]
    rx: Receiver<StreamItem<T>>,
    _subscription: Subscription,
}

impl<T> Stream for Subscribed<T> {
    type Item = StreamItem<T>;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        self.project().rx.poll_next(cx)
    }
}

/// Adapts a push producer to pull semantics.
///
/// The producer is subscribed on the first poll, buffered through an unbounded
/// channel, and unsubscribed when the returned sequence is dropped.
pub fn adapt_push<T: Send + 'static>(source: Box<dyn PushSource<T>>) -> AsyncSeq<T> {
    let subscribed = stream::once(async move {
        let (tx, rx) = async_channel::unbounded();
        trace!("subscribing to push source");
        let subscription = source.subscribe(Observer::forward_to(tx));
        Subscribed {
            rx,
            _subscription: subscription,
        }
    })
    .flatten();
    AsyncSeq::new(subscribed)
}
