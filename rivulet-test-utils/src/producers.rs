// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Ready-made sources for driving combinators in tests.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use futures::stream::{self, StreamExt};
use rivulet_core::{Observer, RivuletError, Source, StreamItem, Subscription};

/// An asynchronous source yielding `values`, then failing with `message`.
///
/// Every item is preceded by a yield to the runtime, so concurrent consumers
/// interleave with it.
pub fn failing_after<T: Send + 'static>(values: Vec<T>, message: &str) -> Source<T> {
    let error = RivuletError::stream_error(message);
    let items = values
        .into_iter()
        .map(StreamItem::Value)
        .chain(std::iter::once(StreamItem::Error(error)));

    Source::try_stream(stream::iter(items).then(|item| async move {
        tokio::task::yield_now().await;
        item
    }))
}

/// An asynchronous source yielding `values`, each after `period`.
pub fn ticking<T: Send + 'static>(values: Vec<T>, period: Duration) -> Source<T> {
    Source::stream(stream::iter(values).then(move |value| async move {
        tokio::time::sleep(period).await;
        value
    }))
}

/// Builds push sources that record how often they were subscribed and released.
#[derive(Debug, Clone, Default)]
pub struct CountingPush {
    subscribed: Arc<AtomicUsize>,
    released: Arc<AtomicUsize>,
}

impl CountingPush {
    pub fn new() -> Self {
        Self::default()
    }

    /// A push source delivering `values` on subscription, then completing.
    pub fn completing<T: Send + 'static>(&self, values: Vec<T>) -> Source<T> {
        self.build(values, true)
    }

    /// A push source delivering `values` on subscription and then staying open until
    /// released.
    pub fn open<T: Send + 'static>(&self, values: Vec<T>) -> Source<T> {
        self.build(values, false)
    }

    pub fn subscribed(&self) -> usize {
        self.subscribed.load(Ordering::SeqCst)
    }

    pub fn released(&self) -> usize {
        self.released.load(Ordering::SeqCst)
    }

    fn build<T: Send + 'static>(&self, values: Vec<T>, complete: bool) -> Source<T> {
        let subscribed = self.subscribed.clone();
        let released = self.released.clone();

        Source::push_fn(move |mut observer: Observer<T>| {
            subscribed.fetch_add(1, Ordering::SeqCst);
            for value in values {
                observer.next(value);
            }

            let held = if complete {
                observer.complete();
                None
            } else {
                Some(observer)
            };

            Subscription::new(move || {
                drop(held);
                released.fetch_add(1, Ordering::SeqCst);
            })
        })
    }
}
