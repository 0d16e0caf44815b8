// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Stream wrapper injecting a [`StreamItem::Error`] at a chosen position.

use std::pin::Pin;
use std::task::{ready, Context, Poll};

use futures::{Stream, StreamExt};
use rivulet_core::{RivuletError, StreamItem};

/// Wraps plain values in [`StreamItem::Value`] and emits an error at `inject_at`
/// (0-indexed) in place of polling the inner stream.
///
/// # Examples
///
/// ```rust
/// use rivulet_core::StreamItem;
/// use rivulet_test_utils::ErrorInjectingStream;
/// use futures::{stream, StreamExt};
///
/// # #[tokio::main]
/// # async fn main() {
/// let mut s = ErrorInjectingStream::new(stream::iter(vec![1, 2]), 1);
///
/// assert_eq!(s.next().await, Some(StreamItem::Value(1)));
/// assert!(matches!(s.next().await, Some(StreamItem::Error(_))));
/// assert_eq!(s.next().await, Some(StreamItem::Value(2)));
/// # }
/// ```
pub struct ErrorInjectingStream<S> {
    inner: S,
    inject_at: usize,
    error: Option<RivuletError>,
    emitted: usize,
}

impl<S> ErrorInjectingStream<S> {
    pub fn new(inner: S, inject_at: usize) -> Self {
        Self::with_error(inner, inject_at, RivuletError::stream_error("Injected test error"))
    }

    /// Injects `error` instead of the default stream processing error.
    pub fn with_error(inner: S, inject_at: usize, error: RivuletError) -> Self {
        Self {
            inner,
            inject_at,
            error: Some(error),
            emitted: 0,
        }
    }
}

impl<S> Stream for ErrorInjectingStream<S>
where
    S: Stream + Unpin,
{
    type Item = StreamItem<S::Item>;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let this = self.get_mut();
        if this.emitted == this.inject_at {
            if let Some(error) = this.error.take() {
                this.emitted += 1;
                return Poll::Ready(Some(StreamItem::Error(error)));
            }
        }

        let item = ready!(this.inner.poll_next_unpin(cx));
        if item.is_some() {
            this.emitted += 1;
        }
        Poll::Ready(item.map(StreamItem::Value))
    }
}
