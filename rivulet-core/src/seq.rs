// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Output sequences.
//!
//! Every combinator returns a [`Seq`], which is either a [`SyncSeq`] (pulled without
//! suspension) or an [`AsyncSeq`] (pulled by awaiting). There is no push variant: push
//! producers are always adapted to an `AsyncSeq` before anyone consumes them.
//!
//! Both sequence types are fused at their first error: once a
//! [`StreamItem::Error`] has been yielded, the sequence reports exhaustion.

use crate::eventual::Eventual;
use crate::source::Kind;
use crate::{Result, StreamItem};
use core::fmt;
use core::pin::Pin;
use core::task::{Context, Poll};
use futures::stream::{self, BoxStream, Stream, StreamExt};

/// A lazily evaluated, synchronous sequence of [`StreamItem`]s.
pub struct SyncSeq<T> {
    inner: Box<dyn Iterator<Item = StreamItem<T>> + Send>,
    done: bool,
}

impl<T> SyncSeq<T> {
    /// Wraps an iterator of already classified items.
    pub fn new<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = StreamItem<T>>,
        I::IntoIter: Send + 'static,
    {
        Self {
            inner: Box::new(iter.into_iter()),
            done: false,
        }
    }

    /// Drains the sequence, stopping at the first error.
    ///
    /// # Errors
    /// Returns the first error the sequence yields.
    pub fn try_collect(self) -> Result<Vec<T>> {
        self.map(Result::<T>::from).collect()
    }
}

impl<T> Iterator for SyncSeq<T> {
    type Item = StreamItem<T>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let item = self.inner.next();
        self.done = matches!(item, None | Some(StreamItem::Error(_)));
        item
    }
}

impl<T> fmt::Debug for SyncSeq<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SyncSeq").field("done", &self.done).finish()
    }
}

/// A lazily evaluated, asynchronous sequence of [`StreamItem`]s.
pub struct AsyncSeq<T> {
    inner: BoxStream<'static, StreamItem<T>>,
    done: bool,
}

impl<T> AsyncSeq<T> {
    /// Wraps a stream of already classified items.
    pub fn new<S>(stream: S) -> Self
    where
        S: Stream<Item = StreamItem<T>> + Send + 'static,
    {
        Self {
            inner: stream.boxed(),
            done: false,
        }
    }

    /// Lifts a synchronous sequence; every element becomes ready immediately.
    pub fn from_sync(seq: SyncSeq<T>) -> Self
    where
        T: Send + 'static,
    {
        Self::new(stream::iter(seq))
    }

    /// Drains the sequence, stopping at the first error.
    ///
    /// # Errors
    /// Returns the first error the sequence yields.
    pub async fn try_collect(mut self) -> Result<Vec<T>> {
        let mut values = Vec::new();
        while let Some(item) = self.next().await {
            values.push(Result::<T>::from(item)?);
        }
        Ok(values)
    }
}

impl<T> Stream for AsyncSeq<T> {
    type Item = StreamItem<T>;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        if self.done {
            return Poll::Ready(None);
        }
        let polled = self.inner.as_mut().poll_next(cx);
        if let Poll::Ready(item) = &polled {
            self.done = matches!(item, None | Some(StreamItem::Error(_)));
        }
        polled
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.done {
            (0, Some(0))
        } else {
            (0, self.inner.size_hint().1)
        }
    }
}

impl<T> fmt::Debug for AsyncSeq<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AsyncSeq").field("done", &self.done).finish()
    }
}

/// The output of every combinator: a sync or async sequence, never a raw push source.
#[derive(Debug)]
pub enum Seq<T> {
    /// Every input of the combinator was synchronous.
    Sync(SyncSeq<T>),
    /// At least one input suspends, so the whole output does.
    Async(AsyncSeq<T>),
}

impl<T: Send + 'static> Seq<T> {
    /// The mode of this sequence.
    pub const fn kind(&self) -> Kind {
        match self {
            Seq::Sync(_) => Kind::Sync,
            Seq::Async(_) => Kind::Async,
        }
    }

    /// Returns `true` if elements can be pulled without suspension.
    pub const fn is_sync(&self) -> bool {
        matches!(self, Seq::Sync(_))
    }

    /// Returns `true` if pulling an element may suspend.
    pub const fn is_async(&self) -> bool {
        matches!(self, Seq::Async(_))
    }

    /// The synchronous sequence, if this is one.
    pub fn into_sync(self) -> Option<SyncSeq<T>> {
        match self {
            Seq::Sync(seq) => Some(seq),
            Seq::Async(_) => None,
        }
    }

    /// Views this sequence as asynchronous, lifting a sync one if needed.
    pub fn into_async(self) -> AsyncSeq<T> {
        match self {
            Seq::Sync(seq) => AsyncSeq::from_sync(seq),
            Seq::Async(seq) => seq,
        }
    }

    /// Collects every value, immediately for sync sequences and deferred otherwise.
    pub fn collect(self) -> Eventual<Vec<T>> {
        match self {
            Seq::Sync(seq) => Eventual::Now(seq.try_collect()),
            Seq::Async(seq) => Eventual::later(seq.try_collect()),
        }
    }
}

impl<T> From<SyncSeq<T>> for Seq<T> {
    fn from(seq: SyncSeq<T>) -> Self {
        Seq::Sync(seq)
    }
}

impl<T> From<AsyncSeq<T>> for Seq<T> {
    fn from(seq: AsyncSeq<T>) -> Self {
        Seq::Async(seq)
    }
}
