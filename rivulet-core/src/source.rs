// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Source classification.
//!
//! A candidate sequence is classified exactly once, when it is turned into a
//! [`Source`]. Downstream code matches on the tag instead of probing capabilities
//! per element.
//!
//! | Kind | Retrieval | Typical types |
//! |------|-----------|---------------|
//! | [`Kind::Sync`] | pull, never suspends | `Vec<T>`, `[T; N]`, [`SyncSeq`] |
//! | [`Kind::Async`] | pull, may suspend | [`AsyncSeq`], `async_channel::Receiver<T>`, any `Stream` via [`Source::stream`] |
//! | [`Kind::Push`] | producer-driven | [`Subject`], any [`PushSource`] |
//!
//! A type offering more than one capability is classified by its [`IntoSource`]
//! impl, which always picks the dominating (async or push) one.
//!
//! # Example
//!
//! ```
//! use rivulet_core::{IntoSource, Kind, Source, Subject};
//!
//! assert_eq!(vec![1, 2, 3].into_source().kind(), Kind::Sync);
//! assert_eq!(Subject::<i32>::new().into_source().kind(), Kind::Push);
//! assert_eq!(Source::stream(futures::stream::iter([1])).kind(), Kind::Async);
//! ```

use crate::push::{adapt_push, Observer, PushFn, PushSource, Subscription};
use crate::seq::{AsyncSeq, Seq, SyncSeq};
use crate::subject::Subject;
use crate::{Result, StreamItem};
use core::fmt;
use futures::stream::{Stream, StreamExt};

/// The mode of a source or output sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    /// The next element can be retrieved without suspension.
    Sync,
    /// Retrieving the next element may suspend.
    Async,
    /// A producer emits on its own schedule.
    Push,
}

impl Kind {
    /// The mode of an output built from inputs of the given kinds.
    ///
    /// The output is `Sync` only if every input is `Sync` (vacuously true for no
    /// inputs); otherwise it is `Async`. An output is never `Push`.
    pub fn output<I>(inputs: I) -> Kind
    where
        I: IntoIterator<Item = Kind>,
    {
        if inputs.into_iter().all(|kind| kind == Kind::Sync) {
            Kind::Sync
        } else {
            Kind::Async
        }
    }
}

/// A classified candidate sequence.
///
/// The combinator holding a `Source` does not own the resource behind it; it only
/// drives it for the duration of iteration.
pub enum Source<T> {
    /// Pulled synchronously.
    Sync(SyncSeq<T>),
    /// Pulled asynchronously.
    Async(AsyncSeq<T>),
    /// Driven by its producer.
    Push(Box<dyn PushSource<T>>),
}

impl<T: Send + 'static> Source<T> {
    /// A synchronous source over plain values.
    pub fn iter<I>(values: I) -> Self
    where
        I: IntoIterator<Item = T>,
        I::IntoIter: Send + 'static,
    {
        Source::Sync(SyncSeq::new(values.into_iter().map(StreamItem::Value)))
    }

    /// A synchronous source whose pulls can fail.
    pub fn try_iter<I>(results: I) -> Self
    where
        I: IntoIterator<Item = Result<T>>,
        I::IntoIter: Send + 'static,
    {
        Source::Sync(SyncSeq::new(results.into_iter().map(StreamItem::from)))
    }

    /// An asynchronous source over plain values.
    pub fn stream<S>(values: S) -> Self
    where
        S: Stream<Item = T> + Send + 'static,
    {
        Source::Async(AsyncSeq::new(values.map(StreamItem::Value)))
    }

    /// An asynchronous source that carries its own errors.
    pub fn try_stream<S>(items: S) -> Self
    where
        S: Stream<Item = StreamItem<T>> + Send + 'static,
    {
        Source::Async(AsyncSeq::new(items))
    }

    /// A push source.
    pub fn push<P>(producer: P) -> Self
    where
        P: PushSource<T> + 'static,
    {
        Source::Push(Box::new(producer))
    }

    /// A push source whose subscribe logic is a closure, run on first consumption.
    pub fn push_fn<F>(subscribe: F) -> Self
    where
        F: FnOnce(Observer<T>) -> Subscription + Send + 'static,
    {
        Source::push(PushFn::new(subscribe))
    }

    /// The classification of this source.
    pub const fn kind(&self) -> Kind {
        match self {
            Source::Sync(_) => Kind::Sync,
            Source::Async(_) => Kind::Async,
            Source::Push(_) => Kind::Push,
        }
    }

    /// The synchronous sequence, if this source is synchronous.
    pub fn into_sync(self) -> Option<SyncSeq<T>> {
        match self {
            Source::Sync(seq) => Some(seq),
            _ => None,
        }
    }

    /// Views this source as an asynchronous sequence.
    ///
    /// Sync sources are lifted; push sources are adapted and subscribed on first poll.
    pub fn into_async(self) -> AsyncSeq<T> {
        match self {
            Source::Sync(seq) => AsyncSeq::from_sync(seq),
            Source::Async(seq) => seq,
            Source::Push(producer) => adapt_push(producer),
        }
    }
}

impl<T> fmt::Debug for Source<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Source::Sync(seq) => f.debug_tuple("Sync").field(seq).finish(),
            Source::Async(seq) => f.debug_tuple("Async").field(seq).finish(),
            Source::Push(_) => f.write_str("Push(..)"),
        }
    }
}

/// Conversion of a candidate sequence into a classified [`Source`].
pub trait IntoSource {
    /// Element type of the source.
    type Item;

    /// Classifies `self`.
    fn into_source(self) -> Source<Self::Item>;
}

impl<T> IntoSource for Source<T> {
    type Item = T;

    fn into_source(self) -> Source<T> {
        self
    }
}

impl<T> IntoSource for Seq<T> {
    type Item = T;

    fn into_source(self) -> Source<T> {
        match self {
            Seq::Sync(seq) => Source::Sync(seq),
            Seq::Async(seq) => Source::Async(seq),
        }
    }
}

impl<T> IntoSource for SyncSeq<T> {
    type Item = T;

    fn into_source(self) -> Source<T> {
        Source::Sync(self)
    }
}

impl<T> IntoSource for AsyncSeq<T> {
    type Item = T;

    fn into_source(self) -> Source<T> {
        Source::Async(self)
    }
}

impl<T: Send + 'static> IntoSource for Vec<T> {
    type Item = T;

    fn into_source(self) -> Source<T> {
        Source::iter(self)
    }
}

impl<T: Send + 'static, const N: usize> IntoSource for [T; N] {
    type Item = T;

    fn into_source(self) -> Source<T> {
        Source::iter(self)
    }
}

impl<T: Clone + Send + 'static> IntoSource for Subject<T> {
    type Item = T;

    fn into_source(self) -> Source<T> {
        Source::push(self)
    }
}

impl<T: Send + 'static> IntoSource for async_channel::Receiver<T> {
    type Item = T;

    fn into_source(self) -> Source<T> {
        Source::stream(self)
    }
}

impl<T: Clone + Send + 'static> From<Subject<T>> for Source<T> {
    fn from(subject: Subject<T>) -> Self {
        subject.into_source()
    }
}

impl<T: Send + 'static> From<Vec<T>> for Source<T> {
    fn from(values: Vec<T>) -> Self {
        values.into_source()
    }
}

impl<T> From<Seq<T>> for Source<T> {
    fn from(seq: Seq<T>) -> Self {
        seq.into_source()
    }
}
