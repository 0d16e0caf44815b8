// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! One-level flattening.
//!
//! Each element of the outer source is classified through [`Expand`]: plain values are
//! emitted as-is, nested sources are drained in full (in order) before the next outer
//! element is read. Nesting deeper than one level is not unwrapped.

use futures::future::{ready, Either};
use futures::stream::{self, StreamExt};
use rivulet_core::{AsyncSeq, IntoSource, Seq, Source, StreamItem};

use crate::map::map;

/// An element of a source being flattened.
#[derive(Debug)]
pub enum Element<T> {
    /// Emitted unchanged.
    Value(T),
    /// Expanded into its own elements.
    Nested(Source<T>),
}

impl<T> Element<T> {
    /// A nested element drained by [`flat`].
    pub fn nested<S>(source: S) -> Self
    where
        S: IntoSource<Item = T>,
    {
        Element::Nested(source.into_source())
    }
}

/// Classification of an element as a value or a nested source.
pub trait Expand {
    /// Element type after flattening.
    type Item;

    /// Classifies `self`.
    fn expand(self) -> Element<Self::Item>;
}

impl<T> Expand for Element<T> {
    type Item = T;

    fn expand(self) -> Element<T> {
        self
    }
}

impl<T: Send + 'static> Expand for Vec<T> {
    type Item = T;

    fn expand(self) -> Element<T> {
        Element::Nested(Source::iter(self))
    }
}

impl<T> Expand for Source<T> {
    type Item = T;

    fn expand(self) -> Element<T> {
        Element::Nested(self)
    }
}

impl<T> Expand for Seq<T> {
    type Item = T;

    fn expand(self) -> Element<T> {
        Element::Nested(self.into_source())
    }
}

/// Flattens one level of nesting.
///
/// The output is always asynchronous. An error from the outer source or from any
/// nested source terminates the output.
///
/// # Examples
///
/// ```rust
/// use rivulet_stream::{flat, Element};
///
/// # #[tokio::main]
/// # async fn main() -> rivulet_core::Result<()> {
/// let source = vec![Element::Value(1), Element::nested(vec![2, 3]), Element::Value(4)];
///
/// assert_eq!(flat(source).try_collect().await?, vec![1, 2, 3, 4]);
/// # Ok(())
/// # }
/// ```
pub fn flat<S, T>(source: S) -> AsyncSeq<T>
where
    S: IntoSource,
    S::Item: Expand<Item = T> + Send + 'static,
    T: Send + 'static,
{
    let expanded = source
        .into_source()
        .into_async()
        .flat_map(|item| match item {
            StreamItem::Value(element) => match element.expand() {
                Element::Value(value) => Either::Left(stream::once(ready(StreamItem::Value(value)))),
                Element::Nested(inner) => Either::Right(inner.into_async()),
            },
            StreamItem::Error(err) => Either::Left(stream::once(ready(StreamItem::Error(err)))),
        });

    AsyncSeq::new(expanded)
}

/// Maps every element through `f`, then flattens one level.
///
/// Equivalent to `flat(map(source, f))`.
pub fn flat_map<S, E, F>(source: S, f: F) -> AsyncSeq<E::Item>
where
    S: IntoSource,
    S::Item: Send + 'static,
    E: Expand + Send + 'static,
    E::Item: Send + 'static,
    F: FnMut(S::Item) -> E + Send + 'static,
{
    flat(map(source, f))
}
