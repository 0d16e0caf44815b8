// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use futures::future::ready;
use futures::StreamExt;
use rivulet_core::{AsyncSeq, IntoSource, Seq, Source, StreamItem, SyncSeq};

/// Keeps the elements for which `predicate` holds, preserving order and mode.
///
/// Errors are never filtered out.
///
/// # Examples
///
/// ```rust
/// use rivulet_stream::filter;
///
/// let evens = filter(vec![1, 2, 3, 4, 5], |x| x % 2 == 0);
///
/// assert_eq!(evens.collect().now().unwrap().unwrap(), vec![2, 4]);
/// ```
pub fn filter<S, P>(source: S, mut predicate: P) -> Seq<S::Item>
where
    S: IntoSource,
    S::Item: Send + 'static,
    P: FnMut(&S::Item) -> bool + Send + 'static,
{
    let mut keep = move |item: &StreamItem<S::Item>| match item {
        StreamItem::Value(value) => predicate(value),
        StreamItem::Error(_) => true,
    };

    match source.into_source() {
        Source::Sync(seq) => Seq::Sync(SyncSeq::new(seq.filter(move |item| keep(item)))),
        other => Seq::Async(AsyncSeq::new(
            other.into_async().filter(move |item| ready(keep(item))),
        )),
    }
}
