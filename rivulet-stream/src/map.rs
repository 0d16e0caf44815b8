// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Element-wise transformation.

use futures::StreamExt;
use rivulet_core::{AsyncSeq, IntoSource, Seq, Source, SyncSeq};

/// Applies `f` to every element, in source order.
///
/// The output stays [`Seq::Sync`] iff the source is synchronous. Errors pass through
/// unchanged and terminate the output.
///
/// # Examples
///
/// ```rust
/// use rivulet_stream::map;
///
/// let doubled = map(vec![1, 2, 3], |x| x * 2);
///
/// assert!(doubled.is_sync());
/// assert_eq!(doubled.collect().now().unwrap().unwrap(), vec![2, 4, 6]);
/// ```
pub fn map<S, U, F>(source: S, mut f: F) -> Seq<U>
where
    S: IntoSource,
    S::Item: Send + 'static,
    U: Send + 'static,
    F: FnMut(S::Item) -> U + Send + 'static,
{
    match source.into_source() {
        Source::Sync(seq) => Seq::Sync(SyncSeq::new(seq.map(move |item| item.map(&mut f)))),
        other => Seq::Async(AsyncSeq::new(
            other.into_async().map(move |item| item.map(&mut f)),
        )),
    }
}
