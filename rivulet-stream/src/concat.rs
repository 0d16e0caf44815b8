// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Sequential concatenation.

use futures::stream::{self, StreamExt};
use rivulet_core::{AsyncSeq, IntoSource, Kind, Seq, Source, SyncSeq};

/// Yields every element of the first source, then of the second, and so on.
///
/// The output is [`Seq::Sync`] iff every argument is synchronous. Otherwise the
/// sources are drained one after the other (never concurrently, unlike
/// [`merge`](crate::merge())).
///
/// # Examples
///
/// ```rust
/// use rivulet_stream::concat;
///
/// let joined = concat([vec!["1", "2"], vec!["a", "b"]]);
///
/// assert!(joined.is_sync());
/// assert_eq!(joined.collect().now().unwrap().unwrap(), vec!["1", "2", "a", "b"]);
/// ```
pub fn concat<I, T>(sources: I) -> Seq<T>
where
    I: IntoIterator,
    I::Item: IntoSource<Item = T>,
    T: Send + 'static,
{
    let sources: Vec<Source<T>> = sources.into_iter().map(IntoSource::into_source).collect();

    if Kind::output(sources.iter().map(Source::kind)) == Kind::Sync {
        let chained = sources
            .into_iter()
            .filter_map(Source::into_sync)
            .flatten();
        Seq::Sync(SyncSeq::new(chained))
    } else {
        let chained = stream::iter(sources.into_iter().map(Source::into_async)).flatten();
        Seq::Async(AsyncSeq::new(chained))
    }
}
