// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use futures::StreamExt;
use rivulet_core::{Eventual, IntoSource, Result, RivuletError, Source, StreamItem};

/// Folds the source into an accumulator of any type, starting from `init`.
///
/// A synchronous source yields [`Eventual::Now`].
///
/// # Errors
/// Resolves to the first error the source yields; the partial accumulator is discarded.
///
/// # Examples
///
/// ```rust
/// use rivulet_stream::fold;
///
/// let lengths = fold(vec!["a", "bcd"], Vec::new(), |mut acc, s| {
///     acc.push(s.len());
///     acc
/// });
///
/// assert_eq!(lengths.now().unwrap().unwrap(), vec![1, 3]);
/// ```
pub fn fold<S, A, F>(source: S, init: A, mut f: F) -> Eventual<A>
where
    S: IntoSource,
    S::Item: Send + 'static,
    A: Send + 'static,
    F: FnMut(A, S::Item) -> A + Send + 'static,
{
    match source.into_source() {
        Source::Sync(seq) => Eventual::Now(fold_sync(seq, init, &mut f)),
        other => {
            let mut seq = other.into_async();
            Eventual::later(async move {
                let mut acc = init;
                while let Some(item) = seq.next().await {
                    acc = f(acc, item.into_result()?);
                }
                Ok::<_, RivuletError>(acc)
            })
        }
    }
}

fn fold_sync<T, A, I, F>(items: I, init: A, f: &mut F) -> Result<A>
where
    I: IntoIterator<Item = StreamItem<T>>,
    F: FnMut(A, T) -> A,
{
    items
        .into_iter()
        .try_fold(init, |acc, item| -> Result<A> { Ok(f(acc, item.into_result()?)) })
}

/// Folds the source into a single value of the element type.
///
/// With a `seed`, the fold starts from it and always produces `Some`. Without one, the
/// first element is the initial accumulator and an empty source yields `None`.
///
/// # Errors
/// Resolves to the first error the source yields; the partial accumulator is discarded.
///
/// # Examples
///
/// ```rust
/// use rivulet_stream::reduce;
///
/// let sum = reduce(vec![1, 2, 3], |acc, x| acc + x, None);
/// assert_eq!(sum.now().unwrap().unwrap(), Some(6));
///
/// let seeded = reduce(Vec::<i32>::new(), |acc, x| acc + x, Some(10));
/// assert_eq!(seeded.now().unwrap().unwrap(), Some(10));
/// ```
pub fn reduce<S, F>(source: S, mut f: F, seed: Option<S::Item>) -> Eventual<Option<S::Item>>
where
    S: IntoSource,
    S::Item: Send + 'static,
    F: FnMut(S::Item, S::Item) -> S::Item + Send + 'static,
{
    fold(source, seed, move |acc, value| match acc {
        Some(acc) => Some(f(acc, value)),
        None => Some(value),
    })
}
