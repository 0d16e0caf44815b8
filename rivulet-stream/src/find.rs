// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use futures::StreamExt;
use rivulet_core::{Eventual, IntoSource, Result, RivuletError, Source, StreamItem};

use crate::logging::trace;

/// Returns the first element satisfying `predicate`, or `None` if the source
/// completes without one.
///
/// Consumption stops at the first match; the rest of the source is dropped (a push
/// source is unsubscribed). A synchronous source yields [`Eventual::Now`].
///
/// # Errors
/// Resolves to the first error the source yields before a match.
///
/// # Examples
///
/// ```rust
/// use rivulet_stream::find;
///
/// let found = find(vec![1, 2, 3], |x| x % 2 == 0);
///
/// assert_eq!(found.now().unwrap().unwrap(), Some(2));
/// ```
pub fn find<S, P>(source: S, mut predicate: P) -> Eventual<Option<S::Item>>
where
    S: IntoSource,
    S::Item: Send + 'static,
    P: FnMut(&S::Item) -> bool + Send + 'static,
{
    match source.into_source() {
        Source::Sync(seq) => Eventual::Now(first_match(seq, &mut predicate)),
        other => {
            let mut seq = other.into_async();
            Eventual::later(async move {
                while let Some(item) = seq.next().await {
                    if let Some(found) = check(item, &mut predicate)? {
                        return Ok(Some(found));
                    }
                }
                Ok::<_, RivuletError>(None)
            })
        }
    }
}

fn first_match<T, I, P>(items: I, predicate: &mut P) -> Result<Option<T>>
where
    I: IntoIterator<Item = StreamItem<T>>,
    P: FnMut(&T) -> bool,
{
    for item in items {
        if let Some(found) = check(item, predicate)? {
            return Ok(Some(found));
        }
    }
    Ok(None)
}

fn check<T, P>(item: StreamItem<T>, predicate: &mut P) -> Result<Option<T>>
where
    P: FnMut(&T) -> bool,
{
    let value = Result::<T>::from(item)?;
    if predicate(&value) {
        trace!("find: match, releasing source");
        Ok(Some(value))
    } else {
        Ok(None)
    }
}
