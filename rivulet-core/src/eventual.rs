// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! A result that is either available now or deferred.

use crate::Result;
use core::fmt;
use core::future::{ready, Future, IntoFuture};
use futures::future::{BoxFuture, Either, FutureExt};

/// Outcome of a terminal operation such as `find`, `reduce` or `collect`.
///
/// Consuming a synchronous source yields [`Eventual::Now`]; anything that had to
/// suspend yields [`Eventual::Later`]. Both can be awaited.
pub enum Eventual<T> {
    /// The result was computed without suspending.
    Now(Result<T>),
    /// The result will be available once the future resolves.
    Later(BoxFuture<'static, Result<T>>),
}

impl<T> Eventual<T> {
    /// Defers the result to a future.
    pub fn later<F>(future: F) -> Self
    where
        F: Future<Output = Result<T>> + Send + 'static,
    {
        Eventual::Later(future.boxed())
    }

    /// Returns `true` if the result is already available.
    pub const fn is_now(&self) -> bool {
        matches!(self, Eventual::Now(_))
    }

    /// The immediate result, or `None` if it is deferred.
    pub fn now(self) -> Option<Result<T>> {
        match self {
            Eventual::Now(result) => Some(result),
            Eventual::Later(_) => None,
        }
    }
}

impl<T: Send + 'static> IntoFuture for Eventual<T> {
    type Output = Result<T>;
    type IntoFuture = Either<core::future::Ready<Result<T>>, BoxFuture<'static, Result<T>>>;

    fn into_future(self) -> Self::IntoFuture {
        match self {
            Eventual::Now(result) => Either::Left(ready(result)),
            Eventual::Later(future) => Either::Right(future),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Eventual<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Eventual::Now(result) => f.debug_tuple("Now").field(result).finish(),
            Eventual::Later(_) => f.write_str("Later(..)"),
        }
    }
}
