// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! # Rivulet
//!
//! Sequence combinators that work the same over synchronous iterators, asynchronous
//! streams and push producers.
//!
//! ## Overview
//!
//! Every combinator classifies its input once, as a [`Source`], and returns output in
//! the cheapest mode the inputs allow. Synchronous in, synchronous out: nothing is
//! spawned or awaited. As soon as an asynchronous or push source is involved, the
//! output becomes an [`AsyncSeq`]. Push producers are never exposed raw; they are
//! subscribed lazily and released when their consumer is dropped.
//!
//! [`merge`] is the one concurrent combinator: each source is drained by its own task
//! into a shared output, so sources progress independently. Elements of one source stay
//! in order; across sources they arrive as they become ready. The first error from any
//! source terminates the output.
//!
//! Errors travel in-band as [`StreamItem::Error`] and end every sequence they appear in.
//!
//! ## Quick Start
//!
//! ```rust
//! use rivulet::prelude::*;
//!
//! # #[tokio::main]
//! # async fn main() -> rivulet::Result<()> {
//! // Sync in, sync out.
//! let squares = map(vec![1, 2, 3], |x| x * x);
//! assert!(squares.is_sync());
//!
//! // Mixing in an async source promotes the result.
//! let slow = Source::stream(futures::stream::iter(vec![10, 20]));
//! let all = concat([Source::from(squares), slow]);
//! assert!(all.is_async());
//! assert_eq!(all.collect().await?, vec![1, 4, 9, 10, 20]);
//!
//! // Results that may need to wait are `Eventual`s.
//! let total = reduce(vec![1, 2, 3], |a, b| a + b, None);
//! assert_eq!(total.await?, Some(6));
//! # Ok(())
//! # }
//! ```

pub use rivulet_core::{
    adapt_push, AsyncSeq, CancellationToken, Eventual, IntoRivuletError, IntoSource, Kind,
    Observer, PushFn, PushSource, Result, ResultExt, RivuletError, RivuletTask, Seq, Source,
    StreamItem, Subject, SubjectError, Subscription, SyncSeq,
};
pub use rivulet_stream::{
    concat, filter, find, flat, flat_map, fold, map, merge, pipe, reduce, Element, Expand,
};

/// Prelude module for convenient imports
pub mod prelude {
    pub use rivulet_core::{
        AsyncSeq, Eventual, IntoSource, Kind, Observer, PushSource, RivuletError, Seq, Source,
        StreamItem, Subject, Subscription, SyncSeq,
    };
    pub use rivulet_stream::{
        concat, filter, find, flat, flat_map, fold, map, merge, pipe, reduce, Element, Expand,
    };
}
