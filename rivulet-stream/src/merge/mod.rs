// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Concurrent fan-in of several sources.
//!
//! Every source gets its own producer task draining it into one shared bounded
//! channel, so a slow source never holds back the others. A producer suspends while
//! the channel is full, and yields to the scheduler after every element, so a source
//! that is always ready cannot monopolize the runtime. Elements of one source keep
//! their relative order; across sources they interleave in arrival order.
//!
//! The output completes once every source has completed. The first error any source
//! produces is emitted and closes the output; later values and errors from the other
//! sources are discarded, and those producers stop at their next send. Dropping the
//! output cancels every producer still running.

mod fan_in;

use std::pin::Pin;
use std::task::{Context, Poll};

use async_channel::Receiver;
use futures::stream::{self, Stream, StreamExt};
use pin_project::pin_project;
use rivulet_core::{AsyncSeq, IntoSource, RivuletTask, Source, StreamItem};

use self::fan_in::{produce, FanInState, ProducerGuard};
use crate::logging::debug;

/// Elements buffered between the producers and the consumer.
pub const OUTPUT_CAPACITY: usize = 16;

/// Merges `sources` into a single asynchronous sequence.
///
/// Producers are spawned on the first poll of the output, which must happen within a
/// Tokio runtime. With no sources the output completes at once; with a single source
/// it reproduces that source.
///
/// # Examples
///
/// ```rust
/// use rivulet_core::Source;
/// use rivulet_stream::merge;
///
/// # #[tokio::main]
/// # async fn main() -> rivulet_core::Result<()> {
/// let merged = merge([Source::iter(vec![1, 2]), Source::iter(vec![3])]);
///
/// let mut values = merged.try_collect().await?;
/// values.sort_unstable();
/// assert_eq!(values, vec![1, 2, 3]);
/// # Ok(())
/// # }
/// ```
pub fn merge<I, T>(sources: I) -> AsyncSeq<T>
where
    I: IntoIterator,
    I::Item: IntoSource<Item = T>,
    T: Send + 'static,
{
    let sources: Vec<Source<T>> = sources.into_iter().map(IntoSource::into_source).collect();
    AsyncSeq::new(stream::once(async move { start(sources) }).flatten())
}

fn start<T: Send + 'static>(sources: Vec<Source<T>>) -> Merged<T> {
    let (tx, rx) = async_channel::bounded(OUTPUT_CAPACITY);
    let state = FanInState::new(sources.len());

    debug!("merge: fanning in {} sources", sources.len());
    if sources.is_empty() {
        tx.close();
    }

    let producers = sources
        .into_iter()
        .enumerate()
        .map(|(index, source)| {
            let guard = ProducerGuard::new(index, state.clone(), tx.clone());
            RivuletTask::spawn(move |cancel| produce(source, guard, cancel))
        })
        .collect();

    Merged {
        output: rx,
        _producers: producers,
    }
}

#[pin_project]
struct Merged<T> {
    #[pin]
    output: Receiver<StreamItem<T>>,
    _producers: Vec<RivuletTask>,
}

impl<T> Stream for Merged<T> {
    type Item = StreamItem<T>;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        self.project().output.poll_next(cx)
    }
}
