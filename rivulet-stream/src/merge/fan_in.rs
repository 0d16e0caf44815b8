// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Shared state and per-source producers of a merge.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_channel::Sender;
use futures::future::{select, Either};
use futures::StreamExt;
use rivulet_core::mutex::Mutex;
use rivulet_core::{CancellationToken, Source, StreamItem};

use crate::logging::{debug, trace, warn};

/// Bookkeeping shared by every producer of one merge.
#[derive(Debug)]
pub(super) struct FanInState {
    active: AtomicUsize,
    /// Index of the source whose error was delivered. Set at most once.
    error_latch: Mutex<Option<usize>>,
}

impl FanInState {
    pub(super) fn new(sources: usize) -> Arc<Self> {
        Arc::new(Self {
            active: AtomicUsize::new(sources),
            error_latch: Mutex::new(None),
        })
    }

    /// Claims the right to deliver the merge's only error. Returns `true` if `source`
    /// is the first to fail.
    fn latch(&self, source: usize) -> bool {
        let mut latch = self.error_latch.lock();
        if latch.is_some() {
            return false;
        }
        *latch = Some(source);
        true
    }

    fn has_failed(&self) -> bool {
        self.error_latch.lock().is_some()
    }

    /// Marks one producer as finished. Returns `true` for the last one.
    fn finish_one(&self) -> bool {
        self.active.fetch_sub(1, Ordering::AcqRel) == 1
    }
}

/// Owned by a producer for its whole life; dropping it counts the source as finished.
///
/// The output closes when the last guard drops, whether the producer completed,
/// failed, or was cancelled.
pub(super) struct ProducerGuard<T> {
    index: usize,
    state: Arc<FanInState>,
    output: Sender<StreamItem<T>>,
}

impl<T> ProducerGuard<T> {
    pub(super) fn new(index: usize, state: Arc<FanInState>, output: Sender<StreamItem<T>>) -> Self {
        Self {
            index,
            state,
            output,
        }
    }
}

impl<T> Drop for ProducerGuard<T> {
    fn drop(&mut self) {
        trace!("merge: source {} finished", self.index);
        if self.state.finish_one() {
            debug!("merge: all sources finished, closing output");
            self.output.close();
        }
    }
}

/// Drains one source into the shared output until it ends, fails, the output closes,
/// or `cancel` fires.
pub(super) async fn produce<T: Send + 'static>(
    source: Source<T>,
    guard: ProducerGuard<T>,
    cancel: CancellationToken,
) {
    trace!("merge: source {} started ({:?})", guard.index, source.kind());
    let mut seq = source.into_async();

    loop {
        let item = match select(seq.next(), cancel.cancelled()).await {
            Either::Left((Some(item), _)) => item,
            Either::Left((None, _)) => break,
            Either::Right(_) => {
                trace!("merge: source {} cancelled", guard.index);
                break;
            }
        };

        match item {
            StreamItem::Value(value) => {
                if guard.state.has_failed() {
                    trace!("merge: output failed, source {} stops", guard.index);
                    break;
                }
                // Suspends while the output is full.
                if guard.output.send(StreamItem::Value(value)).await.is_err() {
                    trace!("merge: output closed, source {} stops", guard.index);
                    break;
                }
            }
            StreamItem::Error(err) => {
                if guard.state.latch(guard.index) {
                    warn!("merge: source {} failed: {}", guard.index, err);
                    let _ = guard.output.send(StreamItem::Error(err)).await;
                    guard.output.close();
                }
                break;
            }
        }

        // An always-ready source never suspends on its own.
        tokio::task::yield_now().await;
    }
}
