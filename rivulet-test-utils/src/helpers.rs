// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use std::time::Duration;

use futures::stream::{Stream, StreamExt};
use rivulet_core::{StreamItem, Subject};
use tokio::time::sleep;

/// Panics if `stream` yields anything within `timeout_ms`.
pub async fn assert_no_element_emitted<S, T>(stream: &mut S, timeout_ms: u64)
where
    S: Stream<Item = T> + Unpin,
{
    tokio::select! {
        _item = stream.next() => {
            panic!("Unexpected element emitted, expected no output.");
        }
        _ = sleep(Duration::from_millis(timeout_ms)) => {}
    }
}

/// Awaits the next item and returns its value, panicking on an error or on completion.
pub async fn unwrap_value<S, T>(stream: &mut S) -> T
where
    S: Stream<Item = StreamItem<T>> + Unpin,
{
    match stream.next().await {
        Some(StreamItem::Value(value)) => value,
        Some(StreamItem::Error(err)) => panic!("expected a value, got error: {err}"),
        None => panic!("expected a value, stream ended"),
    }
}

/// Yields to the runtime until `subject` has at least `count` observers.
///
/// Push sources subscribe lazily on first poll, so a test driving a subject from the
/// outside waits here before emitting.
pub async fn wait_for_subscribers<T>(subject: &Subject<T>, count: usize)
where
    T: Clone + Send + 'static,
{
    while subject.subscriber_count() < count {
        tokio::task::yield_now().await;
    }
}
