// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use futures::StreamExt;
use rivulet_core::{
    adapt_push, Observer, PushFn, PushSource, RivuletError, StreamItem, Subscription,
};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

fn counting_subscription(counter: &Arc<AtomicUsize>) -> Subscription {
    let counter = counter.clone();
    Subscription::new(move || {
        counter.fetch_add(1, Ordering::SeqCst);
    })
}

#[test]
fn test_subscription_releases_once_on_drop() {
    let released = Arc::new(AtomicUsize::new(0));

    let subscription = counting_subscription(&released);
    drop(subscription);

    assert_eq!(released.load(Ordering::SeqCst), 1);
}

#[test]
fn test_explicit_unsubscribe_releases_once() {
    let released = Arc::new(AtomicUsize::new(0));

    counting_subscription(&released).unsubscribe();

    assert_eq!(released.load(Ordering::SeqCst), 1);
}

#[test]
fn test_observer_callbacks_receive_signals() {
    // Arrange
    let values = Arc::new(Mutex::new(Vec::new()));
    let completed = Arc::new(AtomicUsize::new(0));
    let (sink, done) = (values.clone(), completed.clone());
    let producer = PushFn::new(|mut observer: Observer<&'static str>| {
        observer.next("a");
        observer.next("b");
        observer.complete();
        Subscription::empty()
    });

    // Act
    let _subscription = Box::new(producer).subscribe(Observer::new(
        move |v| sink.lock().unwrap().push(v),
        |_| panic!("no error expected"),
        move || {
            done.fetch_add(1, Ordering::SeqCst);
        },
    ));

    // Assert
    assert_eq!(*values.lock().unwrap(), vec!["a", "b"]);
    assert_eq!(completed.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_adapted_producer_yields_values_then_ends() -> anyhow::Result<()> {
    let producer = PushFn::new(|mut observer: Observer<i32>| {
        for value in 0..3 {
            observer.next(value);
        }
        observer.complete();
        Subscription::empty()
    });

    let values = adapt_push(Box::new(producer)).try_collect().await?;

    assert_eq!(values, vec![0, 1, 2]);
    Ok(())
}

#[tokio::test]
async fn test_adapted_producer_error_terminates_sequence() {
    // Arrange
    let producer = PushFn::new(|mut observer: Observer<i32>| {
        observer.next(0);
        observer.error(RivuletError::stream_error("producer failed"));
        Subscription::empty()
    });

    // Act
    let mut seq = adapt_push(Box::new(producer));

    // Assert
    assert_eq!(seq.next().await, Some(StreamItem::Value(0)));
    assert!(matches!(seq.next().await, Some(StreamItem::Error(_))));
    assert_eq!(seq.next().await, None);
}

#[tokio::test]
async fn test_dropping_adapted_sequence_releases_subscription() {
    // Arrange
    let released = Arc::new(AtomicUsize::new(0));
    let subscription = counting_subscription(&released);
    let producer = PushFn::new(move |mut observer: Observer<i32>| {
        observer.next(1);
        subscription
    });
    let mut seq = adapt_push(Box::new(producer));

    // Act
    assert_eq!(seq.next().await, Some(StreamItem::Value(1)));
    assert_eq!(released.load(Ordering::SeqCst), 0);
    drop(seq);

    // Assert
    assert_eq!(released.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_dropped_observer_is_treated_as_completion() -> anyhow::Result<()> {
    let producer = PushFn::new(|mut observer: Observer<i32>| {
        observer.next(9);
        drop(observer);
        Subscription::empty()
    });

    let values = adapt_push(Box::new(producer)).try_collect().await?;

    assert_eq!(values, vec![9]);
    Ok(())
}
