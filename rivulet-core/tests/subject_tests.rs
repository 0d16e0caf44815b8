// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use rivulet_core::{IntoSource, Observer, RivuletError, SubjectError, Subject};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

#[derive(Default)]
struct Recorder {
    values: Mutex<Vec<i32>>,
    error: Mutex<Option<RivuletError>>,
    completed: AtomicBool,
}

fn recording_observer(recorder: &Arc<Recorder>) -> Observer<i32> {
    let (on_value, on_error, on_complete) = (recorder.clone(), recorder.clone(), recorder.clone());
    Observer::new(
        move |v| on_value.values.lock().unwrap().push(v),
        move |e| *on_error.error.lock().unwrap() = Some(e),
        move || on_complete.completed.store(true, Ordering::SeqCst),
    )
}

#[test]
fn test_broadcasts_to_every_observer() {
    // Arrange
    let subject = Subject::new();
    let (a, b) = (Arc::new(Recorder::default()), Arc::new(Recorder::default()));
    let _sa = subject.observe(recording_observer(&a));
    let _sb = subject.observe(recording_observer(&b));

    // Act
    subject.next(1).unwrap();
    subject.next(2).unwrap();

    // Assert
    assert_eq!(*a.values.lock().unwrap(), vec![1, 2]);
    assert_eq!(*b.values.lock().unwrap(), vec![1, 2]);
    assert_eq!(subject.subscriber_count(), 2);
}

#[test]
fn test_late_observer_misses_earlier_values() {
    let subject = Subject::new();
    subject.next(1).unwrap();

    let late = Arc::new(Recorder::default());
    let _s = subject.observe(recording_observer(&late));
    subject.next(2).unwrap();

    assert_eq!(*late.values.lock().unwrap(), vec![2]);
}

#[test]
fn test_error_reaches_observers_and_closes() {
    // Arrange
    let subject = Subject::new();
    let recorder = Arc::new(Recorder::default());
    let _s = subject.observe(recording_observer(&recorder));

    // Act
    subject.error(RivuletError::stream_error("boom")).unwrap();

    // Assert
    assert!(recorder.error.lock().unwrap().is_some());
    assert!(!recorder.completed.load(Ordering::SeqCst));
    assert!(subject.is_closed());
    assert_eq!(subject.next(3), Err(SubjectError::Closed));
    assert_eq!(
        subject.error(RivuletError::stream_error("again")),
        Err(SubjectError::Closed)
    );
}

#[test]
fn test_close_completes_observers_and_is_idempotent() {
    let subject = Subject::<i32>::new();
    let recorder = Arc::new(Recorder::default());
    let _s = subject.observe(recording_observer(&recorder));

    subject.close();
    subject.close();

    assert!(recorder.completed.load(Ordering::SeqCst));
    assert_eq!(subject.subscriber_count(), 0);
}

#[test]
fn test_observing_closed_subject_completes_immediately() {
    let subject = Subject::<i32>::new();
    subject.close();

    let recorder = Arc::new(Recorder::default());
    let _s = subject.observe(recording_observer(&recorder));

    assert!(recorder.completed.load(Ordering::SeqCst));
}

#[test]
fn test_dropping_subscription_removes_observer() {
    let subject = Subject::new();
    let recorder = Arc::new(Recorder::default());
    let subscription = subject.observe(recording_observer(&recorder));
    assert_eq!(subject.subscriber_count(), 1);

    drop(subscription);
    subject.next(1).unwrap();

    assert_eq!(subject.subscriber_count(), 0);
    assert!(recorder.values.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_subject_adapted_to_pull_sequence() -> anyhow::Result<()> {
    // Arrange
    let subject = Subject::new();
    let seq = subject.clone().into_source().into_async();
    let consumer = tokio::spawn(seq.try_collect());
    while subject.subscriber_count() == 0 {
        tokio::task::yield_now().await;
    }

    // Act
    subject.next(1)?;
    subject.next(2)?;
    subject.close();

    // Assert
    assert_eq!(consumer.await??, vec![1, 2]);
    Ok(())
}
