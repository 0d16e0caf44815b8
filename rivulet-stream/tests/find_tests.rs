// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use futures::stream;
use rivulet_core::{RivuletError, Source};
use rivulet_stream::find;
use rivulet_test_utils::{failing_after, CountingPush};

#[test]
fn test_find_sync_is_immediate() -> anyhow::Result<()> {
    // Act
    let found = find(vec![1, 2, 3], |x| x % 2 == 0);

    // Assert
    assert!(found.is_now());
    assert_eq!(found.now().expect("sync result")?, Some(2));
    Ok(())
}

#[test]
fn test_find_without_match_is_none() -> anyhow::Result<()> {
    let found = find(vec![1, 3], |x| x % 2 == 0);

    assert_eq!(found.now().expect("sync result")?, None);
    Ok(())
}

#[test]
fn test_find_stops_pulling_after_match() -> anyhow::Result<()> {
    // Arrange
    let pulled = std::sync::Arc::new(std::sync::atomic::AtomicUsize::new(0));
    let counter = pulled.clone();
    let source = Source::iter((1..=100).inspect(move |_| {
        counter.fetch_add(1, std::sync::atomic::Ordering::SeqCst);
    }));

    // Act
    let found = find(source, |x| *x == 3).now().expect("sync result")?;

    // Assert
    assert_eq!(found, Some(3));
    assert_eq!(pulled.load(std::sync::atomic::Ordering::SeqCst), 3);
    Ok(())
}

#[test]
fn test_find_sync_error_before_match() {
    let source = Source::try_iter(vec![Ok(1), Err(RivuletError::stream_error("boom")), Ok(2)]);

    let found = find(source, |x| *x == 2).now().expect("sync result");

    assert!(found.is_err());
}

#[tokio::test]
async fn test_find_async_is_deferred() -> anyhow::Result<()> {
    // Act
    let found = find(Source::stream(stream::iter(vec![4, 5, 6])), |x| *x > 4);

    // Assert
    assert!(!found.is_now());
    assert_eq!(found.await?, Some(5));
    Ok(())
}

#[tokio::test]
async fn test_find_match_before_error_succeeds() -> anyhow::Result<()> {
    let found = find(failing_after(vec![1, 2], "late failure"), |x| *x == 1).await?;

    assert_eq!(found, Some(1));
    Ok(())
}

#[tokio::test]
async fn test_find_propagates_error_without_match() {
    let found = find(failing_after(vec![1, 2], "no luck"), |x| *x == 9).await;

    assert!(matches!(found, Err(RivuletError::StreamProcessingError { .. })));
}

#[tokio::test]
async fn test_find_releases_push_source_on_match() -> anyhow::Result<()> {
    // Arrange
    let push = CountingPush::new();

    // Act
    let found = find(push.open(vec![7, 8, 9]), |x| *x == 8).await?;

    // Assert
    assert_eq!(found, Some(8));
    assert_eq!(push.subscribed(), 1);
    assert_eq!(push.released(), 1);
    Ok(())
}
