// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use futures::StreamExt;
use rivulet::prelude::*;
use rivulet::ResultExt;
use rivulet_test_utils::{failing_after, test_channel_with_errors, unwrap_value};

#[derive(Debug, thiserror::Error)]
#[error("sensor offline")]
struct SensorOffline;

#[tokio::test]
async fn test_merge_failure_after_values_reaches_consumer() -> anyhow::Result<()> {
    // Arrange
    let mut merged = merge([failing_after(vec![0, 1, 2], "producer failed")]);

    // Act
    let mut seen = Vec::new();
    let mut failure = None;
    while let Some(item) = merged.next().await {
        match item {
            StreamItem::Value(v) => seen.push(v),
            StreamItem::Error(e) => failure = Some(e),
        }
    }

    // Assert
    assert_eq!(seen, vec![0, 1, 2]);
    assert_eq!(
        failure.map(|e| e.to_string()),
        Some("Stream processing error: producer failed".to_string())
    );
    Ok(())
}

#[tokio::test]
async fn test_error_passes_through_a_whole_pipeline() {
    // Arrange
    let pipeline = pipe!(
        |s: Source<i32>| map(s, |x| x + 1),
        |s: Seq<i32>| filter(s, |_| true),
        |s: Seq<i32>| find(s, |x| *x > 100),
    );

    // Act
    let result = pipeline(failing_after(vec![1, 2, 3], "upstream")).await;

    // Assert
    assert!(result.is_err());
}

#[tokio::test]
async fn test_user_error_keeps_its_source_and_gains_context() -> anyhow::Result<()> {
    // Arrange
    let (tx, seq) = test_channel_with_errors::<i32>();
    let mut mapped = map(seq, |x| x * 10).into_async();

    // Act
    tx.send(StreamItem::Value(1)).await?;
    tx.send(StreamItem::Error(RivuletError::user_error(SensorOffline))).await?;

    // Assert
    assert_eq!(unwrap_value(&mut mapped).await, 10);
    let err = match mapped.next().await {
        Some(StreamItem::Error(err)) => err,
        other => panic!("expected an error, got {other:?}"),
    };
    assert!(matches!(err, RivuletError::UserError(_)));
    let with_context = Err::<(), _>(err).context("reading sensors").unwrap_err();
    assert_eq!(with_context.to_string(), "Stream processing error: reading sensors: sensor offline");
    Ok(())
}

#[test]
fn test_sync_error_stops_reduce() {
    let source = Source::try_iter(vec![Ok(1), Err(RivuletError::stream_error("bad read")), Ok(3)]);

    let result = reduce(source, |a, b| a + b, None).now().expect("sync result");

    assert!(matches!(result, Err(RivuletError::StreamProcessingError { .. })));
}
