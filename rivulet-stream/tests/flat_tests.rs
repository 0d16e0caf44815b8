// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use futures::{stream, StreamExt};
use rivulet_core::{Seq, Source, StreamItem};
use rivulet_stream::{flat, flat_map, map, Element};
use rivulet_test_utils::{failing_after, CountingPush};

#[tokio::test]
async fn test_flat_expands_one_level() -> anyhow::Result<()> {
    // Arrange
    let source = vec![
        Element::Value(1),
        Element::nested(vec![2, 3]),
        Element::Value(4),
    ];

    // Act
    let flattened = flat(source);

    // Assert
    assert_eq!(flattened.try_collect().await?, vec![1, 2, 3, 4]);
    Ok(())
}

#[tokio::test]
async fn test_flat_over_vectors() -> anyhow::Result<()> {
    let flattened = flat(vec![vec![1, 2], vec![], vec![3]]);

    assert_eq!(flattened.try_collect().await?, vec![1, 2, 3]);
    Ok(())
}

#[tokio::test]
async fn test_flat_does_not_unwrap_deeper_levels() -> anyhow::Result<()> {
    // Arrange
    let source = vec![vec![vec![1, 2]], vec![vec![3]]];

    // Act
    let flattened = flat(source).try_collect().await?;

    // Assert
    assert_eq!(flattened, vec![vec![1, 2], vec![3]]);
    Ok(())
}

#[tokio::test]
async fn test_flat_drains_async_and_push_inner_sources() -> anyhow::Result<()> {
    // Arrange
    let push = CountingPush::new();
    let source = vec![
        Element::nested(Source::stream(stream::iter(vec![1, 2]))),
        Element::Nested(push.completing(vec![3, 4])),
        Element::Value(5),
    ];

    // Act
    let flattened = flat(source).try_collect().await?;

    // Assert
    assert_eq!(flattened, vec![1, 2, 3, 4, 5]);
    assert_eq!(push.released(), 1);
    Ok(())
}

#[tokio::test]
async fn test_flat_inner_error_terminates_output() {
    // Arrange
    let source = vec![
        Element::nested(failing_after(vec![1], "inner failed")),
        Element::Value(2),
    ];

    // Act
    let mut flattened = flat(source);

    // Assert
    assert_eq!(flattened.next().await, Some(StreamItem::Value(1)));
    assert!(matches!(flattened.next().await, Some(StreamItem::Error(_))));
    assert_eq!(flattened.next().await, None);
}

#[tokio::test]
async fn test_flat_map_expands_each_element() -> anyhow::Result<()> {
    // Arrange
    let source = vec![1, 2, 3];

    // Act
    let expanded = flat_map(source, |x| vec![x; x]);

    // Assert
    assert_eq!(expanded.try_collect().await?, vec![1, 2, 2, 3, 3, 3]);
    Ok(())
}

#[tokio::test]
async fn test_flat_map_matches_flat_of_map() -> anyhow::Result<()> {
    let split = |s: &'static str| -> Seq<char> { map(s.chars().collect::<Vec<_>>(), |c| c) };

    let left = flat_map(vec!["ab", "c"], split).try_collect().await?;
    let right = flat(map(vec!["ab", "c"], split)).try_collect().await?;

    assert_eq!(left, right);
    assert_eq!(left, vec!['a', 'b', 'c']);
    Ok(())
}
