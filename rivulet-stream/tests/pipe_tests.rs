// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use futures::stream;
use rivulet_core::{Kind, Seq, Source};
use rivulet_stream::{filter, map, pipe, reduce};

#[test]
fn test_pipe_applies_stages_left_to_right() {
    let f = pipe!(|x: i32| x + 1, |x: i32| x * 10, |x: i32| x - 3);

    assert_eq!(f(2), 27);
}

#[test]
fn test_pipe_single_stage_is_the_stage() {
    let f = pipe!(|s: &str| s.len());

    assert_eq!(f("four"), 4);
}

#[test]
fn test_pipe_empty_is_identity() {
    let f = pipe!();

    assert_eq!(f(5), 5);
}

#[test]
fn test_pipe_composes_combinators_keeping_sync_mode() -> anyhow::Result<()> {
    // Arrange
    let pipeline = pipe!(
        |s: Vec<i32>| map(s, |x| x * 2),
        |s: Seq<i32>| filter(s, |x| *x > 2),
        |s: Seq<i32>| reduce(s, |acc, x| acc + x, None),
    );

    // Act
    let total = pipeline(vec![1, 2, 3]);

    // Assert
    assert_eq!(total.now().expect("sync result")?, Some(10));
    Ok(())
}

#[tokio::test]
async fn test_pipe_over_async_source() -> anyhow::Result<()> {
    // Arrange
    let pipeline = pipe!(
        |s: Source<i32>| map(s, |x| x + 1),
        |s: Seq<i32>| filter(s, |x| x % 2 == 0),
    );

    // Act
    let out = pipeline(Source::stream(stream::iter(vec![1, 2, 3, 4])));

    // Assert
    assert_eq!(out.kind(), Kind::Async);
    assert_eq!(out.collect().await?, vec![2, 4]);
    Ok(())
}
