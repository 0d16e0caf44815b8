// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Test utilities and fixtures for rivulet.
//!
//! Intended for development and testing only.
//!
//! - [`test_channel`] and [`test_channel_with_errors`] give an imperative handle on an
//!   asynchronous source.
//! - [`producers`] builds push sources with observable subscribe/release counts.
//! - [`ErrorInjectingStream`] injects an error at a chosen position.
//! - [`helpers`] holds assertion helpers.
//!
//! ```rust
//! use rivulet_core::StreamItem;
//! use rivulet_test_utils::test_channel;
//! use futures::StreamExt;
//!
//! # #[tokio::main]
//! # async fn main() {
//! let (tx, mut seq) = test_channel();
//! tx.try_send(1).unwrap();
//! drop(tx);
//!
//! assert_eq!(seq.next().await, Some(StreamItem::Value(1)));
//! assert_eq!(seq.next().await, None);
//! # }
//! ```

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]

pub mod error_injection;
pub mod helpers;
pub mod producers;

use async_channel::Sender;
use futures::StreamExt;
use rivulet_core::{AsyncSeq, StreamItem};

pub use error_injection::ErrorInjectingStream;
pub use helpers::{assert_no_element_emitted, unwrap_value, wait_for_subscribers};
pub use producers::{failing_after, CountingPush};

/// Creates a channel whose receiving end is an asynchronous source of plain values.
///
/// The sequence completes once every sender is dropped.
pub fn test_channel<T: Send + 'static>() -> (Sender<T>, AsyncSeq<T>) {
    let (tx, rx) = async_channel::unbounded();
    (tx, AsyncSeq::new(rx.map(StreamItem::Value)))
}

/// Like [`test_channel`], but the sender supplies already classified items so tests
/// can inject errors.
pub fn test_channel_with_errors<T: Send + 'static>() -> (Sender<StreamItem<T>>, AsyncSeq<T>) {
    let (tx, rx) = async_channel::unbounded();
    (tx, AsyncSeq::new(rx))
}
