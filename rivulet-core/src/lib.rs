// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Core types for rivulet: classified sources, output sequences and the push protocol.
//!
//! Combinators in `rivulet-stream` accept anything implementing [`IntoSource`],
//! classify it once as [`Kind::Sync`], [`Kind::Async`] or [`Kind::Push`], and return a
//! [`Seq`] whose mode follows the promotion rule of [`Kind::output`].

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]

#[cfg(not(feature = "runtime-tokio"))]
compile_error!("rivulet-core needs a runtime feature; enable `runtime-tokio`");

mod logging;

pub mod cancellation_token;
pub mod error;
pub mod eventual;
pub mod mutex;
pub mod push;
pub mod seq;
pub mod source;
pub mod stream_item;
pub mod subject;
pub mod task;

pub use self::cancellation_token::CancellationToken;
pub use self::error::{IntoRivuletError, Result, ResultExt, RivuletError, SubjectError};
pub use self::eventual::Eventual;
pub use self::push::{adapt_push, Observer, PushFn, PushSource, Subscription};
pub use self::seq::{AsyncSeq, Seq, SyncSeq};
pub use self::source::{IntoSource, Kind, Source};
pub use self::stream_item::StreamItem;
pub use self::subject::Subject;
pub use self::task::RivuletTask;
