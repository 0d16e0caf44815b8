// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Mode-preserving combinators over [`rivulet_core`] sources.
//!
//! Every combinator accepts anything implementing [`IntoSource`](rivulet_core::IntoSource)
//! and keeps the cheapest execution mode its inputs allow:
//!
//! | Combinator | Output |
//! |---|---|
//! | [`map`], [`filter`] | sync iff the input is sync |
//! | [`concat`] | sync iff every input is sync |
//! | [`flat`], [`flat_map`], [`merge`] | always async |
//! | [`find`], [`fold`], [`reduce`] | [`Eventual::Now`](rivulet_core::Eventual::Now) iff the input is sync |
//!
//! Push sources are adapted on demand and never appear in an output.

#[cfg(not(feature = "runtime-tokio"))]
compile_error!("rivulet-stream requires the `runtime-tokio` feature");

mod logging;

pub mod concat;
pub mod filter;
pub mod find;
pub mod flat;
pub mod map;
pub mod merge;
mod pipe;
pub mod reduce;

pub use self::concat::concat;
pub use self::filter::filter;
pub use self::find::find;
pub use self::flat::{flat, flat_map, Element, Expand};
pub use self::map::map;
pub use self::merge::merge;
pub use self::reduce::{fold, reduce};
