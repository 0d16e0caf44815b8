// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Lock used for state shared between producers and consumers.

pub use parking_lot::Mutex;
