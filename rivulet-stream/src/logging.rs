// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

// Conditional logging shim: forwards to `tracing` when enabled, no-op otherwise.

#[cfg(feature = "tracing")]
#[allow(unused_imports)]
pub(crate) use tracing::{debug, trace, warn};

#[cfg(not(feature = "tracing"))]
macro_rules! discard {
    ($($arg:tt)*) => {};
}

#[cfg(not(feature = "tracing"))]
#[allow(unused_imports)]
pub(crate) use {discard as debug, discard as trace, discard as warn};
